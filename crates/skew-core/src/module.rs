use std::fmt;

use serde::{Deserialize, Serialize};

/// A single resolved dependency module.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResolvedModule {
    pub organization: String,
    pub name: String,
    pub version: String,
}

impl ResolvedModule {
    /// `organization:name` identifier (without version), the key used for
    /// caller-chain lookups.
    pub fn key(&self) -> String {
        format!("{}:{}", self.organization, self.name)
    }
}

impl fmt::Display for ResolvedModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.organization, self.name, self.version)
    }
}
