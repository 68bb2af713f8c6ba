//! The resolution-report input format.
//!
//! Dependency resolution itself is an external collaborator; its output is
//! consumed here as a TOML file carrying (a) the flat list of resolved
//! modules and (b) per-configuration caller records for each module.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use skew_util::errors::{SkewError, SkewResult};

use crate::module::ResolvedModule;

/// A resolution report produced by an external dependency resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionReport {
    /// Flat list of resolved modules, in resolution order.
    #[serde(default, rename = "module")]
    pub modules: Vec<ResolvedModule>,

    /// Per-configuration caller records.
    #[serde(default, rename = "report")]
    pub reports: Vec<ConfigurationReport>,
}

/// Caller records for one resolution configuration (e.g. `compile`, `test`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigurationReport {
    pub configuration: String,
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleCallers>,
}

/// The callers that transitively pulled one module into the graph.
///
/// `callers` is empty for direct (non-transitive) dependencies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleCallers {
    pub organization: String,
    pub name: String,
    #[serde(default)]
    pub callers: Vec<String>,
}

impl ResolutionReport {
    /// Load and parse a resolution report from the given path.
    pub fn from_path(path: &Path) -> SkewResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| SkewError::Input {
            message: format!("Failed to read resolution report: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            SkewError::Input {
                message: format!("Failed to parse resolution report: {e}"),
            }
            .into()
        })
    }

    /// Build the caller index by flattening all configuration reports.
    pub fn caller_index(&self) -> CallerIndex {
        CallerIndex::from_reports(&self.reports)
    }
}

/// Lookup from a module's `organization:name` key to its caller chain.
#[derive(Debug, Default)]
pub struct CallerIndex {
    chains: HashMap<String, Vec<String>>,
}

impl CallerIndex {
    /// Flatten per-configuration records into a single lookup table.
    ///
    /// Keys are built once here; a module recorded under several
    /// configurations keeps the last record.
    pub fn from_reports(reports: &[ConfigurationReport]) -> Self {
        let mut chains = HashMap::new();
        for report in reports {
            for entry in &report.modules {
                chains.insert(
                    format!("{}:{}", entry.organization, entry.name),
                    entry.callers.clone(),
                );
            }
        }
        tracing::debug!(modules = chains.len(), "built caller index");
        Self { chains }
    }

    /// The caller chain for an `organization:name` key (see
    /// [`ResolvedModule::key`]), if a record exists.
    pub fn callers(&self, key: &str) -> Option<&[String]> {
        self.chains.get(key).map(|v| v.as_slice())
    }

    pub fn len(&self) -> usize {
        self.chains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }
}
