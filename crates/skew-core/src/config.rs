use serde::{Deserialize, Serialize};
use skew_util::errors::{SkewError, SkewResult};
use std::path::Path;

/// Project configuration loaded from `skew.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub audit: AuditConfig,
}

/// Audit settings from `[audit]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Treat any version mismatch as fatal for the whole check.
    #[serde(default, rename = "fail-on-mismatch")]
    pub fail_on_mismatch: bool,

    /// Organization owning the audited module families.
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Width of the cross-build suffix stripped from module names before
    /// family lookup (e.g. 5 for a `_2.13` Scala binary-version marker).
    #[serde(default = "default_suffix_len", rename = "suffix-len")]
    pub suffix_len: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            fail_on_mismatch: false,
            organization: default_organization(),
            suffix_len: default_suffix_len(),
        }
    }
}

fn default_organization() -> String {
    "org.apache.pekko".to_string()
}

fn default_suffix_len() -> usize {
    5
}

impl Config {
    /// Load configuration from the given path, or return defaults if the
    /// file doesn't exist.
    pub fn load(path: &Path) -> SkewResult<Self> {
        if path.is_file() {
            let content = std::fs::read_to_string(path).map_err(|e| SkewError::Config {
                message: format!("Failed to read config: {e}"),
            })?;
            toml::from_str(&content).map_err(|e| {
                SkewError::Config {
                    message: format!("Failed to parse config: {e}"),
                }
                .into()
            })
        } else {
            Ok(Self::default())
        }
    }
}
