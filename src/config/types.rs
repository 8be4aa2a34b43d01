use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanHealthError};
use crate::utils::SUMMARY_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckConfig {
    /// How many module names an issue message lists before truncating.
    #[serde(default = "default_summary_limit")]
    pub summary_limit: usize,
    /// Selected modules above this many bytes are reported as oversized.
    #[serde(default = "default_max_module_size")]
    pub max_module_size: u64,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            summary_limit: default_summary_limit(),
            max_module_size: default_max_module_size(),
        }
    }
}

impl CheckConfig {
    /// # Errors
    /// Returns error if `summary_limit` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.summary_limit == 0 {
            return Err(ScanHealthError::InvalidConfig {
                key: "checks.summary_limit",
                reason: "must list at least one module".to_string(),
            });
        }
        Ok(())
    }
}

/// Regex patterns matched against module names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleConfig {
    #[serde(default)]
    pub ignored: Vec<String>,
    #[serde(default)]
    pub third_party: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Shape of `scan-health.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanHealthToml {
    #[serde(default)]
    pub checks: CheckConfig,
    #[serde(default)]
    pub modules: ModuleConfig,
    #[serde(default)]
    pub preferences: Preferences,
}

const fn default_summary_limit() -> usize { SUMMARY_LIMIT }
const fn default_max_module_size() -> u64 { 1_000_000_000 }
