// src/config/mod.rs
pub mod types;

pub use self::types::{CheckConfig, ModuleConfig, OutputFormat, Preferences, ScanHealthToml};

use std::fs;
use std::path::Path;

use regex::Regex;
use tracing::debug;

use crate::error::{Result, ScanHealthError};
use crate::report::ModuleRules;

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE: &str = "scan-health.toml";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub checks: CheckConfig,
    pub modules: ModuleConfig,
    pub preferences: Preferences,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from `path`, or from `scan-health.toml` in the
    /// working directory when no path is given and that file exists.
    ///
    /// # Errors
    /// Returns error if an explicit path cannot be read or the TOML is invalid.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(CONFIG_FILE).is_file() => Self::from_file(Path::new(CONFIG_FILE)),
            None => Ok(Self::new()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ScanHealthError::Io {
            source,
            path: path.to_path_buf(),
        })?;
        debug!(path = %path.display(), "loaded config");
        Self::parse_toml(&content)
    }

    /// Parses the contents of a `scan-health.toml` file.
    ///
    /// # Errors
    /// Returns error if the TOML is invalid or a check setting is out of range.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let parsed: ScanHealthToml = toml::from_str(content)?;
        parsed.checks.validate()?;
        Ok(Self {
            checks: parsed.checks,
            modules: parsed.modules,
            preferences: parsed.preferences,
        })
    }

    /// Compiles the module name patterns.
    ///
    /// # Errors
    /// Returns error if a module pattern is not a valid regex.
    pub fn module_rules(&self) -> Result<ModuleRules> {
        Ok(ModuleRules {
            ignored: compile(&self.modules.ignored)?,
            third_party: compile(&self.modules.third_party)?,
        })
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| Regex::new(p).map_err(ScanHealthError::from))
        .collect()
}
