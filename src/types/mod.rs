use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

mod module;
pub use module::{Module, ModuleInstance};

/// How serious an issue is. Ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Label shown in the report output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|severity| severity.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown severity '{s}' (expected low, medium, high or critical)"))
    }
}

/// A problem found by a check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub message: String,
    pub severity: Severity,
    /// Affected module names, in the order the check reported them.
    pub modules: Vec<String>,
}

/// Identity of the scan a report describes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanMetadata {
    pub application_id: u64,
    pub application_name: String,
    pub build_id: u64,
    pub last_app_activity: Option<DateTime<Utc>>,
    /// The report covers an older build; sources introduced later may be absent.
    pub is_previous_scan: bool,
}
