use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::OutputFormat;
use crate::types::Severity;

#[derive(Parser)]
#[command(name = "scan-health", version, about = "Diagnose the health of a static-analysis scan")]
pub struct Cli {
    /// Application info payload (getappinfo.do XML)
    #[arg(long, value_name = "FILE")]
    pub app_info: PathBuf,
    /// Pre-scan module list payload (getprescanresults.do XML)
    #[arg(long, value_name = "FILE")]
    pub prescan: Option<PathBuf>,
    /// Detailed report payload (detailedreport.do XML)
    #[arg(long, value_name = "FILE")]
    pub detailed_report: Option<PathBuf>,
    /// Build the payloads belong to
    #[arg(long, default_value_t = 0)]
    pub build_id: u64,
    /// The payloads describe an older scan; tolerate missing legacy data
    #[arg(long)]
    pub previous_scan: bool,
    /// Output format (defaults to the config file preference)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
    /// Write the report to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Config file (defaults to ./scan-health.toml when present)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Exit with a distinct code when an issue of this severity or higher is found
    #[arg(long, value_name = "SEVERITY")]
    pub fail_on: Option<Severity>,
    /// Enable verbose logging
    #[arg(long, short)]
    pub verbose: bool,
    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
