pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod exit;
pub mod ingest;
pub mod report;
pub mod reporting;
pub mod size;
pub mod types;
pub mod utils;
