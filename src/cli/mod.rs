// src/cli/mod.rs
//! Command-line driver: read payloads, ingest, run the checks, render.

pub mod args;

pub use args::{Cli, FormatArg};

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use crate::checks::run_checks;
use crate::config::Config;
use crate::error::ScanHealthError;
use crate::exit::ScanHealthExit;
use crate::ingest::{ingest_all, AppInfoSource, DetailedReportSource, Ingestor, PrescanSource};
use crate::report::Report;
use crate::reporting;
use crate::types::ScanMetadata;

/// Runs one scan health evaluation as described by the command line.
///
/// # Errors
/// Returns error if a payload or the config cannot be read, ingestion of a
/// required source fails, or the report cannot be written.
pub fn run(cli: &Cli) -> Result<ScanHealthExit> {
    let config = Config::load(cli.config.as_deref()).context("Could not load config")?;
    let rules = config.module_rules().context("Invalid module pattern in config")?;

    let mut report = Report::new(ScanMetadata {
        build_id: cli.build_id,
        is_previous_scan: cli.previous_scan,
        ..ScanMetadata::default()
    });

    let app_info = AppInfoSource::new(read_payload(&cli.app_info)?);
    let prescan = cli.prescan.as_deref().map(read_payload).transpose()?.map(PrescanSource::new);
    let detailed = cli
        .detailed_report
        .as_deref()
        .map(read_payload)
        .transpose()?
        .map(DetailedReportSource::new);

    let mut sources: Vec<&dyn Ingestor> = vec![&app_info];
    if let Some(prescan) = &prescan {
        sources.push(prescan);
    }
    if let Some(detailed) = &detailed {
        sources.push(detailed);
    }

    if let Err(e) = ingest_all(&mut report, &sources) {
        if e.is_payload_error() {
            eprintln!("{} {e}", "error:".red().bold());
            return Ok(ScanHealthExit::InvalidInput);
        }
        return Err(e).context("Could not ingest scan data");
    }

    report.apply_classification(&rules);
    info!(modules = report.modules().len(), "ingestion complete");

    run_checks(&mut report, &config.checks);

    let format = cli.format.map_or(config.preferences.format, Into::into);
    reporting::emit(&report, format, cli.output.as_deref()).context("Could not render report")?;

    Ok(exit_for(&report, cli))
}

fn read_payload(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|source| ScanHealthError::Io {
            source,
            path: path.to_path_buf(),
        })
        .with_context(|| format!("Could not read {}", path.display()))
}

fn exit_for(report: &Report, cli: &Cli) -> ScanHealthExit {
    match cli.fail_on {
        Some(threshold) if report.issues_at_or_above(threshold).next().is_some() => {
            ScanHealthExit::IssuesFound
        }
        _ => ScanHealthExit::Success,
    }
}
