//! Output of a finished report, as JSON or for the terminal.

mod console;
mod json;

pub use console::{print_report, render_text};
pub use json::render_json;

use std::fs;
use std::path::Path;

use tracing::info;

use crate::config::OutputFormat;
use crate::error::{Result, ScanHealthError};
use crate::report::Report;

/// Renders the report in `format` and writes it to `output`, or to stdout.
///
/// # Errors
/// Returns error if rendering fails or the output file cannot be written.
pub fn emit(report: &Report, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => render_json(report)?,
        OutputFormat::Text if output.is_none() => {
            print_report(report);
            return Ok(());
        }
        OutputFormat::Text => {
            colored::control::set_override(false);
            let text = render_text(report);
            colored::control::unset_override();
            text
        }
    };

    match output {
        Some(path) => {
            fs::write(path, rendered).map_err(|source| ScanHealthError::Io {
                source,
                path: path.to_path_buf(),
            })?;
            info!(path = %path.display(), "report saved");
        }
        None => println!("{rendered}"),
    }
    Ok(())
}
