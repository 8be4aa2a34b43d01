use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::Result;
use crate::report::Report;

/// Serialises the report as JSON indented with four spaces.
///
/// # Errors
/// Returns error if serialisation fails.
pub fn render_json(report: &Report) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    report.serialize(&mut ser)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
