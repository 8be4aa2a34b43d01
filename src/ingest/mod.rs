// src/ingest/mod.rs
//! Ingestion adapters: each one turns an upstream payload into module
//! instances and scan metadata on the [`Report`].

mod app_info;
mod detailed_report;
mod prescan;

pub use app_info::AppInfoSource;
pub use detailed_report::DetailedReportSource;
pub use prescan::{issue_details, PrescanSource};

use roxmltree::{Document, Node};
use tracing::{debug, warn};

use crate::error::{Result, ScanHealthError};
use crate::report::Report;

/// Whether a failing source aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceRequirement {
    /// The report cannot be produced without this source.
    Required,
    /// Older scans may not have this data. A missing or unparseable payload is
    /// tolerated for them; bad data inside a valid payload never is.
    Legacy,
}

/// A data source that registers facts into the report.
pub trait Ingestor {
    /// Stable identifier recorded on every instance this source creates.
    fn source(&self) -> &'static str;

    fn requirement(&self) -> SourceRequirement;

    /// Adds this source's data to the report.
    ///
    /// # Errors
    /// Returns error if the payload is malformed.
    fn ingest(&self, report: &mut Report) -> Result<()>;
}

/// Runs every source in order. Once this returns, ingestion is complete.
///
/// # Errors
/// Returns the first error from a required source. For a legacy source on a
/// previous scan, only a missing or unparseable payload is skipped.
pub fn ingest_all(report: &mut Report, sources: &[&dyn Ingestor]) -> Result<()> {
    for source in sources {
        debug!(source = source.source(), "ingesting");
        match source.ingest(report) {
            Ok(()) => {}
            Err(e)
                if source.requirement() == SourceRequirement::Legacy
                    && report.scan().is_previous_scan
                    && e.is_missing_payload() =>
            {
                warn!(source = source.source(), error = %e, "no data for previous scan");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

pub(crate) fn parse_document<'a>(
    xml: &'a str,
    source_id: &'static str,
    expected_root: &'static str,
) -> Result<Document<'a>> {
    let doc = Document::parse(xml).map_err(|source| ScanHealthError::Xml { source, source_id })?;
    let found = doc.root_element().tag_name().name();
    if found != expected_root {
        return Err(ScanHealthError::UnexpectedRoot {
            source_id,
            expected: expected_root,
            found: found.to_string(),
        });
    }
    Ok(doc)
}

pub(crate) fn children<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

pub(crate) fn attr<'a>(node: Node<'a, '_>, name: &str) -> &'a str {
    node.attribute(name).unwrap_or_default()
}

pub(crate) fn attr_u64(node: Node, name: &'static str, source_id: &'static str) -> Result<u64> {
    let value = attr(node, name).trim();
    if value.is_empty() {
        return Ok(0);
    }
    value.parse().map_err(|_| ScanHealthError::InvalidAttribute {
        source_id,
        attribute: name,
        value: value.to_string(),
    })
}

pub(crate) fn attr_bool(node: Node, name: &'static str, source_id: &'static str) -> Result<bool> {
    let value = attr(node, name).trim();
    if value.is_empty() || value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else {
        Err(ScanHealthError::InvalidAttribute {
            source_id,
            attribute: name,
            value: value.to_string(),
        })
    }
}
