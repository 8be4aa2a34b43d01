use chrono::{DateTime, Utc};

use super::{attr, attr_u64, children, parse_document, Ingestor, SourceRequirement};
use crate::error::{Result, ScanHealthError};
use crate::report::Report;
use crate::utils::unescape_html;

const SOURCE: &str = "app_info";

/// Application details (`getappinfo.do`). Supplies the scan's core metadata.
#[derive(Debug, Clone)]
pub struct AppInfoSource {
    xml: String,
}

impl AppInfoSource {
    #[must_use]
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }
}

impl Ingestor for AppInfoSource {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn requirement(&self) -> SourceRequirement {
        SourceRequirement::Required
    }

    fn ingest(&self, report: &mut Report) -> Result<()> {
        let doc = parse_document(&self.xml, SOURCE, "appinfo")?;
        let application = children(doc.root_element(), "application")
            .next()
            .ok_or(ScanHealthError::MissingElement {
                source_id: SOURCE,
                element: "application",
            })?;

        let application_id = attr_u64(application, "app_id", SOURCE)?;
        let application_name = unescape_html(attr(application, "app_name"));
        let modified = attr(application, "modified_date");
        let last_activity = if modified.is_empty() {
            None
        } else {
            Some(parse_date(modified)?)
        };

        let scan = report.scan_mut();
        scan.application_id = application_id;
        scan.application_name = application_name;
        if last_activity.is_some() {
            scan.last_app_activity = last_activity;
        }
        Ok(())
    }
}

/// Parses the upstream timestamp format (`2023-04-05T10:11:12-04:00`).
fn parse_date(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|source| ScanHealthError::InvalidDate {
            raw: raw.to_string(),
            source,
        })
}
