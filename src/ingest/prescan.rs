use super::{attr, attr_bool, attr_u64, children, parse_document, Ingestor, SourceRequirement};
use crate::error::Result;
use crate::report::Report;
use crate::size::normalize_size;
use crate::types::ModuleInstance;
use crate::utils::{unescape_html, OrderedSet};

const SOURCE: &str = "prescan_module_list";

/// Status the upstream service gives a module with nothing to report.
const STATUS_OK: &str = "OK";

/// Pre-scan module list (`getprescanresults.do`).
///
/// Not available for scans older than the pre-scan API.
#[derive(Debug, Clone)]
pub struct PrescanSource {
    xml: String,
}

impl PrescanSource {
    #[must_use]
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }
}

impl Ingestor for PrescanSource {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn requirement(&self) -> SourceRequirement {
        SourceRequirement::Legacy
    }

    fn ingest(&self, report: &mut Report) -> Result<()> {
        let doc = parse_document(&self.xml, SOURCE, "prescanresults")?;

        // Build every instance first so a malformed module leaves the report untouched.
        let mut parsed = Vec::new();
        for module in children(doc.root_element(), "module") {
            let status = unescape_html(attr(module, "status"));
            let details: Vec<String> = children(module, "issue")
                .map(|issue| unescape_html(attr(issue, "details")))
                .collect();
            let size = unescape_html(attr(module, "size"));

            let instance = ModuleInstance {
                source: SOURCE.to_string(),
                id: attr_u64(module, "id", SOURCE)?,
                issues: issue_details(&status, &details),
                status,
                platform: unescape_html(attr(module, "platform")),
                size_bytes: normalize_size(&size)?,
                size,
                md5: attr(module, "checksum").to_string(),
                has_fatal_errors: attr_bool(module, "has_fatal_errors", SOURCE)?,
                is_dependency: attr_bool(module, "is_dependency", SOURCE)?,
                is_selected: false,
            };
            parsed.push((unescape_html(attr(module, "name")), instance));
        }

        for (name, instance) in parsed {
            report.add_module_instance(&name, instance);
        }
        Ok(())
    }
}

/// Collects the distinct issue details for a module: the explicit issue
/// entries first, then each part of a non-OK status.
#[must_use]
pub fn issue_details<S: AsRef<str>>(status: &str, details: &[S]) -> OrderedSet<String> {
    let mut issues: OrderedSet<String> = details.iter().map(|d| d.as_ref().to_string()).collect();

    if status != STATUS_OK {
        issues.extend(
            status
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(str::to_string),
        );
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_status_adds_nothing() {
        let issues = issue_details("OK", &["Missing debug symbols"]);
        assert_eq!(issues.as_slice(), ["Missing debug symbols"]);
    }

    #[test]
    fn empty_status_adds_nothing() {
        let none: [&str; 0] = [];
        assert!(issue_details("", &none).is_empty());
    }

    #[test]
    fn status_parts_are_split_and_deduplicated() {
        let issues = issue_details(
            "Missing Supporting Files, Unsupported Framework,Missing Supporting Files",
            &["Unsupported Framework"],
        );
        assert_eq!(
            issues.as_slice(),
            ["Unsupported Framework", "Missing Supporting Files"]
        );
    }
}
