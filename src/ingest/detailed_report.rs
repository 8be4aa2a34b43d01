use super::{attr, children, parse_document, Ingestor, SourceRequirement};
use crate::error::{Result, ScanHealthError};
use crate::report::Report;
use crate::types::ModuleInstance;
use crate::utils::unescape_html;

const SOURCE: &str = "detailed_report";

/// Detailed report (`detailedreport.do`). Lists the modules that were
/// selected for analysis.
#[derive(Debug, Clone)]
pub struct DetailedReportSource {
    xml: String,
}

impl DetailedReportSource {
    #[must_use]
    pub fn new(xml: impl Into<String>) -> Self {
        Self { xml: xml.into() }
    }
}

impl Ingestor for DetailedReportSource {
    fn source(&self) -> &'static str {
        SOURCE
    }

    fn requirement(&self) -> SourceRequirement {
        SourceRequirement::Legacy
    }

    fn ingest(&self, report: &mut Report) -> Result<()> {
        let doc = parse_document(&self.xml, SOURCE, "detailedreport")?;
        let analysis = children(doc.root_element(), "static-analysis")
            .next()
            .ok_or(ScanHealthError::MissingElement {
                source_id: SOURCE,
                element: "static-analysis",
            })?;

        let selected: Vec<(String, ModuleInstance)> = children(analysis, "modules")
            .flat_map(|modules| children(modules, "module"))
            .map(|module| {
                let instance = ModuleInstance {
                    source: SOURCE.to_string(),
                    platform: platform(
                        attr(module, "architecture"),
                        attr(module, "os"),
                        attr(module, "compiler"),
                    ),
                    is_selected: true,
                    ..ModuleInstance::default()
                };
                (unescape_html(attr(module, "name")), instance)
            })
            .collect();

        for (name, instance) in selected {
            report.add_module_instance(&name, instance);
        }
        Ok(())
    }
}

/// Joins the platform parts the way the pre-scan list formats them.
fn platform(architecture: &str, os: &str, compiler: &str) -> String {
    [architecture, os, compiler]
        .into_iter()
        .filter(|part| !part.is_empty())
        .map(unescape_html)
        .collect::<Vec<_>>()
        .join(" / ")
}
