// src/checks.rs
//! The fixed set of scan health checks and the engine that runs them.
//!
//! Checks run once each, in [`REGISTRY`] order. A check may see the issues and
//! recommendations written by the checks before it, so the order is part of
//! the output contract.

mod fatal_errors;
mod module_warnings;
mod node_modules;
mod oversized;
mod unselected_javascript;

use tracing::{debug, info};

use crate::config::CheckConfig;
use crate::report::Report;
use crate::types::Severity;
use crate::utils::summarize_top;

pub use fatal_errors::check_fatal_errors;
pub use module_warnings::check_module_warnings;
pub use node_modules::check_selected_node_modules;
pub use oversized::check_oversized_modules;
pub use unselected_javascript::check_unselected_javascript;

/// Advice shared by every check that points at the pre-scan results.
pub(crate) const REVIEW_PRESCAN: &str = "Review the pre-scan results for every module before starting the analysis and resolve the reported problems, such as missing debug symbols, missing supporting files or unsupported compilers.";

/// Context for running one check against the report.
///
/// Checks read the whole report but may only add issues and recommendations.
pub struct CheckContext<'a> {
    report: &'a mut Report,
    config: &'a CheckConfig,
}

impl<'a> CheckContext<'a> {
    pub fn new(report: &'a mut Report, config: &'a CheckConfig) -> Self {
        Self { report, config }
    }

    #[must_use]
    pub fn report(&self) -> &Report {
        &*self.report
    }

    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        self.config
    }

    pub fn report_module_issue(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        modules: &[String],
    ) {
        self.report.report_module_issue(message, severity, modules);
    }

    pub fn make_recommendation(&mut self, text: impl Into<String>) {
        self.report.make_recommendation(text);
    }

    /// Lists the first few names, up to the configured summary limit. At
    /// least one name is always shown.
    #[must_use]
    pub fn summarize<S: AsRef<str>>(&self, items: &[S]) -> String {
        summarize_top(items, self.config.summary_limit.max(1))
    }

    /// Builds the standard issue message for a set of modules: the singular
    /// form quotes the only module, the plural form gives a count and a sample.
    #[must_use]
    pub fn describe(&self, modules: &[String], singular: &str, plural: &str) -> String {
        match modules {
            [only] => format!("{singular}: \"{only}\"."),
            _ => format!("{} {plural}: {}.", modules.len(), self.summarize(modules)),
        }
    }
}

/// A registered check.
#[derive(Clone, Copy)]
pub struct Check {
    pub code: &'static str,
    pub name: &'static str,
    pub run: fn(&mut CheckContext),
}

impl std::fmt::Debug for Check {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Check")
            .field("code", &self.code)
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Every check, in evaluation order.
pub const REGISTRY: &[Check] = &[
    Check {
        code: "fatal-errors",
        name: "Modules with fatal errors",
        run: check_fatal_errors,
    },
    Check {
        code: "unselected-javascript",
        name: "Unselected JavaScript modules",
        run: check_unselected_javascript,
    },
    Check {
        code: "selected-node-modules",
        name: "Selected node_modules",
        run: check_selected_node_modules,
    },
    Check {
        code: "module-warnings",
        name: "Pre-scan module warnings",
        run: check_module_warnings,
    },
    Check {
        code: "oversized-modules",
        name: "Oversized modules",
        run: check_oversized_modules,
    },
];

/// Runs every registered check once against a fully ingested report.
pub fn run_checks(report: &mut Report, config: &CheckConfig) {
    let mut ctx = CheckContext::new(report, config);
    for check in REGISTRY {
        let before = ctx.report().issues().len();
        (check.run)(&mut ctx);
        debug!(
            check = check.code,
            issues = ctx.report().issues().len() - before,
            "check complete"
        );
    }
    info!(
        issues = ctx.report().issues().len(),
        recommendations = ctx.report().recommendations().len(),
        "scan health evaluated"
    );
}
