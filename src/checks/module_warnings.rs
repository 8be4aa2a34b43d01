// src/checks/module_warnings.rs
use crate::types::{Module, Severity};
use crate::utils::OrderedSet;

use super::{CheckContext, REVIEW_PRESCAN};

/// Reports selected modules whose pre-scan results carry warnings.
///
/// Modules with fatal errors are left to the fatal errors check.
pub fn check_module_warnings(ctx: &mut CheckContext) {
    let mut found: OrderedSet<String> = OrderedSet::new();
    let mut warnings: OrderedSet<String> = OrderedSet::new();

    for module in ctx.report().modules().iter().filter(|m| is_candidate(m)) {
        let details = module.issue_details();
        if details.is_empty() {
            continue;
        }
        found.insert(module.name().to_string());
        warnings.extend(details.iter().map(|d| (*d).to_string()));
    }

    if found.is_empty() {
        return;
    }

    let message = format!(
        "{} Reported warnings: {}.",
        ctx.describe(
            found.as_slice(),
            "A selected module has pre-scan warnings",
            "selected modules have pre-scan warnings",
        ),
        ctx.summarize(warnings.as_slice())
    );
    ctx.report_module_issue(message, Severity::Low, found.as_slice());
    ctx.make_recommendation(REVIEW_PRESCAN);
}

fn is_candidate(module: &Module) -> bool {
    module.is_selected() && !module.is_ignored && !module.has_fatal_errors()
}
