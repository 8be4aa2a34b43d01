// src/checks/fatal_errors.rs
//! First-party modules the upstream service could not scan.

use crate::types::Severity;
use crate::utils::OrderedSet;

use super::{CheckContext, REVIEW_PRESCAN};

const FATAL_ERRORS: &str = "Modules with fatal errors are excluded from the analysis, so any risk they contain is not reported. Fix the packaging of these modules and rescan.";

pub fn check_fatal_errors(ctx: &mut CheckContext) {
    let found: OrderedSet<String> = ctx
        .report()
        .modules()
        .iter()
        .filter(|m| m.has_fatal_errors())
        .filter(|m| !m.is_ignored && !m.is_third_party && !m.is_node_module)
        .map(|m| m.name().to_string())
        .collect();

    if found.is_empty() {
        return;
    }

    let message = ctx.describe(
        found.as_slice(),
        "A module could not be scanned because it has fatal errors",
        "modules could not be scanned because they have fatal errors",
    );
    ctx.report_module_issue(message, Severity::High, found.as_slice());
    ctx.make_recommendation(FATAL_ERRORS);
    ctx.make_recommendation(REVIEW_PRESCAN);
}
