// src/checks/node_modules.rs
use crate::types::Severity;
use crate::utils::OrderedSet;

use super::CheckContext;

const AVOID_NODE_MODULES: &str = "Do not select modules from node_modules for analysis. These are third-party components whose risk is better covered by software composition analysis, and including them slows the scan and adds noise to the results.";

/// Flags `node_modules` content that was selected for analysis.
pub fn check_selected_node_modules(ctx: &mut CheckContext) {
    let found: OrderedSet<String> = ctx
        .report()
        .modules()
        .iter()
        .filter(|m| m.is_node_module && m.is_selected() && !m.is_ignored)
        .map(|m| m.name().to_string())
        .collect();

    if found.is_empty() {
        return;
    }

    let message = ctx.describe(
        found.as_slice(),
        "A module from node_modules was selected for analysis",
        "modules from node_modules were selected for analysis",
    );
    ctx.report_module_issue(message, Severity::Medium, found.as_slice());
    ctx.make_recommendation(AVOID_NODE_MODULES);
}
