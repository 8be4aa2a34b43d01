// src/checks/unselected_javascript.rs
//! JavaScript modules that were uploaded but not selected for analysis.

use crate::types::{Module, Severity};
use crate::utils::OrderedSet;

use super::CheckContext;

/// Marker the upstream service puts in the names of modules it rebuilt from
/// source maps.
const MAP_FILE_MARKER: &str = "extracted from .map file";

const SELECT_JS_MODULES: &str = "Veracode extracts JavaScript modules from the upload. Consider selecting the appropriate \"JS files within ...\" modules for analysis in order to cover the JavaScript risk from these components.";

const UNDER_SELECTION: &str = "Under-selection of first party modules affects results quality. Ensure the correct entry points have been selected as recommended and refer to this article: https://community.veracode.com/s/article/What-are-Modules-and-how-do-my-results-change-based-on-what-I-select.";

pub fn check_unselected_javascript(ctx: &mut CheckContext) {
    let found: OrderedSet<String> = ctx
        .report()
        .modules()
        .iter()
        .filter(|m| is_candidate(m))
        .map(|m| m.name().to_string())
        .collect();

    if found.is_empty() {
        return;
    }

    let message = ctx.describe(
        found.as_slice(),
        "A JavaScript module was not selected for analysis",
        "JavaScript modules were not selected for analysis",
    );
    ctx.report_module_issue(message, Severity::Medium, found.as_slice());
    ctx.make_recommendation(SELECT_JS_MODULES);
    ctx.make_recommendation(UNDER_SELECTION);
}

fn is_candidate(module: &Module) -> bool {
    if !module.is_javascript_module || module.is_node_module {
        return false;
    }

    if module.name().to_lowercase().contains(MAP_FILE_MARKER) {
        return false;
    }

    !module.has_fatal_errors()
        && !module.is_ignored
        && !module.is_selected()
        && !module.is_third_party
}
