// src/checks/oversized.rs
use crate::size::format_size;
use crate::types::Severity;
use crate::utils::OrderedSet;

use super::CheckContext;

const SPLIT_LARGE_MODULES: &str = "Very large modules take longer to scan and often bundle third-party code. Upload only the first-party binaries and their supporting files, and split large applications into smaller modules where possible.";

/// Reports selected modules whose combined size exceeds the configured limit.
pub fn check_oversized_modules(ctx: &mut CheckContext) {
    let limit = ctx.config().max_module_size;
    let found: OrderedSet<String> = ctx
        .report()
        .modules()
        .iter()
        .filter(|m| m.is_selected() && !m.is_ignored && !m.is_third_party)
        .filter(|m| m.total_size_bytes() > limit)
        .map(|m| m.name().to_string())
        .collect();

    if found.is_empty() {
        return;
    }

    let size = format_size(limit);
    let message = ctx.describe(
        found.as_slice(),
        &format!("A selected module is larger than {size}"),
        &format!("selected modules are larger than {size}"),
    );
    ctx.report_module_issue(message, Severity::Low, found.as_slice());
    ctx.make_recommendation(SPLIT_LARGE_MODULES);
}
