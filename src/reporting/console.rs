use crate::report::Report;
use crate::types::{Issue, Severity};
use crate::utils::pluralize;
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// Prints the human-readable report to stdout.
pub fn print_report(report: &Report) {
    print!("{}", render_text(report));
}

/// Renders the report for a terminal: scan header, issues from most to least
/// severe, then recommendations and a summary line.
#[must_use]
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();
    write_header(&mut out, report);

    if report.is_healthy() {
        let _ = writeln!(out, "{} No issues found.", "OK".green().bold());
        return out;
    }

    write_issues(&mut out, report);
    write_recommendations(&mut out, report.recommendations());
    write_summary(&mut out, report);
    out
}

fn write_header(out: &mut String, report: &Report) {
    let scan = report.scan();
    let _ = writeln!(out, "{}", "Scan Health".bold());
    let _ = writeln!(
        out,
        "  Application:   {} ({})",
        scan.application_name, scan.application_id
    );
    let _ = writeln!(out, "  Build:         {}", scan.build_id);
    if let Some(activity) = scan.last_app_activity {
        let _ = writeln!(
            out,
            "  Last activity: {}",
            activity.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }
    let _ = writeln!(out, "  Modules:       {}", report.modules().len());
    out.push('\n');
}

fn write_issues(out: &mut String, report: &Report) {
    let mut issues: Vec<&Issue> = report.issues().iter().collect();
    // Stable: equal severities keep check order.
    issues.sort_by(|a, b| b.severity.cmp(&a.severity));

    let _ = writeln!(out, "{}", "Issues".bold());
    for issue in issues {
        let _ = writeln!(out, "  {} {}", severity_tag(issue.severity), issue.message);
    }
    out.push('\n');
}

fn write_recommendations(out: &mut String, recommendations: &[String]) {
    if recommendations.is_empty() {
        return;
    }
    let _ = writeln!(out, "{}", "Recommendations".bold());
    for (i, text) in recommendations.iter().enumerate() {
        let _ = writeln!(out, "  {}. {text}", i + 1);
    }
    out.push('\n');
}

fn write_summary(out: &mut String, report: &Report) {
    let issues = report.issues().len();
    let recommendations = report.recommendations().len();
    let _ = writeln!(
        out,
        "{} {issues} {}, {recommendations} {}.",
        "Summary:".bold(),
        pluralize("issue", issues),
        pluralize("recommendation", recommendations)
    );
}

fn severity_tag(severity: Severity) -> ColoredString {
    let tag = format!("[{}]", severity.label());
    match severity {
        Severity::Critical => tag.red().bold(),
        Severity::High => tag.red(),
        Severity::Medium => tag.yellow(),
        Severity::Low => tag.dimmed(),
    }
}
