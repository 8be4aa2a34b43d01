// tests/unit_render.rs
use scan_health_core::report::Report;
use scan_health_core::reporting::{render_json, render_text};
use scan_health_core::types::{ModuleInstance, ScanMetadata, Severity};

fn report() -> Report {
    let mut r = Report::new(ScanMetadata {
        application_id: 9,
        application_name: "Portal".to_string(),
        build_id: 3,
        ..ScanMetadata::default()
    });
    r.add_module_instance("portal.war", ModuleInstance::default());
    r
}

#[test]
fn healthy_report_says_so() {
    colored::control::set_override(false);
    let text = render_text(&report());
    assert!(text.contains("  Application:   Portal (9)\n  Build:         3\n  Modules:       1\n"));
    assert!(text.contains("OK No issues found."));
    assert!(!text.contains("Recommendations"));
}

#[test]
fn issues_sorted_by_descending_severity() {
    colored::control::set_override(false);
    let mut r = report();
    r.report_module_issue("low one", Severity::Low, &[]);
    r.report_module_issue("high one", Severity::High, &[]);
    r.report_module_issue("medium one", Severity::Medium, &[]);
    r.report_module_issue("second high", Severity::High, &[]);
    r.make_recommendation("do the thing");

    let text = render_text(&r);
    let pos = |needle: &str| text.find(needle).unwrap_or(usize::MAX);
    assert!(pos("[High] high one") < pos("[High] second high"));
    assert!(pos("[High] second high") < pos("[Medium] medium one"));
    assert!(pos("[Medium] medium one") < pos("[Low] low one"));
    assert!(text.contains("  1. do the thing"));
    assert!(text.contains("4 issues, 1 recommendation."));
}

#[test]
fn json_uses_four_space_indent() {
    let json = render_json(&report()).unwrap();
    assert!(json.starts_with("{\n    \"scan\": {\n        \"application_id\": 9,"));
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["modules"][0]["name"], "portal.war");
    assert!(value["issues"].as_array().unwrap().is_empty());
}

#[test]
fn header_labels_are_aligned() {
    use chrono::TimeZone;
    colored::control::set_override(false);
    let mut r = report();
    r.scan_mut().last_app_activity = chrono::Utc
        .with_ymd_and_hms(2023, 4, 5, 14, 11, 12)
        .single();

    let text = render_text(&r);
    let header: Vec<&str> = text.lines().skip(1).take(4).collect();
    assert_eq!(
        header,
        [
            "  Application:   Portal (9)",
            "  Build:         3",
            "  Last activity: 2023-04-05 14:11:12 UTC",
            "  Modules:       1",
        ]
    );
}
