// tests/unit_ingest.rs
use scan_health_core::error::ScanHealthError;
use scan_health_core::ingest::{
    ingest_all, AppInfoSource, DetailedReportSource, Ingestor, PrescanSource, SourceRequirement,
};
use scan_health_core::report::Report;
use scan_health_core::types::ScanMetadata;

const APP_INFO: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<appinfo xmlns="https://analysiscenter.veracode.com/schema/2.0/appinfo" appinfo_version="1.1">
   <application app_id="1206933" app_name="Payments &amp;amp; Billing" modified_date="2023-04-05T10:11:12-04:00"/>
</appinfo>"#;

const PRESCAN: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<prescanresults xmlns="https://analysiscenter.veracode.com/schema/2.0/prescanresults" app_id="1206933" build_id="27113269">
   <module id="1001" name="app.war" app_file_id="1" checksum="d41d8cd98f00b204e9800998ecf8427e" platform="JVM / Java J2SE / JAVAC_8" size="12MB" status="OK" has_fatal_errors="false" is_dependency="false">
      <issue details="Found no debug symbols"/>
      <issue details="Found no debug symbols"/>
   </module>
   <module id="1002" name="JS files within app.war" checksum="abc" platform="JAVASCRIPT / JavaScript / JAVASCRIPT_5_1" size="340KB" status="Missing Supporting Files, Unsupported Framework" has_fatal_errors="false" is_dependency="false"/>
   <module id="1003" name="broken.dll" checksum="def" platform="x86 / Windows / MSVC" size="N/A" status="(Fatal)No debug symbols" has_fatal_errors="true" is_dependency="true"/>
</prescanresults>"#;

const DETAILED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<detailedreport xmlns="https://www.veracode.com/schema/reports/export/1.0" app_id="1206933">
   <static-analysis rating="A" score="90">
      <modules>
         <module name="app.war" compiler="JAVAC_8" os="Java J2SE" architecture="JVM" loc="1000"/>
      </modules>
   </static-analysis>
</detailedreport>"#;

const API_ERROR: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<error>No pre-scan results are available for this build</error>"#;

fn latest() -> Report {
    Report::new(ScanMetadata {
        build_id: 27_113_269,
        ..ScanMetadata::default()
    })
}

fn previous() -> Report {
    Report::new(ScanMetadata {
        is_previous_scan: true,
        ..ScanMetadata::default()
    })
}

#[test]
fn app_info_populates_metadata() {
    let mut r = latest();
    AppInfoSource::new(APP_INFO).ingest(&mut r).unwrap();

    assert_eq!(r.scan().application_id, 1_206_933);
    assert_eq!(r.scan().application_name, "Payments & Billing");
    assert_eq!(r.scan().build_id, 27_113_269);
    let activity = r.scan().last_app_activity.unwrap();
    assert_eq!(activity.to_rfc3339(), "2023-04-05T14:11:12+00:00");
}

#[test]
fn app_info_without_date_keeps_none() {
    let mut r = latest();
    let xml = r#"<appinfo><application app_id="5" app_name="x" modified_date=""/></appinfo>"#;
    AppInfoSource::new(xml).ingest(&mut r).unwrap();
    assert!(r.scan().last_app_activity.is_none());
}

#[test]
fn app_info_bad_date_is_fatal() {
    let mut r = latest();
    let xml = r#"<appinfo><application app_id="5" app_name="x" modified_date="yesterday"/></appinfo>"#;
    let err = AppInfoSource::new(xml).ingest(&mut r).unwrap_err();
    assert!(matches!(err, ScanHealthError::InvalidDate { .. }));
}

#[test]
fn prescan_builds_instances() {
    let mut r = latest();
    PrescanSource::new(PRESCAN).ingest(&mut r).unwrap();

    assert_eq!(r.modules().len(), 3);

    let app = r.module("app.war").unwrap();
    let inst = &app.instances()[0];
    assert_eq!(inst.source, "prescan_module_list");
    assert_eq!(inst.id, 1001);
    assert_eq!(inst.size_bytes, 12_000_000);
    assert_eq!(inst.md5, "d41d8cd98f00b204e9800998ecf8427e");
    assert_eq!(inst.issues.as_slice(), ["Found no debug symbols"]);
    assert!(!app.is_selected());

    let js = r.module("JS files within app.war").unwrap();
    assert!(js.is_javascript_module);
    assert_eq!(js.total_size_bytes(), 340_000);
    assert_eq!(
        js.instances()[0].issues.as_slice(),
        ["Missing Supporting Files", "Unsupported Framework"]
    );

    let broken = r.module("broken.dll").unwrap();
    assert!(broken.has_fatal_errors());
    assert!(broken.is_dependency());
    assert_eq!(broken.total_size_bytes(), 0);
}

#[test]
fn prescan_malformed_size_leaves_report_untouched() {
    let mut r = latest();
    let xml = r#"<prescanresults>
        <module id="1" name="a.jar" size="1MB" status="OK"/>
        <module id="2" name="b.jar" size="lotsMB" status="OK"/>
    </prescanresults>"#;
    let err = PrescanSource::new(xml).ingest(&mut r).unwrap_err();
    assert!(matches!(err, ScanHealthError::MalformedSize { .. }));
    assert!(r.modules().is_empty());
}

#[test]
fn prescan_invalid_flag_is_rejected() {
    let mut r = latest();
    let xml = r#"<prescanresults><module id="1" name="a.jar" has_fatal_errors="maybe"/></prescanresults>"#;
    let err = PrescanSource::new(xml).ingest(&mut r).unwrap_err();
    assert!(matches!(
        err,
        ScanHealthError::InvalidAttribute { attribute: "has_fatal_errors", .. }
    ));
}

#[test]
fn detailed_report_marks_selection() {
    let mut r = latest();
    PrescanSource::new(PRESCAN).ingest(&mut r).unwrap();
    DetailedReportSource::new(DETAILED).ingest(&mut r).unwrap();

    let app = r.module("app.war").unwrap();
    assert_eq!(app.instances().len(), 2);
    assert!(app.is_selected());
    assert_eq!(app.instances()[1].platform, "JVM / Java J2SE / JAVAC_8");
    assert_eq!(app.platforms().len(), 1);
    assert!(!r.module("JS files within app.war").unwrap().is_selected());
}

#[test]
fn required_source_failure_aborts() {
    let mut r = previous();
    let app_info = AppInfoSource::new(API_ERROR);
    let err = ingest_all(&mut r, &[&app_info]).unwrap_err();
    assert!(matches!(err, ScanHealthError::UnexpectedRoot { .. }));
    assert_eq!(app_info.requirement(), SourceRequirement::Required);
}

#[test]
fn legacy_source_tolerated_for_previous_scan() {
    let mut r = previous();
    let app_info = AppInfoSource::new(APP_INFO);
    let prescan = PrescanSource::new(API_ERROR);
    let detailed = DetailedReportSource::new(DETAILED);

    ingest_all(&mut r, &[&app_info, &prescan, &detailed]).unwrap();

    assert_eq!(r.scan().application_id, 1_206_933);
    assert_eq!(r.modules().len(), 1);
}

#[test]
fn legacy_source_fatal_for_latest_scan() {
    let mut r = latest();
    let app_info = AppInfoSource::new(APP_INFO);
    let prescan = PrescanSource::new("not xml at all");

    let err = ingest_all(&mut r, &[&app_info, &prescan]).unwrap_err();
    assert!(matches!(err, ScanHealthError::Xml { source_id: "prescan_module_list", .. }));
    assert!(err.is_payload_error());
}

#[test]
fn malformed_size_fatal_even_for_previous_scan() {
    let mut r = previous();
    let app_info = AppInfoSource::new(APP_INFO);
    let prescan = PrescanSource::new(
        r#"<prescanresults><module id="1" name="a.jar" size="lotsMB" status="OK"/></prescanresults>"#,
    );

    let err = ingest_all(&mut r, &[&app_info, &prescan]).unwrap_err();
    assert!(matches!(err, ScanHealthError::MalformedSize { .. }));
    assert!(!err.is_missing_payload());
    assert!(r.modules().is_empty());
}

#[test]
fn invalid_attribute_fatal_even_for_previous_scan() {
    let mut r = previous();
    let app_info = AppInfoSource::new(APP_INFO);
    let prescan = PrescanSource::new(
        r#"<prescanresults><module id="x" name="a.jar" status="OK"/></prescanresults>"#,
    );

    let err = ingest_all(&mut r, &[&app_info, &prescan]).unwrap_err();
    assert!(matches!(err, ScanHealthError::InvalidAttribute { attribute: "id", .. }));
}

#[test]
fn unparseable_legacy_payload_tolerated_for_previous_scan() {
    let mut r = previous();
    let app_info = AppInfoSource::new(APP_INFO);
    let prescan = PrescanSource::new("not xml at all");

    ingest_all(&mut r, &[&app_info, &prescan]).unwrap();
    assert!(r.modules().is_empty());
}
