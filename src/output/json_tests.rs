use std::path::PathBuf;

use serde_json::Value;

use super::*;
use crate::aggregator::{FileError, ScanReport, ViolationEntry};
use crate::strategy::Strategy;
use crate::validator::Violation;

fn parse(report: &ScanReport) -> Value {
    let output = JsonFormatter.format(report).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn clean_report_serializes_passing_summary() {
    let report = ScanReport {
        files_scanned: 2,
        declarations_checked: 9,
        ..ScanReport::default()
    };

    let json = parse(&report);
    assert_eq!(json["summary"]["files_scanned"], 2);
    assert_eq!(json["summary"]["declarations_checked"], 9);
    assert_eq!(json["summary"]["violations"], 0);
    assert_eq!(json["summary"]["passed"], true);
    assert!(json["violations"].as_array().unwrap().is_empty());
}

#[test]
fn violations_carry_location_reason_and_kind() {
    let report = ScanReport {
        files_scanned: 1,
        declarations_checked: 1,
        violations: vec![ViolationEntry {
            path: PathBuf::from("loc/el_page.py"),
            line: 12,
            text: "BAD_XPATH = (AppiumBy.XPATH, \"no-slash\")".to_string(),
            violation: Violation::PredicateFailed {
                strategy: Strategy::Xpath,
            },
        }],
        file_errors: Vec::new(),
    };

    let json = parse(&report);
    let violation = &json["violations"][0];
    assert_eq!(violation["path"], "loc/el_page.py");
    assert_eq!(violation["line"], 12);
    assert_eq!(violation["kind"], "predicate_failed");
    assert_eq!(violation["strategy"], "XPATH");
    assert_eq!(
        violation["reason"],
        "Invalid selector value for strategy XPATH"
    );
    assert_eq!(json["summary"]["passed"], false);
}

#[test]
fn naming_violation_carries_the_name() {
    let report = ScanReport {
        files_scanned: 1,
        declarations_checked: 1,
        violations: vec![ViolationEntry {
            path: PathBuf::from("el_page.py"),
            line: 1,
            text: "login = (AppiumBy.ID, \"x\")".to_string(),
            violation: Violation::Naming {
                name: "login".to_string(),
            },
        }],
        file_errors: Vec::new(),
    };

    let json = parse(&report);
    assert_eq!(json["violations"][0]["kind"], "naming");
    assert_eq!(json["violations"][0]["name"], "login");
}

#[test]
fn file_errors_appear_in_output() {
    let report = ScanReport {
        files_scanned: 1,
        file_errors: vec![FileError {
            path: PathBuf::from("el_gone.py"),
            message: "No such file".to_string(),
        }],
        ..ScanReport::default()
    };

    let json = parse(&report);
    assert_eq!(json["summary"]["file_errors"], 1);
    assert_eq!(json["summary"]["passed"], false);
    assert_eq!(json["file_errors"][0]["path"], "el_gone.py");
}
