use serde::Serialize;

use crate::aggregator::{ScanReport, ViolationEntry};
use crate::error::Result;

use super::OutputFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    violations: Vec<JsonViolation<'a>>,
    file_errors: &'a [crate::aggregator::FileError],
}

#[derive(Serialize)]
struct Summary {
    files_scanned: usize,
    declarations_checked: usize,
    violations: usize,
    file_errors: usize,
    passed: bool,
}

#[derive(Serialize)]
struct JsonViolation<'a> {
    path: String,
    line: usize,
    text: &'a str,
    reason: String,
    #[serde(flatten)]
    violation: &'a crate::validator::Violation,
}

fn convert_entry(entry: &ViolationEntry) -> JsonViolation<'_> {
    JsonViolation {
        path: entry.path.to_string_lossy().replace('\\', "/"),
        line: entry.line,
        text: &entry.text,
        reason: entry.violation.to_string(),
        violation: &entry.violation,
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ScanReport) -> Result<String> {
        let output = JsonOutput {
            summary: Summary {
                files_scanned: report.files_scanned,
                declarations_checked: report.declarations_checked,
                violations: report.violations.len(),
                file_errors: report.file_errors.len(),
                passed: report.is_clean(),
            },
            violations: report.violations.iter().map(convert_entry).collect(),
            file_errors: &report.file_errors,
        };

        let json = serde_json::to_string_pretty(&output)?;
        Ok(format!("{json}\n"))
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
