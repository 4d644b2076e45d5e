use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use serde::Serialize;

use crate::extractor::DeclarationExtractor;
use crate::validator::{self, Violation};

/// One failing declaration with its location and the offending line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViolationEntry {
    pub path: PathBuf,
    pub line: usize,
    pub text: String,
    pub violation: Violation,
}

/// A candidate file that could not be read (missing, permission, bad encoding).
///
/// Kept apart from the violation taxonomy: an unreadable file is a scan-level
/// problem, not a bad declaration, and must not be silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// The full result of scanning a set of candidate files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub files_scanned: usize,
    pub declarations_checked: usize,
    pub violations: Vec<ViolationEntry>,
    pub file_errors: Vec<FileError>,
}

impl ScanReport {
    /// An empty report means the whole scan passed.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty() && self.file_errors.is_empty()
    }
}

/// Per-file scan outcome, merged into a [`ScanReport`] in discovery order.
#[derive(Debug, Clone, Default)]
struct FileScan {
    declarations: usize,
    violations: Vec<ViolationEntry>,
    error: Option<FileError>,
}

/// Applies the extractor and validator to every line of every file.
///
/// Files are independent and the extractor is immutable, so the per-file work
/// fans out over rayon; partial results are concatenated in the original file
/// order, keeping the report deterministic for a fixed discovery order.
pub struct ScanAggregator {
    extractor: DeclarationExtractor,
}

impl Default for ScanAggregator {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractor: DeclarationExtractor::new(),
        }
    }

    #[must_use]
    pub fn scan_files(&self, files: &[PathBuf]) -> ScanReport {
        let per_file: Vec<FileScan> = files.par_iter().map(|path| self.scan_file(path)).collect();

        let mut report = ScanReport {
            files_scanned: files.len(),
            ..ScanReport::default()
        };
        for scan in per_file {
            report.declarations_checked += scan.declarations;
            report.violations.extend(scan.violations);
            if let Some(error) = scan.error {
                report.file_errors.push(error);
            }
        }
        report
    }

    fn scan_file(&self, path: &Path) -> FileScan {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                return FileScan {
                    error: Some(FileError {
                        path: path.to_path_buf(),
                        message: e.to_string(),
                    }),
                    ..FileScan::default()
                };
            }
        };

        let mut scan = FileScan::default();
        for (index, line) in content.lines().enumerate() {
            let Some(decl) = self.extractor.extract(line) else {
                continue;
            };
            scan.declarations += 1;
            if let Some(violation) = validator::validate(&decl).into_violation() {
                scan.violations.push(ViolationEntry {
                    path: path.to_path_buf(),
                    line: index + 1,
                    text: line.trim().to_string(),
                    violation,
                });
            }
        }
        scan
    }
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod tests;
