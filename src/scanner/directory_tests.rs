use std::fs;

use tempfile::TempDir;

use super::*;
use crate::scanner::{FileScanner, PrefixFilter};

fn el_filter() -> PrefixFilter {
    PrefixFilter::new("el_".to_string(), "py".to_string(), &[]).unwrap()
}

#[test]
fn scan_finds_candidate_files_recursively() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("loc/android")).unwrap();
    fs::write(dir.path().join("el_root.py"), "").unwrap();
    fs::write(dir.path().join("loc/android/el_main_page.py"), "").unwrap();
    fs::write(dir.path().join("loc/android/conftest.py"), "").unwrap();
    fs::write(dir.path().join("loc/el_notes.txt"), "").unwrap();

    let scanner = DirectoryScanner::new(el_filter());
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 2);
    assert!(files.iter().any(|f| f.ends_with("el_root.py")));
    assert!(files.iter().any(|f| f.ends_with("el_main_page.py")));
}

#[test]
fn scan_returns_sorted_paths() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("el_b.py"), "").unwrap();
    fs::write(dir.path().join("el_a.py"), "").unwrap();
    fs::write(dir.path().join("el_c.py"), "").unwrap();

    let scanner = DirectoryScanner::new(el_filter());
    let files = scanner.scan(dir.path()).unwrap();

    let mut sorted = files.clone();
    sorted.sort();
    assert_eq!(files, sorted);
}

#[test]
fn scan_empty_directory_returns_nothing() {
    let dir = TempDir::new().unwrap();

    let scanner = DirectoryScanner::new(el_filter());
    let files = scanner.scan(dir.path()).unwrap();
    assert!(files.is_empty());
}

#[test]
fn scan_with_gitignore_skips_ignored_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "el_ignored.py\n").unwrap();
    fs::write(dir.path().join("el_ignored.py"), "").unwrap();
    fs::write(dir.path().join("el_kept.py"), "").unwrap();

    let scanner = DirectoryScanner::with_gitignore(el_filter(), true);
    let files = scanner.scan(dir.path()).unwrap();

    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("el_kept.py"));
}

#[test]
fn scan_without_gitignore_keeps_ignored_files() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".gitignore"), "el_ignored.py\n").unwrap();
    fs::write(dir.path().join("el_ignored.py"), "").unwrap();

    let scanner = DirectoryScanner::new(el_filter());
    let files = scanner.scan(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
}
