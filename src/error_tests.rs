use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = LocatorGuardError::Config("invalid prefix".to_string());
    assert_eq!(err.to_string(), "Configuration error: invalid prefix");
}

#[test]
fn error_display_file_read() {
    let err = LocatorGuardError::FileRead {
        path: PathBuf::from("el_login.py"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("el_login.py"));
}

#[test]
fn error_display_invalid_pattern() {
    let source = globset::Glob::new("[invalid").unwrap_err();
    let err = LocatorGuardError::InvalidPattern {
        pattern: "[invalid".to_string(),
        source,
    };
    assert!(err.to_string().contains("[invalid"));
}

#[test]
fn error_from_io() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: LocatorGuardError = io.into();
    assert!(matches!(err, LocatorGuardError::Io(_)));
}

#[test]
fn error_from_toml() {
    let parse_err = toml::from_str::<toml::Value>("not = = valid").unwrap_err();
    let err: LocatorGuardError = parse_err.into();
    assert!(matches!(err, LocatorGuardError::TomlParse(_)));
}
