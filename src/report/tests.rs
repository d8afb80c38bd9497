use std::fs;
use std::path::Path;

use crate::report::{ReportError, report_path, write_report_in};

#[test]
fn test_report_path_appends_extension() {
    let path = report_path(Path::new("out"), "report");
    assert!(path.is_ok());
    if let Ok(path) = path {
        assert_eq!(path, Path::new("out").join("report.txt"));
    }
}

#[test]
fn test_invalid_stems_are_rejected() {
    for stem in ["", ".", "..", "a/b", "a\\b", "nul\0"] {
        let result = report_path(Path::new("."), stem);
        assert!(
            matches!(result, Err(ReportError::InvalidFilename(_))),
            "stem {:?} should be rejected",
            stem
        );
    }
}

#[test]
fn test_write_report_in_creates_file() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let result = write_report_in(dir.path(), "You had 1 right result", "session");
        assert!(result.is_ok());
        if let Ok(path) = result {
            assert_eq!(path, dir.path().join("session.txt"));
            let written = fs::read_to_string(&path).unwrap_or_default();
            assert_eq!(written, "You had 1 right result");
        }
    }
}

#[test]
fn test_write_report_in_overwrites() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        assert!(write_report_in(dir.path(), "first", "report").is_ok());
        assert!(write_report_in(dir.path(), "second", "report").is_ok());
        let written = fs::read_to_string(dir.path().join("report.txt")).unwrap_or_default();
        assert_eq!(written, "second");
    }
}

#[test]
fn test_write_report_in_missing_directory() {
    let dir = tempfile::tempdir();
    assert!(dir.is_ok());
    if let Ok(dir) = dir {
        let missing = dir.path().join("does-not-exist");
        let result = write_report_in(&missing, "text", "report");
        assert!(matches!(result, Err(ReportError::Io(_))));
    }
}
