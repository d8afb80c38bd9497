use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::report::errors::ReportError;

const REPORT_EXTENSION: &str = "txt";

fn validate_stem(stem: &str) -> Result<(), ReportError> {
    let invalid = stem.is_empty()
        || stem == "."
        || stem == ".."
        || stem.chars().any(|c| c == '/' || c == '\\' || c == '\0');
    if invalid {
        warn!("Rejecting report file stem: {:?}", stem);
        return Err(ReportError::InvalidFilename(stem.to_string()));
    }
    Ok(())
}

/// The path `<dir>/<stem>.txt`
///
/// # Errors
///
/// Returns an error if the stem is empty or contains a path separator.
pub fn report_path(dir: &Path, stem: &str) -> Result<PathBuf, ReportError> {
    validate_stem(stem)?;
    Ok(dir.join(format!("{}.{}", stem, REPORT_EXTENSION)))
}

/// Writes `report` to `<dir>/<stem>.txt`, replacing any previous file.
///
/// # Errors
///
/// Returns an error if the stem is invalid or the file cannot be written.
pub fn write_report_in(dir: &Path, report: &str, stem: &str) -> Result<PathBuf, ReportError> {
    let path = report_path(dir, stem)?;
    debug!("Writing {} bytes of report to {}", report.len(), path.display());
    fs::write(&path, report)?;
    info!("Report written to {}", path.display());
    Ok(path)
}

/// Writes `report` to `<stem>.txt` in the current directory.
///
/// # Errors
///
/// See [`write_report_in`].
pub fn write_report(report: &str, stem: &str) -> Result<PathBuf, ReportError> {
    write_report_in(Path::new("."), report, stem)
}
