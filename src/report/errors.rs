use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Filename error -- '{0}' is not a valid file name stem")]
    InvalidFilename(String),
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
