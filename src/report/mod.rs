//! Flat-text report files

mod errors;
mod writer;

pub use errors::ReportError;
pub use writer::{report_path, write_report, write_report_in};

#[cfg(test)]
mod tests;
