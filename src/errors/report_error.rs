//! Report output errors.

use super::error_code::{self, PateErrorCode};

/// Errors raised while persisting result tables.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to create results directory {path}: {source}")]
    CreateDir {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl PateErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
