//! Dataset loading errors.

use super::error_code::{self, PateErrorCode};

/// Errors that can occur while reading or converting a transaction file.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Dataset file not found: {path}")]
    NotFound { path: String },

    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Dataset {path} is not valid UTF-8 at line {line}")]
    InvalidUtf8 { path: String, line: usize },
}

impl PateErrorCode for DatasetError {
    fn error_code(&self) -> &'static str {
        error_code::DATASET_ERROR
    }
}
