//! Error handling for pate.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod dataset_error;
pub mod error_code;
pub mod mining_error;
pub mod report_error;

pub use config_error::ConfigError;
pub use dataset_error::DatasetError;
pub use error_code::PateErrorCode;
pub use mining_error::MiningError;
pub use report_error::ReportError;

/// Top-level error for a full load, mine and report run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PateError {
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Mining error: {0}")]
    Mining(#[from] MiningError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl PateErrorCode for PateError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Dataset(e) => e.error_code(),
            Self::Mining(e) => e.error_code(),
            Self::Report(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
