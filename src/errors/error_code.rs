//! Stable error codes shared by every error enum.

/// Every error enum implements this to expose a structured code string
/// alongside its human-readable message.
pub trait PateErrorCode {
    /// Returns the error code string (e.g., "MINING_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const MINING_ERROR: &str = "MINING_ERROR";
pub const DATASET_ERROR: &str = "DATASET_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
