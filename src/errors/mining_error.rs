//! Mining errors.

use super::error_code::{self, PateErrorCode};

/// Precondition violations detected when a miner is constructed.
///
/// A run that finds no frequent itemset is not an error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MiningError {
    #[error("Dataset contains no transactions")]
    EmptyDataset,

    #[error("Minimum support must be within [0, 1], got {value}")]
    InvalidMinSupport { value: f64 },
}

impl PateErrorCode for MiningError {
    fn error_code(&self) -> &'static str {
        error_code::MINING_ERROR
    }
}
