//! Mining configuration.

use serde::{Deserialize, Serialize};

/// Default minimum support: 40% of transactions.
pub const DEFAULT_MIN_SUPPORT: f64 = 0.4;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct MiningConfig {
    /// Minimum support in `[0, 1]`. Default: 0.4.
    pub min_support: Option<f64>,
}

impl MiningConfig {
    pub fn effective_min_support(&self) -> f64 {
        self.min_support.unwrap_or(DEFAULT_MIN_SUPPORT)
    }
}
