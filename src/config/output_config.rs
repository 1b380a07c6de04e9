//! Result output configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DEFAULT_RESULTS_DIR: &str = "results";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory receiving the CSV tables. Default: `results`.
    pub results_dir: Option<String>,
    /// Write CSV tables after mining. Default: true.
    pub write_csv: Option<bool>,
}

impl OutputConfig {
    pub fn effective_results_dir(&self) -> PathBuf {
        PathBuf::from(self.results_dir.as_deref().unwrap_or(DEFAULT_RESULTS_DIR))
    }

    pub fn effective_write_csv(&self) -> bool {
        self.write_csv.unwrap_or(true)
    }
}
