//! Configuration system for pate.
//! TOML-based, layered resolution: CLI > env > config file > defaults.

pub mod mining_config;
pub mod output_config;
pub mod pate_config;

pub use mining_config::MiningConfig;
pub use output_config::OutputConfig;
pub use pate_config::{CliOverrides, PateConfig};
