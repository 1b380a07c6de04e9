//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{MiningConfig, OutputConfig};
use crate::errors::ConfigError;

/// Project config picked up from the working directory when no `--config` is given.
pub const PROJECT_CONFIG_FILE: &str = "pate.toml";

pub const ENV_MIN_SUPPORT: &str = "PATE_MIN_SUPPORT";
pub const ENV_RESULTS_DIR: &str = "PATE_RESULTS_DIR";

/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`PATE_*`)
/// 3. Config file (`--config`, else `pate.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PateConfig {
    pub mining: MiningConfig,
    pub output: OutputConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub min_support: Option<f64>,
    pub results_dir: Option<String>,
    pub no_csv: bool,
}

impl PateConfig {
    /// Load configuration from the process environment and an optional file.
    ///
    /// An explicit `config_path` must exist; the implicit `pate.toml` is optional.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        Self::load_with_env(config_path, cli_overrides, |key| std::env::var(key).ok())
    }

    /// Same as [`PateConfig::load`] with environment lookups routed through `env`.
    pub fn load_with_env(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        match config_path {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project = Path::new(PROJECT_CONFIG_FILE);
                if project.exists() {
                    Self::merge_toml_file(&mut config, project)?;
                }
            }
        }

        Self::apply_env_overrides(&mut config, env)?;

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(min_support) = self.mining.min_support {
            if !(0.0..=1.0).contains(&min_support) {
                return Err(ConfigError::InvalidValue {
                    field: "mining.min_support".to_string(),
                    message: format!("must be between 0.0 and 1.0, got {min_support}"),
                });
            }
        }
        if let Some(dir) = &self.output.results_dir {
            if dir.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "output.results_dir".to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut Self, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let file_config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        debug!(path = %path.display(), "config file merged");
        config.merge(&file_config);
        Ok(())
    }

    /// `other` wins wherever it holds a value.
    fn merge(&mut self, other: &Self) {
        if other.mining.min_support.is_some() {
            self.mining.min_support = other.mining.min_support;
        }
        if other.output.results_dir.is_some() {
            self.output.results_dir = other.output.results_dir.clone();
        }
        if other.output.write_csv.is_some() {
            self.output.write_csv = other.output.write_csv;
        }
    }

    fn apply_env_overrides(
        config: &mut Self,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = env(ENV_MIN_SUPPORT) {
            let parsed = val.trim().parse::<f64>().map_err(|e| ConfigError::InvalidValue {
                field: ENV_MIN_SUPPORT.to_string(),
                message: format!("{val:?} is not a number: {e}"),
            })?;
            config.mining.min_support = Some(parsed);
        }
        if let Some(val) = env(ENV_RESULTS_DIR) {
            config.output.results_dir = Some(val);
        }
        Ok(())
    }

    fn apply_cli_overrides(config: &mut Self, cli: &CliOverrides) {
        if cli.min_support.is_some() {
            config.mining.min_support = cli.min_support;
        }
        if cli.results_dir.is_some() {
            config.output.results_dir = cli.results_dir.clone();
        }
        if cli.no_csv {
            config.output.write_csv = Some(false);
        }
    }
}
