//! `pool.toml` configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

use league_core::{DEFAULT_DATA_FILE, DEFAULT_HISTORY_LIMIT};

use crate::error::{PoolError, Result};

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "pool.toml";
/// Overrides the config file location
pub const CONFIG_ENV: &str = "POOL_LEAGUE_CONFIG";
/// Overrides `data_file`
pub const DATA_FILE_ENV: &str = "POOL_LEAGUE_DATA";

/// Tool configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PoolConfig {
    /// League data file
    pub data_file: PathBuf,
    /// Document whose rankings section is regenerated after each match
    pub readme_file: PathBuf,
    pub update_readme: bool,
    /// Matches shown by `pool history`
    pub history_limit: usize,
    /// Maximum log level written to stderr (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            readme_file: PathBuf::from("README.md"),
            update_readme: true,
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_level: "warn".to_string(),
        }
    }
}

impl PoolConfig {
    /// Load a config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(PoolError::ConfigIo {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        Self::from_toml(&contents, path)
    }

    /// Parse and validate config text read from `path`
    fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|source| PoolError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration the way the binary does: `POOL_LEAGUE_CONFIG` or
    /// `pool.toml`, then `POOL_LEAGUE_DATA` on top.
    pub fn from_env() -> Result<Self> {
        let path = std::env::var_os(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
        let mut config = Self::load(&path)?;
        if let Some(data_file) = std::env::var_os(DATA_FILE_ENV) {
            config.data_file = PathBuf::from(data_file);
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(PoolError::InvalidConfig(
                "history_limit must be at least 1".to_string(),
            ));
        }
        self.log_level()?;
        Ok(())
    }

    pub fn log_level(&self) -> Result<Level> {
        Level::from_str(&self.log_level)
            .map_err(|_| PoolError::InvalidConfig(format!("unknown log_level: {}", self.log_level)))
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
