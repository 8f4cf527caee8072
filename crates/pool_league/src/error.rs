//! Errors surfaced by the command-line front end

use league_core::LeagueError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, PoolError>;

#[derive(Error, Debug)]
pub enum PoolError {
    #[error(transparent)]
    League(#[from] LeagueError),

    /// Command line did not match any known form
    #[error("{0}")]
    Usage(String),

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("Failed to update {}: {source}", path.display())]
    Readme {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl PoolError {
    /// Process exit status for this error: 2 for usage errors, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        match self {
            PoolError::Usage(_) => 2,
            _ => 1,
        }
    }
}
