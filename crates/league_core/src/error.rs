//! Error types for the league core

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for league operations
pub type Result<T> = std::result::Result<T, LeagueError>;

/// Errors raised by the match store and the stats engine
#[derive(Error, Debug)]
pub enum LeagueError {
    /// The data file exists but is not a well-formed league document
    #[error("Corrupt league data in {}: {source}", path.display())]
    CorruptData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A user supplied date that is not `YYYY-MM-DD`
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    /// Blank (or whitespace-only) player name
    #[error("Invalid player name: {0:?}")]
    InvalidPlayerName(String),

    #[error("Failed to serialize league data: {0}")]
    Serialize(#[source] serde_json::Error),
}
