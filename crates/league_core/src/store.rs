//! JSON file storage for the league state

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{LeagueError, Result};
use crate::types::LeagueState;

/// Default data file name, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "match_data.json";

/// Handle on the league data file.
///
/// Every invocation is a full read-modify-write cycle. There is no locking:
/// the store assumes a single writer and the last save wins. Saves go through
/// a temporary file and a rename, so readers never see a partial document.
#[derive(Debug, Clone)]
pub struct MatchStore {
    path: PathBuf,
}

impl MatchStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the league state.
    ///
    /// A missing or empty file is initialized with an empty league, which is
    /// written back immediately and returned.
    pub fn load(&self) -> Result<LeagueState> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => String::new(),
            Err(e) => return Err(self.io_error(e)),
        };

        if contents.is_empty() {
            debug!(path = %self.path.display(), "initializing empty league data");
            let state = LeagueState::new();
            self.save(&state)?;
            return Ok(state);
        }

        let state: LeagueState =
            serde_json::from_str(&contents).map_err(|source| LeagueError::CorruptData {
                path: self.path.clone(),
                source,
            })?;

        if !state.is_consistent() {
            warn!(
                path = %self.path.display(),
                "player totals do not match the match log"
            );
        }
        debug!(
            matches = state.matches.len(),
            players = state.players.len(),
            "loaded league data"
        );
        Ok(state)
    }

    /// Overwrite the data file with `state`
    pub fn save(&self, state: &LeagueState) -> Result<()> {
        let mut json = serde_json::to_string_pretty(state).map_err(LeagueError::Serialize)?;
        json.push('\n');

        let tmp = self.temp_path();
        fs::write(&tmp, json).map_err(|e| self.io_error_at(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            let _ = fs::remove_file(&tmp);
            self.io_error(e)
        })?;

        debug!(path = %self.path.display(), matches = state.matches.len(), "saved league data");
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> LeagueError {
        self.io_error_at(&self.path, source)
    }

    fn io_error_at(&self, path: &Path, source: std::io::Error) -> LeagueError {
        LeagueError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod store_tests;
