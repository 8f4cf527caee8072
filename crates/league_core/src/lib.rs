//! Core of the pool league tracker
//!
//! This crate provides:
//! - The league data model (matches and per-player win/loss aggregates)
//! - A JSON-backed match store with load/initialize/save semantics
//! - Rankings, match history and head-to-head breakdowns
//!
//! # Usage
//!
//! ```no_run
//! use league_core::{LeagueState, MatchStore};
//!
//! let store = MatchStore::new("match_data.json");
//! let mut league = store.load()?;
//! league.record_match("Thomas", "Raymond", Some("2025-05-20"))?;
//! store.save(&league)?;
//!
//! for row in league.rankings() {
//!     println!("{} {:.1}%", row.player, row.win_rate * 100.0);
//! }
//! # Ok::<(), league_core::LeagueError>(())
//! ```

mod date;
mod error;
mod stats;
mod store;
mod types;

pub use date::*;
pub use error::*;
pub use stats::*;
pub use store::*;
pub use types::*;
