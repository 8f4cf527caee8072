//! Pool league command-line front end
//!
//! Parses the `pool` command line, renders rankings, history and player
//! statistics, and keeps the rankings section of the project README current.
//!
//! # Usage
//!
//! ```bash
//! pool Thomas - Raymond             # Thomas beat Raymond, now
//! pool Thomas - Raymond -d 2025-5-20
//! pool show
//! pool history
//! pool stats Raymond
//! ```

mod cli;
mod commands;
mod config;
mod error;
mod readme;
mod render;

pub use cli::*;
pub use commands::*;
pub use config::*;
pub use error::*;
pub use readme::*;
pub use render::*;
