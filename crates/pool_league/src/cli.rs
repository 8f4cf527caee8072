//! Command-line parsing

use crate::error::{PoolError, Result};

/// A parsed `pool` invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print rankings (also the no-argument default)
    Show,
    /// `Winner - Loser [-d YYYY-MM-DD]`
    Record {
        winner: String,
        loser: String,
        date: Option<String>,
    },
    /// Print recent matches; `None` uses the configured limit
    History { limit: Option<usize> },
    Stats { player: String },
    Help,
}

/// Separator between winner and loser
const VERSUS: &str = "-";
const DATE_FLAG: &str = "-d";

pub fn usage() -> String {
    [
        "Pool League Management Tool",
        "",
        "Usage:",
        "  pool <Winner> - <Loser> [-d YYYY-MM-DD]   Record a match (Winner beat Loser)",
        "  pool show                                 Show rankings",
        "  pool history [N]                          Show the last N matches (default 10)",
        "  pool stats <Player>                       Show a player's statistics",
        "  pool help                                 Show this message",
        "",
        "Examples:",
        "  pool Thomas - Raymond",
        "  pool Thomas - Raymond -d 2025-5-20",
        "  pool stats Raymond",
    ]
    .join("\n")
}

impl Command {
    /// Parse arguments, excluding the program name
    pub fn parse(args: &[String]) -> Result<Self> {
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        match args.as_slice() {
            [] => Ok(Command::Show),
            [winner, VERSUS, loser] => Ok(Command::Record {
                winner: winner.to_string(),
                loser: loser.to_string(),
                date: None,
            }),
            [winner, VERSUS, loser, DATE_FLAG, date] => Ok(Command::Record {
                winner: winner.to_string(),
                loser: loser.to_string(),
                date: Some(date.to_string()),
            }),
            [_, VERSUS, _, ..] => Err(PoolError::Usage(
                "Invalid match format, expected: <Winner> - <Loser> [-d YYYY-MM-DD]".to_string(),
            )),
            [command] => match command.to_lowercase().as_str() {
                "show" => Ok(Command::Show),
                "history" => Ok(Command::History { limit: None }),
                "help" | "--help" | "-h" => Ok(Command::Help),
                _ => Err(PoolError::Usage(format!("Unknown command: {command}"))),
            },
            [command, arg] if command.eq_ignore_ascii_case("stats") => Ok(Command::Stats {
                player: arg.to_string(),
            }),
            [command, arg] if command.eq_ignore_ascii_case("history") => {
                match arg.parse::<usize>() {
                    Ok(limit) if limit > 0 => Ok(Command::History { limit: Some(limit) }),
                    _ => Err(PoolError::Usage(format!(
                        "History limit must be a positive integer, got: {arg}"
                    ))),
                }
            }
            _ => Err(PoolError::Usage("Invalid command format".to_string())),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
