//! Running a parsed command against the league data

use std::io::Write;
use tracing::{debug, info};

use league_core::MatchStore;

use crate::cli::{usage, Command};
use crate::config::PoolConfig;
use crate::error::Result;
use crate::readme::update_readme;
use crate::render::{history_report, player_report, rankings_report};

/// Execute `command`, writing the report to `out`.
///
/// Only `Record` mutates the data file; it saves the league, refreshes the
/// README section (when enabled) and then prints the rankings.
pub fn execute(command: &Command, config: &PoolConfig, out: &mut dyn Write) -> Result<()> {
    debug!(?command, data_file = %config.data_file.display(), "executing");
    let store = MatchStore::new(&config.data_file);

    match command {
        Command::Help => {
            writeln!(out, "{}", usage())?;
        }
        Command::Show => {
            let league = store.load()?;
            write!(out, "{}", rankings_report(&league.rankings()))?;
        }
        Command::Record {
            winner,
            loser,
            date,
        } => {
            let mut league = store.load()?;
            let record = league.record_match(winner, loser, date.as_deref())?;
            let message = format!("Match recorded: {} defeated {}", record.winner, record.loser);
            store.save(&league)?;

            let rankings = league.rankings();
            if config.update_readme {
                update_readme(&config.readme_file, &rankings)?;
                info!(path = %config.readme_file.display(), "README updated with current rankings");
            }
            writeln!(out, "{message}")?;
            write!(out, "{}", rankings_report(&rankings))?;
        }
        Command::History { limit } => {
            let league = store.load()?;
            let limit = limit.unwrap_or(config.history_limit);
            write!(out, "{}", history_report(&league.history(limit)))?;
        }
        Command::Stats { player } => {
            let league = store.load()?;
            let summary = league.player_summary(player)?;
            let head_to_head = league.head_to_head(player)?;
            write!(out, "{}", player_report(&summary, &head_to_head))?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod commands_tests;
