//! Recording matches and deriving rankings, history and head-to-head records

use chrono::NaiveDateTime;
use tracing::{info, warn};

use crate::date::{now_local, parse_match_date};
use crate::error::{LeagueError, Result};
use crate::types::{LeagueState, MatchRecord, PlayerName, PlayerRecord};

/// Number of matches shown by `history` when no limit is given
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// One player's line in the rankings table
#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    pub player: PlayerName,
    pub wins: u64,
    pub losses: u64,
    pub total: u64,
    /// Fraction of matches won, in `[0, 1]`
    pub win_rate: f64,
}

impl RankingRow {
    fn new(player: &PlayerName, record: &PlayerRecord) -> Self {
        Self {
            player: player.clone(),
            wins: record.wins,
            losses: record.losses,
            total: record.total(),
            win_rate: record.win_rate(),
        }
    }
}

/// Record of one player against a single opponent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadToHead {
    pub opponent: PlayerName,
    /// Matches the player won against this opponent
    pub wins: u64,
    /// Matches the player lost against this opponent
    pub losses: u64,
}

impl LeagueState {
    /// Record `winner` beating `loser`.
    ///
    /// `when` is an optional `YYYY-MM-DD` date; without it the current local
    /// time is used. Names and date are validated before anything changes, so
    /// on error the state is left untouched.
    pub fn record_match(
        &mut self,
        winner: &str,
        loser: &str,
        when: Option<&str>,
    ) -> Result<MatchRecord> {
        let winner = PlayerName::new(winner)?;
        let loser = PlayerName::new(loser)?;
        let date = match when {
            Some(text) => parse_match_date(text)?,
            None => now_local(),
        };
        Ok(self.record_match_at(winner, loser, date))
    }

    /// Append a match with an already resolved timestamp and update both aggregates.
    ///
    /// Counters saturate at `u64::MAX`.
    pub fn record_match_at(
        &mut self,
        winner: PlayerName,
        loser: PlayerName,
        date: NaiveDateTime,
    ) -> MatchRecord {
        if winner == loser {
            warn!(player = %winner, "recording a match a player won against themself");
        }

        self.players.entry(&winner).add_win();
        self.players.entry(&loser).add_loss();

        info!(%winner, %loser, %date, "match recorded");
        let record = MatchRecord {
            date,
            winner,
            loser,
        };
        self.matches.push(record.clone());
        record
    }

    /// Players sorted by win rate, then by win count, both descending.
    ///
    /// The sort is stable: players equal on both keys keep roster order.
    pub fn rankings(&self) -> Vec<RankingRow> {
        let mut rows: Vec<_> = self
            .players
            .iter()
            .map(|(name, record)| RankingRow::new(name, record))
            .collect();
        rows.sort_by(|a, b| {
            b.win_rate
                .total_cmp(&a.win_rate)
                .then_with(|| b.wins.cmp(&a.wins))
        });
        rows
    }

    /// The most recent `limit` matches, newest first
    pub fn history(&self, limit: usize) -> Vec<&MatchRecord> {
        let start = self.matches.len().saturating_sub(limit);
        self.matches[start..].iter().rev().collect()
    }

    /// Aggregate line for a single player
    pub fn player_summary(&self, player: &str) -> Result<RankingRow> {
        let name = self.known_player(player)?;
        let record = self
            .players
            .get(&name)
            .ok_or_else(|| LeagueError::PlayerNotFound(player.to_string()))?;
        Ok(RankingRow::new(&name, record))
    }

    /// Per-opponent breakdown for `player`, in first-encounter order of the log
    pub fn head_to_head(&self, player: &str) -> Result<Vec<HeadToHead>> {
        let name = self.known_player(player)?;

        let mut records: Vec<HeadToHead> = Vec::new();
        for m in self.matches.iter().filter(|m| m.involves(&name)) {
            let (opponent, won) = if m.winner == name {
                (&m.loser, true)
            } else {
                (&m.winner, false)
            };

            let index = match records.iter().position(|r| r.opponent == *opponent) {
                Some(index) => index,
                None => {
                    records.push(HeadToHead {
                        opponent: opponent.clone(),
                        wins: 0,
                        losses: 0,
                    });
                    records.len() - 1
                }
            };
            if won {
                records[index].wins += 1;
            } else {
                records[index].losses += 1;
            }
        }
        Ok(records)
    }

    fn known_player(&self, player: &str) -> Result<PlayerName> {
        PlayerName::new(player)
            .ok()
            .filter(|name| self.players.contains(name))
            .ok_or_else(|| LeagueError::PlayerNotFound(player.to_string()))
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
