//! League data model: players, matches and the persisted league state

use chrono::NaiveDateTime;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::LeagueError;

/// Validated player identifier.
///
/// Names are trimmed on construction and must not be empty. After trimming,
/// comparison is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PlayerName(String);

impl PlayerName {
    pub fn new(name: &str) -> Result<Self, LeagueError> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(LeagueError::InvalidPlayerName(name.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PlayerName {
    type Error = LeagueError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if !value.is_empty() && value.trim() == value {
            return Ok(Self(value));
        }
        Self::new(&value)
    }
}

impl From<PlayerName> for String {
    fn from(name: PlayerName) -> Self {
        name.0
    }
}

impl fmt::Display for PlayerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl PartialEq<str> for PlayerName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PlayerName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// One recorded match. Immutable once appended to the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Local time of the match, stored as ISO-8601 without offset
    pub date: NaiveDateTime,
    pub winner: PlayerName,
    pub loser: PlayerName,
}

impl MatchRecord {
    pub fn involves(&self, player: &PlayerName) -> bool {
        self.winner == *player || self.loser == *player
    }
}

/// Aggregate win/loss counters for one player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub wins: u64,
    pub losses: u64,
}

impl PlayerRecord {
    pub fn total(&self) -> u64 {
        self.wins.saturating_add(self.losses)
    }

    pub fn add_win(&mut self) {
        self.wins = self.wins.saturating_add(1);
    }

    pub fn add_loss(&mut self) {
        self.losses = self.losses.saturating_add(1);
    }

    /// Fraction of matches won, 0.0 for a player with no matches
    pub fn win_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.wins as f64 / total as f64
    }
}

/// Player aggregates keyed by name, kept in first-appearance order.
///
/// Serialized as a JSON object whose key order is the insertion order, so
/// ranking tie-breaks are stable across save/load.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    entries: Vec<(PlayerName, PlayerRecord)>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, player: &PlayerName) -> Option<&PlayerRecord> {
        self.entries
            .iter()
            .find(|(name, _)| name == player)
            .map(|(_, record)| record)
    }

    pub fn contains(&self, player: &PlayerName) -> bool {
        self.get(player).is_some()
    }

    /// Get the record for `player`, appending a zeroed one if absent
    pub fn entry(&mut self, player: &PlayerName) -> &mut PlayerRecord {
        let index = match self.entries.iter().position(|(name, _)| name == player) {
            Some(index) => index,
            None => {
                self.entries.push((player.clone(), PlayerRecord::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[index].1
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerName, &PlayerRecord)> {
        self.entries.iter().map(|(name, record)| (name, record))
    }
}

impl Serialize for Roster {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, record) in &self.entries {
            map.serialize_entry(name, record)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Roster {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RosterVisitor;

        impl<'de> Visitor<'de> for RosterVisitor {
            type Value = Roster;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of player names to win/loss records")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Roster, A::Error> {
                let mut roster = Roster::new();
                while let Some((name, record)) = access.next_entry::<PlayerName, PlayerRecord>()? {
                    if roster.contains(&name) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate player entry: {name}"
                        )));
                    }
                    roster.entries.push((name, record));
                }
                Ok(roster)
            }
        }

        deserializer.deserialize_map(RosterVisitor)
    }
}

/// The full league: match log plus derived per-player aggregates
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueState {
    /// Match log in append order
    pub matches: Vec<MatchRecord>,
    pub players: Roster,
}

impl LeagueState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every match participant has an aggregate and that the
    /// aggregates match the counts in the log.
    pub fn is_consistent(&self) -> bool {
        let mut expected = Roster::new();
        for m in &self.matches {
            expected.entry(&m.winner).add_win();
            expected.entry(&m.loser).add_loss();
        }
        expected
            .iter()
            .all(|(name, record)| self.players.get(name) == Some(record))
            && self
                .players
                .iter()
                .all(|(name, record)| expected.contains(name) || record.total() == 0)
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
