//! Ladder responses.

use serde::Deserialize;

use crate::pagination::Paginated;

/// The leaderboard of a league.
///
/// A single request returns at most one page of entries; `total` is the size
/// of the full ladder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ladder {
    /// Number of entries in the full ladder.
    pub total: usize,
    #[serde(default)]
    pub title: Option<String>,
    /// Unix start time, for labyrinth ladders.
    #[serde(default)]
    pub start_time: Option<i64>,
    #[serde(default)]
    pub entries: Vec<LadderEntry>,
}

impl Paginated for Ladder {
    type Entry = LadderEntry;

    fn total(&self) -> usize {
        self.total
    }

    fn take_entries(&mut self) -> Vec<LadderEntry> {
        std::mem::take(&mut self.entries)
    }

    fn set_entries(&mut self, entries: Vec<LadderEntry>) {
        self.entries = entries;
    }
}

/// One ranked character.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LadderEntry {
    pub rank: u32,
    #[serde(default)]
    pub online: bool,
    #[serde(default)]
    pub dead: bool,
    /// Completion time in seconds, for labyrinth ladders.
    #[serde(default)]
    pub time: Option<u64>,
    pub character: Character,
    pub account: Account,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Character {
    pub name: String,
    pub level: u32,
    pub class: String,
    /// Tracking id, present when the ladder was requested with `track=true`.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub experience: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub name: String,
    #[serde(default)]
    pub realm: Option<String>,
    #[serde(default)]
    pub challenges: Challenges,
}

/// Completed challenge count of an account.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct Challenges {
    pub total: u32,
}
