//! Response types and request enumerations for the Path of Exile API.

pub mod common;
mod ladder;
mod league;
mod pvp;
mod stash;

pub use common::*;
pub use ladder::{Account, Challenges, Character, Ladder, LadderEntry};
pub use league::{League, LeagueRule};
pub use pvp::PvpMatch;
pub use stash::{Item, LatestChange, Stash, StashResponse};
