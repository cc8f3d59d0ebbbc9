//! Public stash tab responses.

use std::collections::HashMap;

use serde::Deserialize;

/// One chunk of the public stash tab river.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StashResponse {
    /// Cursor for the next chunk.
    pub next_change_id: String,
    #[serde(default)]
    pub stashes: Vec<Stash>,
}

/// A public stash tab and the items listed in it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stash {
    pub id: String,
    /// False when the tab was made private or emptied since the last change.
    #[serde(default)]
    pub public: bool,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub last_character_name: Option<String>,
    /// Tab name.
    #[serde(default)]
    pub stash: Option<String>,
    #[serde(default)]
    pub stash_type: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    #[serde(default)]
    pub items: Vec<Item>,
}

/// An item in a public stash tab.
///
/// Only the fields common to every item are typed; the rest is kept in
/// `extra` as raw JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub base_type: Option<String>,
    #[serde(default)]
    pub ilvl: u32,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub league: Option<String>,
    /// Price note, such as "~b/o 1 chaos".
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub stack_size: Option<u32>,
    #[serde(default)]
    pub identified: bool,
    #[serde(default)]
    pub corrupted: bool,
    #[serde(default)]
    pub frame_type: u8,
    #[serde(default)]
    pub w: u8,
    #[serde(default)]
    pub h: u8,
    #[serde(default)]
    pub x: Option<u32>,
    #[serde(default)]
    pub y: Option<u32>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

/// Response of the poe.ninja statistics endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatestChange {
    /// Most recent change id of the stash tab river.
    pub next_change_id: String,
}
