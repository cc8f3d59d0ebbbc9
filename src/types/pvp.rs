//! PvP match responses.

use serde::Deserialize;
use time::OffsetDateTime;

/// A scheduled or finished PvP match.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PvpMatch {
    pub id: String,
    #[serde(default)]
    pub realm: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub start_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub end_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the match counts toward Glicko ratings.
    #[serde(default)]
    pub glicko_ratings: bool,
    #[serde(default)]
    pub pvp: bool,
    /// Match style, such as "Blitz" or "Swiss".
    #[serde(default)]
    pub style: Option<String>,
}
