//! Path of Exile API endpoint constants.

/// Default host of the Path of Exile API.
pub const DEFAULT_HOST: &str = "api.pathofexile.com";

/// Default host of the poe.ninja statistics API.
pub const DEFAULT_NINJA_HOST: &str = "poe.ninja";

/// List leagues, or a single league under `/leagues/{id}`.
pub const LEAGUES: &str = "/leagues";
/// List league rules, or a single rule under `/league-rules/{id}`.
pub const LEAGUE_RULES: &str = "/league-rules";
/// Ladder of a league under `/ladders/{id}`.
pub const LADDERS: &str = "/ladders";
/// List PvP matches.
pub const PVP_MATCHES: &str = "/pvp-matches";
/// Public stash tab river. Rate limited separately from everything else.
pub const STASH_TABS: &str = "/public-stash-tabs";

/// poe.ninja endpoints.
pub mod ninja {
    /// Site statistics, including the latest stash change id.
    pub const STATS: &str = "/api/Data/GetStats";
}
