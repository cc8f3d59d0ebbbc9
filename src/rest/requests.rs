//! Request options for the API endpoints.
//!
//! Every option type validates itself before a request is sent and encodes
//! only the parameters the API accepts for the given combination of options.

use serde::Serialize;

use crate::error::OptionsError;
use crate::pagination::{LADDER_PAGES, PageOptions};
use crate::types::{LabyrinthDifficulty, LadderType, LeagueType, Realm};

/// Most leagues returned by one listing.
pub const MAX_LEAGUES_LIMIT: u32 = 50;

/// Most leagues returned by one compact listing.
pub const MAX_COMPACT_LEAGUES_LIMIT: u32 = 230;

/// Earliest valid labyrinth ladder start time, one day before the labyrinth
/// was released (March 1, 2016).
pub const EARLIEST_LABYRINTH_START: i64 = 1_456_790_400;

fn is_zero(n: &u32) -> bool {
    *n == 0
}

fn is_zero_usize(n: &usize) -> bool {
    *n == 0
}

/// Options for listing leagues. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetLeaguesOptions {
    pub league_type: Option<LeagueType>,
    pub realm: Option<Realm>,
    /// Season name. Required when `league_type` is [`LeagueType::Season`].
    pub season: Option<String>,
    /// Return only league ids and dates.
    pub compact: bool,
    /// Page size; 0 leaves it to the API.
    pub limit: u32,
    pub offset: u32,
}

impl GetLeaguesOptions {
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.league_type == Some(LeagueType::Season)
            && self.season.as_deref().is_none_or(str::is_empty)
        {
            return Err(OptionsError::MissingSeason);
        }
        let max_limit = if self.compact {
            MAX_COMPACT_LEAGUES_LIMIT
        } else {
            MAX_LEAGUES_LIMIT
        };
        if self.limit > max_limit {
            return Err(OptionsError::InvalidLimit);
        }
        Ok(())
    }

    pub(crate) fn query(&self) -> LeaguesQuery<'_> {
        let season = match self.league_type {
            Some(LeagueType::Season) => self.season.as_deref(),
            _ => None,
        };
        LeaguesQuery {
            league_type: self.league_type,
            realm: self.realm,
            season,
            compact: self.compact.then_some(1),
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct LeaguesQuery<'a> {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    league_type: Option<LeagueType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    realm: Option<Realm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    season: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    compact: Option<u8>,
    #[serde(skip_serializing_if = "is_zero")]
    limit: u32,
    #[serde(skip_serializing_if = "is_zero")]
    offset: u32,
}

/// Options for fetching a single league.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetLeagueOptions {
    /// League name. Required.
    pub id: String,
    pub realm: Option<Realm>,
}

impl GetLeagueOptions {
    /// Options for the league named `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            realm: None,
        }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.id.is_empty() {
            return Err(OptionsError::InvalidLeagueId);
        }
        Ok(())
    }

    pub(crate) fn query(&self) -> RealmQuery {
        RealmQuery { realm: self.realm }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct RealmQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    realm: Option<Realm>,
}

/// Options for fetching a single league rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetLeagueRuleOptions {
    /// Rule id. Required.
    pub id: String,
}

impl GetLeagueRuleOptions {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.id.is_empty() {
            return Err(OptionsError::MissingLeagueRuleId);
        }
        Ok(())
    }
}

/// Options for fetching a ladder.
///
/// Page size and offset are managed by the client, which always fetches the
/// whole ladder.
///
/// ```rust
/// use poe_api_client::rest::GetLadderOptions;
/// use poe_api_client::types::{LabyrinthDifficulty, LadderType};
///
/// let options = GetLadderOptions::new("Standard")
///     .ladder_type(LadderType::Labyrinth)
///     .difficulty(LabyrinthDifficulty::Merciless);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetLadderOptions {
    /// League name. Required.
    pub id: String,
    pub realm: Option<Realm>,
    pub ladder_type: Option<LadderType>,
    /// Ask the API to attach tracking ids to characters.
    pub track: bool,
    /// Only include this account. Applies to league ladders.
    pub account_name: Option<String>,
    /// Applies to labyrinth ladders.
    pub difficulty: Option<LabyrinthDifficulty>,
    /// Unix start time of a labyrinth ladder.
    pub start: Option<i64>,
    pub(crate) limit: usize,
    pub(crate) offset: usize,
}

impl GetLadderOptions {
    /// Options for the ladder of the league named `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Set the realm.
    pub fn realm(mut self, realm: Realm) -> Self {
        self.realm = Some(realm);
        self
    }

    /// Set the ladder type.
    pub fn ladder_type(mut self, ladder_type: LadderType) -> Self {
        self.ladder_type = Some(ladder_type);
        self
    }

    /// Ask the API to track the request. Sent on every page.
    pub fn track(mut self, track: bool) -> Self {
        self.track = track;
        self
    }

    /// Only include this account. Applies to league ladders.
    pub fn account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = Some(account_name.into());
        self
    }

    /// Set the labyrinth difficulty.
    pub fn difficulty(mut self, difficulty: LabyrinthDifficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Set the labyrinth start time, in Unix seconds.
    pub fn start(mut self, start: i64) -> Self {
        self.start = Some(start);
        self
    }

    /// Check the options, including the page window when one is set.
    pub fn validate(&self) -> Result<(), OptionsError> {
        if self.id.is_empty() {
            return Err(OptionsError::MissingLeagueId);
        }
        if self.is_labyrinth() {
            match self.start {
                Some(start) if start < 0 || (start > 0 && start < EARLIEST_LABYRINTH_START) => {
                    return Err(OptionsError::InvalidLabyrinthStartTime);
                }
                _ => {}
            }
        }
        if self.limit > LADDER_PAGES.page_size {
            return Err(OptionsError::InvalidLimit);
        }
        if self.offset > LADDER_PAGES.max_entries() {
            return Err(OptionsError::InvalidOffset);
        }
        Ok(())
    }

    fn is_labyrinth(&self) -> bool {
        self.ladder_type == Some(LadderType::Labyrinth)
    }

    pub(crate) fn query(&self) -> LadderQuery<'_> {
        // The API treats an unset type as a league ladder.
        let is_league = self.ladder_type.unwrap_or_default() == LadderType::League;
        let is_labyrinth = self.is_labyrinth();
        LadderQuery {
            realm: self.realm,
            ladder_type: self.ladder_type,
            track: self.track,
            account_name: self.account_name.as_deref().filter(|_| is_league),
            difficulty: self.difficulty.filter(|_| is_labyrinth),
            start: self.start.filter(|start| is_labyrinth && *start != 0),
            limit: self.limit,
            offset: self.offset,
        }
    }
}

impl PageOptions for GetLadderOptions {
    fn with_page(&self, limit: usize, offset: usize) -> Self {
        Self {
            limit,
            offset,
            ..self.clone()
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LadderQuery<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    realm: Option<Realm>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    ladder_type: Option<LadderType>,
    track: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    account_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    difficulty: Option<LabyrinthDifficulty>,
    #[serde(skip_serializing_if = "Option::is_none")]
    start: Option<i64>,
    #[serde(skip_serializing_if = "is_zero_usize")]
    limit: usize,
    #[serde(skip_serializing_if = "is_zero_usize")]
    offset: usize,
}

/// Options for listing PvP matches. All fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetPvpMatchesOptions {
    /// Match listing type, such as "season".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub match_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<Realm>,
}

/// Options for reading the public stash tab river.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GetStashOptions {
    /// Change id to read from. Omitting it starts from the oldest change.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl GetStashOptions {
    /// Options starting at change id `id`.
    pub fn from_change(id: impl Into<String>) -> Self {
        Self { id: Some(id.into()) }
    }
}
