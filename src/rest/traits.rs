//! Trait definition for the Path of Exile API client.
//!
//! [`PoeApi`] abstracts the endpoint surface so callers can be written
//! against a mock in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use poe_api_client::rest::{GetLadderOptions, PoeApi};
//!
//! async fn top_level<C: PoeApi>(client: &C) -> poe_api_client::Result<u32> {
//!     let league = client.get_current_challenge_league().await?;
//!     let ladder = client.get_ladder(&GetLadderOptions::new(league.id)).await?;
//!     Ok(ladder.entries.iter().map(|e| e.character.level).max().unwrap_or(0))
//! }
//! ```

use std::future::Future;

use crate::Result;
use crate::rest::PoeClient;
use crate::rest::requests::{
    GetLadderOptions, GetLeagueOptions, GetLeagueRuleOptions, GetLeaguesOptions,
    GetPvpMatchesOptions, GetStashOptions,
};
use crate::types::{Ladder, League, LeagueRule, PvpMatch, StashResponse};

/// Every Path of Exile API operation.
pub trait PoeApi: Send + Sync {
    /// List leagues.
    fn get_leagues(
        &self,
        options: &GetLeaguesOptions,
    ) -> impl Future<Output = Result<Vec<League>>> + Send;

    /// Get the first league with an end date.
    fn get_current_challenge_league(
        &self,
    ) -> impl Future<Output = Result<League>> + Send;

    /// Get a single league.
    fn get_league(
        &self,
        options: &GetLeagueOptions,
    ) -> impl Future<Output = Result<League>> + Send;

    /// List every league rule.
    fn get_league_rules(&self) -> impl Future<Output = Result<Vec<LeagueRule>>> + Send;

    /// Get a single league rule.
    fn get_league_rule(
        &self,
        options: &GetLeagueRuleOptions,
    ) -> impl Future<Output = Result<LeagueRule>> + Send;

    /// Get a complete ladder.
    fn get_ladder(
        &self,
        options: &GetLadderOptions,
    ) -> impl Future<Output = Result<Ladder>> + Send;

    /// List PvP matches.
    fn get_pvp_matches(
        &self,
        options: &GetPvpMatchesOptions,
    ) -> impl Future<Output = Result<Vec<PvpMatch>>> + Send;

    /// Read one chunk of the public stash tab river.
    fn get_stashes(
        &self,
        options: &GetStashOptions,
    ) -> impl Future<Output = Result<StashResponse>> + Send;

    /// Get the latest stash change id.
    fn get_latest_stash_id(&self) -> impl Future<Output = Result<String>> + Send;
}

impl PoeApi for PoeClient {
    async fn get_leagues(&self, options: &GetLeaguesOptions) -> Result<Vec<League>> {
        PoeClient::get_leagues(self, options).await
    }

    async fn get_current_challenge_league(&self) -> Result<League> {
        PoeClient::get_current_challenge_league(self).await
    }

    async fn get_league(&self, options: &GetLeagueOptions) -> Result<League> {
        PoeClient::get_league(self, options).await
    }

    async fn get_league_rules(&self) -> Result<Vec<LeagueRule>> {
        PoeClient::get_league_rules(self).await
    }

    async fn get_league_rule(&self, options: &GetLeagueRuleOptions) -> Result<LeagueRule> {
        PoeClient::get_league_rule(self, options).await
    }

    async fn get_ladder(&self, options: &GetLadderOptions) -> Result<Ladder> {
        PoeClient::get_ladder(self, options).await
    }

    async fn get_pvp_matches(
        &self,
        options: &GetPvpMatchesOptions,
    ) -> Result<Vec<PvpMatch>> {
        PoeClient::get_pvp_matches(self, options).await
    }

    async fn get_stashes(&self, options: &GetStashOptions) -> Result<StashResponse> {
        PoeClient::get_stashes(self, options).await
    }

    async fn get_latest_stash_id(&self) -> Result<String> {
        PoeClient::get_latest_stash_id(self).await
    }
}
