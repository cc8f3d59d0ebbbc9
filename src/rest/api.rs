//! Endpoint methods of [`PoeClient`].

use tokio_util::sync::CancellationToken;

use crate::Result;
use crate::error::PoeError;
use crate::pagination::{self, LADDER_PAGES};
use crate::rest::PoeClient;
use crate::rest::endpoints::{self, ninja};
use crate::rest::requests::{
    GetLadderOptions, GetLeagueOptions, GetLeagueRuleOptions, GetLeaguesOptions,
    GetPvpMatchesOptions, GetStashOptions,
};
use crate::types::{Ladder, LatestChange, League, LeagueRule, PvpMatch, StashResponse};

impl PoeClient {
    /// List leagues.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use poe_api_client::rest::{GetLeaguesOptions, PoeClient};
    /// use poe_api_client::types::LeagueType;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = PoeClient::new()?;
    ///     let options = GetLeaguesOptions {
    ///         league_type: Some(LeagueType::Main),
    ///         ..Default::default()
    ///     };
    ///     for league in client.get_leagues(&options).await? {
    ///         println!("{}", league.id);
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_leagues(&self, options: &GetLeaguesOptions) -> Result<Vec<League>> {
        options.validate()?;
        let url = self.endpoint_url(endpoints::LEAGUES, None, &options.query())?;
        self.get_json(&url, &CancellationToken::new()).await
    }

    /// Get the current challenge league.
    ///
    /// This is the first listed league with an end date; permanent leagues
    /// have none. Fails with [`PoeError::NoChallengeLeague`] between leagues.
    pub async fn get_current_challenge_league(&self) -> Result<League> {
        self.get_leagues(&GetLeaguesOptions::default())
            .await?
            .into_iter()
            .find(League::is_timed)
            .ok_or(PoeError::NoChallengeLeague)
    }

    /// Get a single league.
    pub async fn get_league(&self, options: &GetLeagueOptions) -> Result<League> {
        options.validate()?;
        let url = self.endpoint_url(endpoints::LEAGUES, Some(&options.id), &options.query())?;
        self.get_json(&url, &CancellationToken::new()).await
    }

    /// List every league rule.
    pub async fn get_league_rules(&self) -> Result<Vec<LeagueRule>> {
        let url = self.format_url(endpoints::LEAGUE_RULES);
        self.get_json(&url, &CancellationToken::new()).await
    }

    /// Get a single league rule.
    pub async fn get_league_rule(
        &self,
        options: &GetLeagueRuleOptions,
    ) -> Result<LeagueRule> {
        options.validate()?;
        let url = self.endpoint_url(endpoints::LEAGUE_RULES, Some(&options.id), &())?;
        self.get_json(&url, &CancellationToken::new()).await
    }

    /// Get the complete ladder of a league.
    ///
    /// The ladder is fetched in pages of 200 entries, all but the first of
    /// them concurrently, up to the API's limit of 15 000 entries. A failed
    /// page fails the whole call.
    pub async fn get_ladder(&self, options: &GetLadderOptions) -> Result<Ladder> {
        self.get_ladder_with_cancel(options, &CancellationToken::new())
            .await
    }

    /// Like [`get_ladder`](Self::get_ladder), but stops early once `cancel` fires.
    pub async fn get_ladder_with_cancel(
        &self,
        options: &GetLadderOptions,
        cancel: &CancellationToken,
    ) -> Result<Ladder> {
        options.validate()?;
        let client = self.clone();
        let fetch_page = move |page: GetLadderOptions, cancel: CancellationToken| {
            let client = client.clone();
            async move { client.get_ladder_page(&page, &cancel).await }
        };
        pagination::get_all(options.clone(), LADDER_PAGES, fetch_page, cancel).await
    }

    /// Get one page of a ladder.
    async fn get_ladder_page(
        &self,
        options: &GetLadderOptions,
        cancel: &CancellationToken,
    ) -> Result<Ladder> {
        options.validate()?;
        let url = self.endpoint_url(endpoints::LADDERS, Some(&options.id), &options.query())?;
        self.get_json(&url, cancel).await
    }

    /// List PvP matches.
    pub async fn get_pvp_matches(
        &self,
        options: &GetPvpMatchesOptions,
    ) -> Result<Vec<PvpMatch>> {
        let url = self.endpoint_url(endpoints::PVP_MATCHES, None, options)?;
        self.get_json(&url, &CancellationToken::new()).await
    }

    /// Read one chunk of the public stash tab river.
    ///
    /// Stash requests are limited by the stash rate limit and never cached.
    pub async fn get_stashes(&self, options: &GetStashOptions) -> Result<StashResponse> {
        let url = self.endpoint_url(endpoints::STASH_TABS, None, options)?;
        self.get_json(&url, &CancellationToken::new()).await
    }

    /// Get the latest stash change id from poe.ninja.
    ///
    /// Useful as a starting point for [`get_stashes`](Self::get_stashes)
    /// instead of reading the river from the beginning.
    pub async fn get_latest_stash_id(&self) -> Result<String> {
        let url = self.format_ninja_url(ninja::STATS);
        let latest: LatestChange = self.get_json(&url, &CancellationToken::new()).await?;
        Ok(latest.next_change_id)
    }
}
