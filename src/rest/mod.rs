//! Path of Exile REST API client.
//!
//! [`PoeClient`] owns the request pipeline and exposes one method per
//! endpoint. The [`PoeApi`] trait abstracts those methods for mock
//! implementations and generic callers.
//!
//! ```rust,ignore
//! use poe_api_client::rest::{GetLadderOptions, PoeClient};
//!
//! let client = PoeClient::new()?;
//! let ladder = client.get_ladder(&GetLadderOptions::new("Standard")).await?;
//! println!("{} of {} entries", ladder.entries.len(), ladder.total);
//! ```

mod api;
mod client;
pub mod endpoints;
mod options;
mod requests;
mod traits;

pub use client::{PoeClient, PoeClientBuilder};
pub use options::{ClientOptions, DEFAULT_CACHE_SIZE, DEFAULT_REQUEST_TIMEOUT};
pub use requests::{
    EARLIEST_LABYRINTH_START, GetLadderOptions, GetLeagueOptions, GetLeagueRuleOptions,
    GetLeaguesOptions, GetPvpMatchesOptions, GetStashOptions, MAX_COMPACT_LEAGUES_LIMIT,
    MAX_LEAGUES_LIMIT,
};
pub use traits::PoeApi;
