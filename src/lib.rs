//! # Path of Exile API Client
//!
//! An async Rust client library for the Path of Exile public web API.
//!
//! ## Features
//!
//! - Endpoints for leagues, league rules, ladders, PvP matches and the
//!   public stash tab river
//! - Separate request spacing for standard endpoints and the stash river
//! - LRU response cache keyed by URL
//! - DNS cache handing out every address of a host round-robin
//! - Whole-ladder retrieval with concurrent page requests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use poe_api_client::rest::{GetLadderOptions, PoeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PoeClient::new()?;
//!
//!     let league = client.get_current_challenge_league().await?;
//!     let ladder = client.get_ladder(&GetLadderOptions::new(&league.id)).await?;
//!     println!("{}: {} characters", league.id, ladder.entries.len());
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod pagination;
pub mod pipeline;
pub mod rate_limit;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{OptionsError, PoeError};
pub use types::common::{LabyrinthDifficulty, LadderType, LeagueType, Realm};

/// Result type alias using PoeError
pub type Result<T> = std::result::Result<T, PoeError>;
