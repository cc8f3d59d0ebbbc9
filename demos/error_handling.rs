//! Example: Working with PoeError and OptionsError.
//!
//! Run with: cargo run --example error_handling

use poe_api_client::error::{OptionsError, PoeError};
use poe_api_client::rest::{ClientOptions, GetLadderOptions, GetLeagueOptions, PoeClient};
use poe_api_client::types::LadderType;

#[tokio::main]
async fn main() {
    // Configuration problems are reported when the client is built.
    let result = PoeClient::builder()
        .options(ClientOptions {
            rate_limit: -1.0,
            ..Default::default()
        })
        .build();
    if let Err(err) = result {
        println!("Rejected configuration: {err}");
    }

    // Option problems are reported before anything is sent.
    let options = GetLadderOptions::new("Standard")
        .ladder_type(LadderType::Labyrinth)
        .start(1_000);
    match options.validate() {
        Err(OptionsError::InvalidLabyrinthStartTime) => {
            println!("Labyrinth ladders start no earlier than March 2016")
        }
        other => println!("Unexpected validation result: {other:?}"),
    }

    let client = match PoeClient::new() {
        Ok(client) => client,
        Err(err) => {
            println!("Failed to build client: {err}");
            return;
        }
    };

    // API failures map onto typed variants.
    match client.get_league(&GetLeagueOptions::new("No Such League")).await {
        Ok(league) => println!("Unexpectedly found league {}", league.id),
        Err(PoeError::NotFound) => println!("League does not exist"),
        Err(err) if err.is_rate_limit() => println!("Slow down: {err}"),
        Err(err) if err.is_api_failure() => println!("API failure: {err}"),
        Err(err) => println!("Request failed: {err}"),
    }
}
