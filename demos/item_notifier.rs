//! Example: Watching the public stash tab river for an item.
//!
//! Starts at the latest change id reported by poe.ninja and follows the river,
//! printing every listing of the target item. Stash requests use their own,
//! lower rate limit, so the loop needs no sleeping of its own.
//!
//! Run with: cargo run --example item_notifier

use poe_api_client::rest::{GetStashOptions, PoeClient};

const TARGET_ITEM: &str = "Kaom's Heart";
const TARGET_LEAGUE: &str = "Standard";

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let client = PoeClient::new()?;
    let mut change_id = client.get_latest_stash_id().await?;
    println!("Starting at change {change_id}. Press Ctrl+C to exit.\n");

    loop {
        let chunk = client
            .get_stashes(&GetStashOptions::from_change(change_id.as_str()))
            .await?;
        if chunk.next_change_id == change_id {
            continue;
        }
        change_id = chunk.next_change_id;

        for stash in &chunk.stashes {
            let seller = stash.last_character_name.as_deref().unwrap_or("someone");
            for item in &stash.items {
                if item.name != TARGET_ITEM || item.league.as_deref() != Some(TARGET_LEAGUE) {
                    continue;
                }
                match &item.note {
                    Some(note) => println!("{seller} is selling {TARGET_ITEM} for {note}"),
                    None => println!("{seller} is selling {TARGET_ITEM}"),
                }
            }
        }
    }
}
