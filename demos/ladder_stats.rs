//! Example: Class distribution of a league ladder.
//!
//! Fetches the whole ladder of the current challenge league (up to 15 000
//! characters, in concurrent pages) and prints how many characters play each
//! class.
//!
//! Run with: cargo run --example ladder_stats

use std::collections::HashMap;

use poe_api_client::rest::{GetLadderOptions, PoeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing for logging (optional)
    tracing_subscriber::fmt::init();

    let client = PoeClient::new()?;

    let league = client.get_current_challenge_league().await?;
    println!("Fetching ladder for {}...", league.id);

    let ladder = client.get_ladder(&GetLadderOptions::new(&league.id)).await?;
    println!("{} of {} entries\n", ladder.entries.len(), ladder.total);

    let mut classes: HashMap<&str, usize> = HashMap::new();
    for entry in &ladder.entries {
        *classes.entry(entry.character.class.as_str()).or_default() += 1;
    }

    let mut classes: Vec<_> = classes.into_iter().collect();
    classes.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    for (class, count) in classes {
        let share = count as f64 * 100.0 / ladder.entries.len() as f64;
        println!("{class:<16} {count:>6} ({share:.1}%)");
    }

    Ok(())
}
