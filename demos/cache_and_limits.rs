//! Example: Response caching, DNS rotation and rate limits.
//!
//! Run with: cargo run --example cache_and_limits

use std::time::Instant;

use poe_api_client::rate_limit::TrafficClass;
use poe_api_client::rest::{ClientOptions, PoeClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "poe_api_client=debug".into()),
        )
        .init();

    let client = PoeClient::builder()
        .options(ClientOptions {
            cache_size: 10,
            rate_limit: 2.0,
            ..Default::default()
        })
        .build()?;

    // The first call goes to the network, the second is answered from cache.
    let start = Instant::now();
    let rules = client.get_league_rules().await?;
    println!("{} league rules in {:?}", rules.len(), start.elapsed());

    let start = Instant::now();
    client.get_league_rules().await?;
    println!("Again from cache in {:?}", start.elapsed());
    println!("Cached responses: {}", client.cached_responses().await);

    // Cache misses are spaced at two per second.
    let start = Instant::now();
    for id in ["Hardcore", "NoParties", "HardMode"] {
        let url = client.format_url(&format!("/league-rules/{id}"));
        let class = TrafficClass::for_url(&url);
        match client.get(&url).await {
            Ok(_) => println!("{id} ({class}) at {:?}", start.elapsed()),
            Err(err) => println!("{id} ({class}) failed: {err}"),
        }
    }

    // Every connection gets the next address of the host.
    if let Some(dns) = client.dns_cache() {
        for _ in 0..3 {
            println!("api.pathofexile.com -> {}", dns.get("api.pathofexile.com").await?);
        }
    }

    Ok(())
}
