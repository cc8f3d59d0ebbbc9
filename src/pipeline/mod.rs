//! The request pipeline behind every API call.
//!
//! A GET passes through a fixed chain of named stages, each implementing
//! [`Fetch`]:
//!
//! 1. [`CacheStage`] answers repeat requests from the response cache
//! 2. [`RateLimitStage`] waits for the request's traffic class
//! 3. [`Transport`] sends the request and classifies the status code
//!
//! The cache sits in front of the limiter so a cache hit never consumes a
//! rate-limit slot, while every miss is spaced before it reaches the network.
//!
//! ```rust,ignore
//! use poe_api_client::pipeline::{Fetch, Pipeline};
//! use tokio_util::sync::CancellationToken;
//!
//! let body = pipeline
//!     .fetch("https://api.pathofexile.com/leagues", &CancellationToken::new())
//!     .await?;
//! ```

mod stages;
mod transport;

pub use stages::{CacheStage, RateLimitStage, is_cacheable};
pub use transport::{Transport, TransportConfig};

use std::future::Future;

use tokio_util::sync::CancellationToken;

use crate::cache::LruCache;
use crate::error::PoeError;
use crate::rate_limit::RateLimiter;

/// A single capability: fetch the body behind a URL.
pub trait Fetch: Send + Sync {
    /// Fetch `url`, giving up with [`PoeError::Cancelled`] if `cancel` fires.
    fn fetch(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<String, PoeError>> + Send;
}

/// The full stage chain used by the client.
pub type Pipeline = CacheStage<RateLimitStage<Transport>>;

/// Assemble the stage chain.
///
/// Passing `None` for `cache` disables response caching entirely.
pub fn build_pipeline(
    transport: Transport,
    limiter: RateLimiter,
    cache: Option<LruCache>,
) -> Pipeline {
    CacheStage::new(RateLimitStage::new(transport, limiter), cache)
}
