//! Cache and rate-limit stages.

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::cache::LruCache;
use crate::error::PoeError;
use crate::pipeline::Fetch;
use crate::rate_limit::{RateLimiter, TrafficClass};
use crate::rest::endpoints;

/// Endpoints whose responses must never be served from cache.
///
/// Both advance a change-id cursor, so a cached body would be stale at once.
const UNCACHEABLE_PATHS: &[&str] = &[endpoints::STASH_TABS, endpoints::ninja::STATS];

/// Check whether a URL's response may be stored in the response cache.
pub fn is_cacheable(url: &str) -> bool {
    match url::Url::parse(url) {
        Ok(parsed) => !UNCACHEABLE_PATHS
            .iter()
            .any(|path| parsed.path().starts_with(path)),
        Err(_) => false,
    }
}

/// Serves repeat GETs from an LRU cache keyed by URL.
#[derive(Debug)]
pub struct CacheStage<F> {
    inner: F,
    cache: Option<Mutex<LruCache>>,
}

impl<F> CacheStage<F> {
    /// Wrap `inner`; `None` passes every request straight through.
    pub fn new(inner: F, cache: Option<LruCache>) -> Self {
        Self {
            inner,
            cache: cache.map(Mutex::new),
        }
    }

    /// Get a reference to the next stage.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Check whether caching is enabled.
    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Number of cached responses.
    pub async fn len(&self) -> usize {
        match &self.cache {
            Some(cache) => cache.lock().await.len(),
            None => 0,
        }
    }

    /// Drop every cached response.
    pub async fn clear(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().await.clear();
        }
    }
}

impl<F: Fetch> Fetch for CacheStage<F> {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String, PoeError> {
        let cache = match &self.cache {
            Some(cache) if is_cacheable(url) => cache,
            _ => return self.inner.fetch(url, cancel).await,
        };

        let cached = cache.lock().await.get(url).map(str::to_owned);
        if let Some(body) = cached {
            tracing::debug!(url, "response cache hit");
            return Ok(body);
        }

        tracing::debug!(url, "response cache miss");
        let body = self.inner.fetch(url, cancel).await?;
        cache.lock().await.insert(url, body.clone());
        Ok(body)
    }
}

/// Spaces requests according to their traffic class.
#[derive(Debug)]
pub struct RateLimitStage<F> {
    inner: F,
    limiter: RateLimiter,
}

impl<F> RateLimitStage<F> {
    /// Wrap `inner` with `limiter`.
    pub fn new(inner: F, limiter: RateLimiter) -> Self {
        Self { inner, limiter }
    }

    /// Get a reference to the next stage.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Get the limiter.
    pub fn limiter(&self) -> &RateLimiter {
        &self.limiter
    }
}

impl<F: Fetch> Fetch for RateLimitStage<F> {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String, PoeError> {
        self.limiter.wait(TrafficClass::for_url(url), cancel).await?;
        self.inner.fetch(url, cancel).await
    }
}
