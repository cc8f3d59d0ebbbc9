//! Path of Exile REST API client implementation.

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::cache::{DnsCache, LruCache};
use crate::error::PoeError;
use crate::pipeline::{Fetch, Pipeline, Transport, TransportConfig, build_pipeline};
use crate::rate_limit::RateLimiter;
use crate::rest::options::ClientOptions;

/// The Path of Exile API client.
///
/// Every request goes through the response cache, the rate limiter and the
/// transport, in that order. Cloning the client is cheap and clones share
/// caches and rate limits.
///
/// # Example
///
/// ```rust,no_run
/// use poe_api_client::rest::PoeClient;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = PoeClient::new()?;
///
///     let league = client.get_current_challenge_league().await?;
///     println!("Current challenge league: {}", league.id);
///
///     Ok(())
/// }
/// ```
///
/// To point the client at a different server, use the builder:
///
/// ```rust,no_run
/// use poe_api_client::rest::{ClientOptions, PoeClient};
///
/// # fn main() -> Result<(), poe_api_client::PoeError> {
/// let client = PoeClient::builder()
///     .options(ClientOptions {
///         use_cache: false,
///         ..Default::default()
///     })
///     .base_url("http://127.0.0.1:8080")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct PoeClient {
    pipeline: Arc<Pipeline>,
    base_url: String,
    ninja_base_url: String,
    dns_cache: Option<Arc<DnsCache>>,
}

impl PoeClient {
    /// Create a client with default options.
    pub fn new() -> Result<Self, PoeError> {
        Self::builder().build()
    }

    /// Create a new client builder.
    pub fn builder() -> PoeClientBuilder {
        PoeClientBuilder::new()
    }

    /// GET a URL through the pipeline and return the response body.
    pub async fn get(&self, url: &str) -> Result<String, PoeError> {
        self.get_with_cancel(url, &CancellationToken::new()).await
    }

    /// Like [`get`](Self::get), but gives up with [`PoeError::Cancelled`]
    /// once `cancel` fires.
    pub async fn get_with_cancel(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<String, PoeError> {
        self.pipeline.fetch(url, cancel).await
    }

    /// Build the full URL of an API endpoint.
    pub fn format_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    /// Build the full URL of a poe.ninja endpoint.
    pub fn format_ninja_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.ninja_base_url, endpoint)
    }

    /// Get the DNS cache, if enabled.
    pub fn dns_cache(&self) -> Option<&DnsCache> {
        self.dns_cache.as_deref()
    }

    /// Number of responses currently cached.
    pub async fn cached_responses(&self) -> usize {
        self.pipeline.len().await
    }

    /// Drop every cached response.
    pub async fn clear_cache(&self) {
        self.pipeline.clear().await
    }

    /// GET a URL and decode its JSON body.
    pub(crate) async fn get_json<T>(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<T, PoeError>
    where
        T: DeserializeOwned,
    {
        let body = self.get_with_cancel(url, cancel).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Build an endpoint URL with an optional path segment and a query string.
    ///
    /// `id` is percent-encoded as a single path segment, since league names
    /// may contain spaces.
    pub(crate) fn endpoint_url<Q>(
        &self,
        endpoint: &str,
        id: Option<&str>,
        params: &Q,
    ) -> Result<String, PoeError>
    where
        Q: Serialize + ?Sized,
    {
        let mut url = Url::parse(&self.format_url(endpoint))?;
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| PoeError::InvalidHost)?
                .push(id);
        }
        let query_string = serde_urlencoded::to_string(params)?;
        if !query_string.is_empty() {
            url.set_query(Some(&query_string));
        }
        Ok(url.to_string())
    }
}

impl std::fmt::Debug for PoeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoeClient")
            .field("base_url", &self.base_url)
            .field("ninja_base_url", &self.ninja_base_url)
            .field("response_cache", &self.pipeline.is_enabled())
            .field("dns_cache", &self.dns_cache.is_some())
            .finish()
    }
}

/// Builder for [`PoeClient`].
#[derive(Debug, Clone, Default)]
pub struct PoeClientBuilder {
    options: ClientOptions,
    base_url: Option<String>,
    ninja_base_url: Option<String>,
    user_agent: Option<String>,
}

impl PoeClientBuilder {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all client options.
    pub fn options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    /// Override scheme and host of the API (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override scheme and host of poe.ninja.
    pub fn ninja_base_url(mut self, url: impl Into<String>) -> Self {
        self.ninja_base_url = Some(url.into());
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Validate the options and build the client.
    pub fn build(self) -> Result<PoeClient, PoeError> {
        let options = self.options;
        options.validate()?;

        let base_url = normalize_base_url(self.base_url.unwrap_or_else(|| options.base_url()))?;
        let ninja_base_url =
            normalize_base_url(self.ninja_base_url.unwrap_or_else(|| options.ninja_base_url()))?;

        let dns_cache = options
            .use_dns_cache
            .then(|| Arc::new(DnsCache::new(options.dns_ttl)));

        let mut transport_config = TransportConfig {
            timeout: options.request_timeout,
            dns_cache: dns_cache.clone(),
            ..Default::default()
        };
        if let Some(user_agent) = self.user_agent {
            transport_config.user_agent = user_agent;
        }
        let transport = Transport::new(transport_config)?;

        let limiter = RateLimiter::new(&options.rate_limits());
        let cache = if options.use_cache {
            Some(LruCache::new(options.cache_size)?)
        } else {
            None
        };

        tracing::debug!(
            %base_url,
            cache = options.use_cache,
            dns_cache = options.use_dns_cache,
            rate_limit = options.rate_limit,
            stash_rate_limit = options.stash_rate_limit,
            "built client"
        );

        Ok(PoeClient {
            pipeline: Arc::new(build_pipeline(transport, limiter, cache)),
            base_url,
            ninja_base_url,
            dns_cache,
        })
    }
}

/// Check that a base URL parses and strip any trailing slash.
fn normalize_base_url(base_url: String) -> Result<String, PoeError> {
    Url::parse(&base_url)?;
    Ok(base_url.trim_end_matches('/').to_string())
}
