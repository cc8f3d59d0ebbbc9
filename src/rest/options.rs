//! Client configuration.

use std::time::Duration;

use crate::cache::DEFAULT_DNS_TTL;
use crate::error::PoeError;
use crate::rate_limit::{RateLimitConfig, limits};
use crate::rest::endpoints::{DEFAULT_HOST, DEFAULT_NINJA_HOST};

/// Default number of cached responses.
pub const DEFAULT_CACHE_SIZE: usize = 200;

/// Default upper bound on a single request.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Settings for [`PoeClient`](crate::rest::PoeClient).
///
/// The defaults talk to the official API over HTTPS with caching enabled and
/// rate limits matching the API's published ones.
///
/// ```rust
/// use poe_api_client::rest::ClientOptions;
///
/// let options = ClientOptions {
///     cache_size: 50,
///     rate_limit: 2.0,
///     ..Default::default()
/// };
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ClientOptions {
    /// Host of the Path of Exile API.
    pub host: String,
    /// Host of the poe.ninja API, used for the latest stash change id.
    pub ninja_host: String,
    /// Use `https` rather than `http`.
    pub use_ssl: bool,
    /// Cache GET responses by URL.
    pub use_cache: bool,
    /// Resolve hosts through the rotating DNS cache.
    pub use_dns_cache: bool,
    /// Response cache capacity, in entries. Ignored when caching is disabled.
    pub cache_size: usize,
    /// Requests per second for standard endpoints.
    pub rate_limit: f64,
    /// Requests per second for the public stash stream.
    pub stash_rate_limit: f64,
    /// Upper bound on a single request, connect through body. Must be non-zero.
    pub request_timeout: Duration,
    /// How long resolved addresses are reused.
    pub dns_ttl: Duration,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            ninja_host: DEFAULT_NINJA_HOST.to_string(),
            use_ssl: true,
            use_cache: true,
            use_dns_cache: true,
            cache_size: DEFAULT_CACHE_SIZE,
            rate_limit: limits::DEFAULT_RATE_LIMIT,
            stash_rate_limit: limits::DEFAULT_STASH_RATE_LIMIT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            dns_ttl: DEFAULT_DNS_TTL,
        }
    }
}

impl ClientOptions {
    /// Check every setting, returning the first problem found.
    pub fn validate(&self) -> Result<(), PoeError> {
        if !is_valid_host(&self.host) || !is_valid_host(&self.ninja_host) {
            return Err(PoeError::InvalidHost);
        }
        if self.use_cache && self.cache_size < 1 {
            return Err(PoeError::InvalidCacheSize);
        }
        self.rate_limits().validate()?;
        if self.request_timeout.is_zero() {
            return Err(PoeError::InvalidTimeout);
        }
        Ok(())
    }

    /// The rate limiter settings.
    pub fn rate_limits(&self) -> RateLimitConfig {
        RateLimitConfig {
            rate_limit: self.rate_limit,
            stash_rate_limit: self.stash_rate_limit,
        }
    }

    /// Scheme and host of the Path of Exile API, e.g. `https://api.pathofexile.com`.
    pub fn base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.host)
    }

    /// Scheme and host of the poe.ninja API.
    pub fn ninja_base_url(&self) -> String {
        format!("{}://{}", self.scheme(), self.ninja_host)
    }

    fn scheme(&self) -> &'static str {
        if self.use_ssl { "https" } else { "http" }
    }
}

fn is_valid_host(host: &str) -> bool {
    let host = host.trim();
    !host.is_empty() && !host.contains('/') && !host.contains(char::is_whitespace)
}
