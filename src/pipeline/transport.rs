//! Final pipeline stage: the HTTP round trip.

use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use tokio_util::sync::CancellationToken;

use crate::cache::{CachingResolver, DnsCache};
use crate::error::PoeError;
use crate::pipeline::Fetch;

/// Settings for the underlying HTTP client.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Upper bound on a single request, connect through body.
    pub timeout: Duration,
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Resolve hosts through this cache instead of the connector's default.
    pub dns_cache: Option<Arc<DnsCache>>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            user_agent: format!("poe-api-client/{}", env!("CARGO_PKG_VERSION")),
            dns_cache: None,
        }
    }
}

/// Sends GET requests and maps the status code to an outcome.
#[derive(Debug, Clone)]
pub struct Transport {
    http_client: ClientWithMiddleware,
}

impl Transport {
    /// Build the HTTP client described by `config`.
    ///
    /// Fails with [`PoeError::InvalidUserAgent`] when the user agent contains
    /// characters a header cannot carry.
    pub fn new(config: TransportConfig) -> Result<Self, PoeError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| PoeError::InvalidUserAgent(config.user_agent.clone()))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout);
        if let Some(cache) = config.dns_cache {
            builder = builder.dns_resolver(Arc::new(CachingResolver::new(cache)));
        }
        let reqwest_client = builder.build()?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self { http_client })
    }

    /// Wrap an already configured client.
    pub fn from_client(http_client: ClientWithMiddleware) -> Self {
        Self { http_client }
    }
}

impl Fetch for Transport {
    async fn fetch(&self, url: &str, cancel: &CancellationToken) -> Result<String, PoeError> {
        let response = tokio::select! {
            response = self.http_client.get(url).send() => response?,
            _ = cancel.cancelled() => return Err(PoeError::Cancelled),
        };

        let status = response.status();
        if let Err(err) = PoeError::from_status(status) {
            if err.is_rate_limit() {
                tracing::warn!(url, "rate limited by the API; configured limits are too high");
            } else {
                tracing::debug!(url, %status, "request failed");
            }
            return Err(err);
        }

        tokio::select! {
            body = response.text() => Ok(body?),
            _ = cancel.cancelled() => Err(PoeError::Cancelled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_user_agent_is_rejected() {
        let config = TransportConfig {
            user_agent: "ladder-watch\n0.1".to_string(),
            ..Default::default()
        };
        match Transport::new(config) {
            Err(PoeError::InvalidUserAgent(agent)) => assert_eq!(agent, "ladder-watch\n0.1"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_default_config_builds() {
        assert!(Transport::new(TransportConfig::default()).is_ok());
    }
}
