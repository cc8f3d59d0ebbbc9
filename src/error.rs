//! Error types for the Path of Exile client library.

use reqwest::StatusCode;
use thiserror::Error;

/// The main error type for all client operations.
#[derive(Error, Debug)]
pub enum PoeError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query string encoding error
    #[error("query encoding error: {0}")]
    Query(#[from] serde_urlencoded::ser::Error),

    /// The API rejected a malformed request (HTTP 400).
    #[error("bad request")]
    BadRequest,

    /// The requested URL does not exist (HTTP 404).
    #[error("url not found")]
    NotFound,

    /// The API rate limits were exceeded (HTTP 429).
    ///
    /// The client spaces its requests, so seeing this means the configured
    /// limits are higher than what the API accepts.
    #[error("rate limited")]
    RateLimited,

    /// The API failed internally (HTTP 500).
    #[error("server error")]
    ServerFailure,

    /// The API answered with an undocumented status code.
    #[error("unknown server failure (HTTP {status})")]
    UnknownFailure {
        /// The status code that was returned
        status: u16,
    },

    /// The configured host is empty or unusable.
    #[error("invalid API host")]
    InvalidHost,

    /// The standard rate limit is negative or not finite.
    #[error("invalid rate limit")]
    InvalidRateLimit,

    /// The stash rate limit is negative or not finite.
    #[error("invalid stash rate limit")]
    InvalidStashRateLimit,

    /// The response cache was configured with fewer than one entry.
    #[error("invalid cache size")]
    InvalidCacheSize,

    /// The request timeout was zero.
    #[error("invalid request timeout")]
    InvalidTimeout,

    /// The `User-Agent` value is not a valid header value.
    #[error("invalid user agent: {0:?}")]
    InvalidUserAgent(String),

    /// A host could not be resolved to any address.
    #[error("failed to resolve host {host}: {reason}")]
    AddressResolution {
        /// Host that failed to resolve
        host: String,
        /// Underlying resolver message
        reason: String,
    },

    /// The DNS cache had no usable address for a host.
    #[error("invalid address in dns cache for {host}")]
    InvalidAddress {
        /// Host whose address ring is unusable
        host: String,
    },

    /// Request options failed validation before anything was sent.
    #[error("invalid options: {0}")]
    Options(#[from] OptionsError),

    /// The operation was cancelled through its cancellation token.
    #[error("request cancelled")]
    Cancelled,

    /// A page fetch task panicked or was aborted.
    #[error("page task failed: {0}")]
    TaskFailed(String),

    /// No league with an end date was found.
    #[error("failed to find challenge league")]
    NoChallengeLeague,
}

impl PoeError {
    /// Map a response status onto the API's documented failure kinds.
    ///
    /// Returns `Ok(())` only for `200 OK`.
    pub fn from_status(status: StatusCode) -> Result<(), PoeError> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::BAD_REQUEST => Err(PoeError::BadRequest),
            StatusCode::NOT_FOUND => Err(PoeError::NotFound),
            StatusCode::TOO_MANY_REQUESTS => Err(PoeError::RateLimited),
            StatusCode::INTERNAL_SERVER_ERROR => Err(PoeError::ServerFailure),
            other => Err(PoeError::UnknownFailure {
                status: other.as_u16(),
            }),
        }
    }

    /// Check if this error was produced by the API's rate limiting.
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, PoeError::RateLimited)
    }

    /// Check if this error came from the API rather than the transport or the caller.
    pub fn is_api_failure(&self) -> bool {
        matches!(
            self,
            PoeError::BadRequest
                | PoeError::NotFound
                | PoeError::RateLimited
                | PoeError::ServerFailure
                | PoeError::UnknownFailure { .. }
        )
    }
}

/// Validation failures for endpoint options.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    /// A ladder request had no league id.
    #[error("missing league id")]
    MissingLeagueId,

    /// A league request had no league id.
    #[error("invalid league id")]
    InvalidLeagueId,

    /// A league rule request had no rule id.
    #[error("missing league rule id")]
    MissingLeagueRuleId,

    /// A season league listing had no season name.
    #[error("invalid season")]
    MissingSeason,

    /// The page size is out of bounds.
    #[error("invalid limit")]
    InvalidLimit,

    /// The page offset is out of bounds.
    #[error("invalid offset")]
    InvalidOffset,

    /// The labyrinth start time is negative or predates the labyrinth.
    #[error("invalid labyrinth start time")]
    InvalidLabyrinthStartTime,
}
