//! Rate limiting for the Path of Exile API.
//!
//! The API enforces a hard per-second ceiling and does not document any burst
//! tolerance, so requests are spaced rather than bucketed.
//!
//! ## Traffic Classes
//!
//! - **Standard**: every endpoint except the public stash stream
//! - **Bulk**: the public stash stream, which has its own, lower limit
//!
//! The two classes are limited independently and never wait on each other.
//!
//! ## Example
//!
//! ```rust
//! use poe_api_client::rate_limit::{RateLimitConfig, RateLimiter, TrafficClass};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), poe_api_client::PoeError> {
//! let limiter = RateLimiter::new(&RateLimitConfig::default());
//! let cancel = CancellationToken::new();
//!
//! limiter.wait(TrafficClass::Standard, &cancel).await?;
//! # Ok(())
//! # }
//! ```

mod spacing;

pub use spacing::Spacing;

use tokio::sync::Mutex;
use tokio_util::sync::CancellationToken;

use crate::error::PoeError;
use crate::rest::endpoints;

/// Rate limiter configuration, in requests per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateLimitConfig {
    /// Rate for standard endpoints. [`limits::UNLIMITED_RATE`] disables spacing.
    pub rate_limit: f64,
    /// Rate for the public stash stream. [`limits::UNLIMITED_RATE`] disables spacing.
    pub stash_rate_limit: f64,
}

impl RateLimitConfig {
    /// A configuration with spacing disabled for both classes.
    pub fn unlimited() -> Self {
        Self {
            rate_limit: limits::UNLIMITED_RATE,
            stash_rate_limit: limits::UNLIMITED_RATE,
        }
    }

    /// Reject negative, NaN or infinite rates.
    pub fn validate(&self) -> Result<(), PoeError> {
        if !is_valid_rate(self.rate_limit) {
            return Err(PoeError::InvalidRateLimit);
        }
        if !is_valid_rate(self.stash_rate_limit) {
            return Err(PoeError::InvalidStashRateLimit);
        }
        Ok(())
    }
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            rate_limit: limits::DEFAULT_RATE_LIMIT,
            stash_rate_limit: limits::DEFAULT_STASH_RATE_LIMIT,
        }
    }
}

fn is_valid_rate(rate: f64) -> bool {
    rate.is_finite() && rate >= 0.0
}

/// Rate limit constants.
pub mod limits {
    /// Requests per second for standard endpoints.
    pub const DEFAULT_RATE_LIMIT: f64 = 4.0;
    /// Requests per second for the public stash stream.
    pub const DEFAULT_STASH_RATE_LIMIT: f64 = 1.0;
    /// Sentinel rate that disables spacing for a class.
    pub const UNLIMITED_RATE: f64 = 0.0;
}

/// The two independently limited categories of requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrafficClass {
    /// Regular API endpoints
    Standard,
    /// The public stash stream
    Bulk,
}

impl TrafficClass {
    /// Classify a request URL by its endpoint path.
    ///
    /// Unparseable URLs fall into the standard class.
    pub fn for_url(url: &str) -> Self {
        match url::Url::parse(url) {
            Ok(parsed) if parsed.path().starts_with(endpoints::STASH_TABS) => TrafficClass::Bulk,
            _ => TrafficClass::Standard,
        }
    }
}

impl std::fmt::Display for TrafficClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrafficClass::Standard => write!(f, "standard"),
            TrafficClass::Bulk => write!(f, "bulk"),
        }
    }
}

/// Per-class request spacing.
///
/// Each class owns its own lock. A class configured with
/// [`limits::UNLIMITED_RATE`] has no state at all and never waits.
#[derive(Debug)]
pub struct RateLimiter {
    standard: Option<Mutex<Spacing>>,
    bulk: Option<Mutex<Spacing>>,
}

impl RateLimiter {
    /// Create a limiter from a configuration.
    ///
    /// The configuration is expected to be validated already; invalid rates
    /// are treated as unlimited.
    pub fn new(config: &RateLimitConfig) -> Self {
        Self {
            standard: Spacing::per_second(config.rate_limit).map(Mutex::new),
            bulk: Spacing::per_second(config.stash_rate_limit).map(Mutex::new),
        }
    }

    /// Check whether a class is configured without spacing.
    pub fn is_unlimited(&self, class: TrafficClass) -> bool {
        self.spacing(class).is_none()
    }

    /// Wait until a request of the given class may be dispatched.
    ///
    /// The dispatch time is recorded before returning. Fails only with
    /// [`PoeError::Cancelled`] when `cancel` fires before a slot opens up.
    pub async fn wait(
        &self,
        class: TrafficClass,
        cancel: &CancellationToken,
    ) -> Result<(), PoeError> {
        let Some(spacing) = self.spacing(class) else {
            return Ok(());
        };

        loop {
            if cancel.is_cancelled() {
                return Err(PoeError::Cancelled);
            }

            let mut limiter = spacing.lock().await;
            match limiter.try_acquire() {
                Ok(()) => return Ok(()),
                Err(wait_time) => {
                    drop(limiter);
                    tracing::debug!(%class, ?wait_time, "waiting for rate limit slot");
                    tokio::select! {
                        _ = tokio::time::sleep(wait_time) => {}
                        _ = cancel.cancelled() => return Err(PoeError::Cancelled),
                    }
                }
            }
        }
    }

    fn spacing(&self, class: TrafficClass) -> Option<&Mutex<Spacing>> {
        match class {
            TrafficClass::Standard => self.standard.as_ref(),
            TrafficClass::Bulk => self.bulk.as_ref(),
        }
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(&RateLimitConfig::default())
    }
}
