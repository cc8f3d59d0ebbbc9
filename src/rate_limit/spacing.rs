//! Minimum-gap request spacing.
//!
//! A [`Spacing`] limiter remembers when the last request went out and refuses
//! a new one until a full interval has passed. There is no burst allowance.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use poe_api_client::rate_limit::Spacing;
//!
//! let mut spacing = Spacing::new(Duration::from_millis(250));
//!
//! assert!(spacing.try_acquire().is_ok());
//! // A second request right away has to wait out the rest of the interval.
//! assert!(spacing.try_acquire().is_err());
//! ```

use std::time::Duration;

use tokio::time::Instant;

/// Leaky-bucket spacing for a single traffic class.
#[derive(Debug)]
pub struct Spacing {
    /// Minimum gap between two dispatches
    interval: Duration,
    /// When the last dispatch was recorded
    last_request: Option<Instant>,
}

impl Spacing {
    /// Create a limiter that enforces `interval` between dispatches.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_request: None,
        }
    }

    /// Create a limiter for `rate` requests per second.
    ///
    /// Returns `None` for a rate of zero, which means the class is unlimited.
    pub fn per_second(rate: f64) -> Option<Self> {
        if rate > 0.0 && rate.is_finite() {
            Some(Self::new(Duration::from_secs_f64(1.0 / rate)))
        } else {
            None
        }
    }

    /// Try to record a dispatch now.
    ///
    /// Returns `Ok(())` if the interval has elapsed, or `Err(wait_time)` with
    /// the remaining time otherwise. A refused attempt records nothing.
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        let now = Instant::now();
        if let Some(last) = self.last_request {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.interval {
                return Err(self.interval - elapsed);
            }
        }
        self.last_request = Some(now);
        Ok(())
    }

    /// Time left before the next dispatch is allowed, if any.
    pub fn time_until_available(&self) -> Option<Duration> {
        let last = self.last_request?;
        let elapsed = last.elapsed();
        (elapsed < self.interval).then(|| self.interval - elapsed)
    }

    /// The configured interval.
    pub fn interval(&self) -> Duration {
        self.interval
    }
}
