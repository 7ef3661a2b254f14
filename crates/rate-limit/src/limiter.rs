//! Sliding window rate limiter.

use std::time::Duration;

use config::RateLimitConfig;

use crate::error::RateLimitError;
use crate::storage::{InMemoryStorage, RateLimitStorage};

/// Window length used when the configured interval is zero.
const DEFAULT_INTERVAL: Duration = Duration::from_millis(60_000);

/// Number of distinct tokens tracked when the configured capacity is zero.
const DEFAULT_UNIQUE_TOKENS: u64 = 500;

/// A sliding window rate limiter tracking request counts per client token.
///
/// One limiter owns one policy and its cache. Construct it once per
/// policy and hand references to call sites; there is no process-wide
/// instance.
pub struct RateLimiter<S = InMemoryStorage> {
    storage: S,
}

impl RateLimiter<InMemoryStorage> {
    /// Create a rate limiter with in-memory storage from the given
    /// configuration. Zero values fall back to the defaults of a 60
    /// second window and 500 tracked tokens.
    pub fn new(config: &RateLimitConfig) -> Self {
        let interval = if config.interval.is_zero() {
            DEFAULT_INTERVAL
        } else {
            config.interval
        };

        let unique_tokens = match config.unique_token_per_interval {
            0 => DEFAULT_UNIQUE_TOKENS,
            n => n,
        };

        Self {
            storage: InMemoryStorage::new(interval, unique_tokens),
        }
    }
}

impl<S: RateLimitStorage> RateLimiter<S> {
    /// Create a rate limiter on top of a custom storage backend.
    pub fn with_storage(storage: S) -> Self {
        Self { storage }
    }

    /// Check whether `token` may make another request.
    ///
    /// The current request is counted before the comparison, so a limit
    /// of five admits exactly five requests per window and rejects the
    /// sixth. Rejected requests still count toward the window. The
    /// caller decides whether and when to retry.
    pub async fn check(&self, limit: u32, token: &str) -> Result<(), RateLimitError> {
        if limit == 0 {
            return Err(RateLimitError::InvalidLimit);
        }

        if token.is_empty() {
            return Err(RateLimitError::EmptyToken);
        }

        let result = self.storage.check_and_consume(token, limit).await?;

        if !result.allowed {
            return Err(RateLimitError::LimitExceeded);
        }

        Ok(())
    }
}
