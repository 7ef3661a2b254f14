//! Storage backends for sliding window rate limiting.

pub mod memory;

pub use memory::InMemoryStorage;

/// Outcome of recording one request against a token's window.
pub struct RateLimitResult {
    /// Whether the request is within the limit.
    pub allowed: bool,
    /// Requests observed in the current window, including this one.
    pub count: usize,
}

/// Trait for sliding window storage backends.
#[allow(async_fn_in_trait)]
pub trait RateLimitStorage: Send + Sync {
    /// Record a request for `token` and compare the windowed count
    /// against `limit`. The request is recorded whether or not it is
    /// allowed.
    async fn check_and_consume(&self, token: &str, limit: u32) -> Result<RateLimitResult, StorageError>;
}

/// Errors that can occur in storage backends.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Internal storage error.
    #[error("Storage error: {0}")]
    Internal(String),
}
