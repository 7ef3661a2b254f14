//! Error types for rate limiting.

use crate::storage::StorageError;

/// Errors that can occur during rate limiting.
#[derive(Debug, thiserror::Error)]
pub enum RateLimitError {
    /// The token exceeded its request quota for the current window.
    #[error("Rate limit exceeded")]
    LimitExceeded,

    /// The caller supplied a limit of zero.
    #[error("Limit must be greater than zero")]
    InvalidLimit,

    /// The caller supplied an empty token.
    #[error("Token must not be empty")]
    EmptyToken,

    /// Storage backend error.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}
