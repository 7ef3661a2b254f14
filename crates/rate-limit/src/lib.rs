//! Sliding window rate limiting.
//!
//! This crate tracks recent request instants per client token and rejects
//! requests once a per-window quota is exceeded:
//! - One limiter per policy, constructed from configuration
//! - Per-token sliding window logs, pruned on every check
//! - Idle and capacity eviction delegated to a bounded LRU cache
//!
//! Storage is pluggable; an in-memory backend ships by default.

#![deny(missing_docs)]

mod error;
mod limiter;
mod storage;

pub use error::RateLimitError;
pub use limiter::RateLimiter;
pub use storage::{InMemoryStorage, RateLimitResult, RateLimitStorage, StorageError};
