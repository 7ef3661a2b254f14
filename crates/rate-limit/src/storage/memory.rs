//! In-memory sliding window storage backed by a bounded LRU cache.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use mini_moka::sync::Cache;
use tokio::sync::Mutex;
use tokio::time::Instant;

use super::{RateLimitResult, RateLimitStorage, StorageError};

/// Per-token log of request instants observed within the current window.
type WindowLog = Arc<Mutex<Vec<Instant>>>;

/// In-memory sliding window storage implementation.
///
/// Each token maps to a log of request instants. The cache is bounded to
/// the configured number of distinct tokens and drops entries that stay
/// idle for a full window; the component never deletes entries itself.
pub struct InMemoryStorage {
    /// Window logs keyed by token.
    windows: Cache<String, WindowLog>,
    /// Sliding window length.
    interval: Duration,
    /// Lock to prevent thundering herd when creating window logs.
    /// Maps a token to a lock for that specific token.
    creation_locks: DashMap<String, Arc<Mutex<()>>>,
}

impl InMemoryStorage {
    /// Create storage tracking at most `unique_tokens` distinct tokens
    /// over a sliding window of `interval`.
    pub fn new(interval: Duration, unique_tokens: u64) -> Self {
        let windows = Cache::builder()
            .max_capacity(unique_tokens)
            .time_to_idle(interval)
            .build();

        Self {
            windows,
            interval,
            creation_locks: DashMap::new(),
        }
    }

    /// Get the window log for `token`, creating it on first sight.
    async fn window_log(&self, token: &str) -> WindowLog {
        if let Some(log) = self.windows.get(&token.to_string()) {
            return log;
        }

        // Not found, so we need to create one. Take a lock for this specific
        // token so two tasks cannot race to insert separate logs and lose
        // each other's requests.
        let creation_lock = self
            .creation_locks
            .entry(token.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let _guard = creation_lock.lock().await;

        // Double-check if another task created it while we were waiting.
        if let Some(log) = self.windows.get(&token.to_string()) {
            drop(_guard);
            self.creation_locks.remove(token);
            return log;
        }

        let log: WindowLog = Arc::new(Mutex::new(Vec::new()));
        self.windows.insert(token.to_string(), log.clone());

        drop(_guard);
        self.creation_locks.remove(token);

        log
    }
}

impl RateLimitStorage for InMemoryStorage {
    async fn check_and_consume(&self, token: &str, limit: u32) -> Result<RateLimitResult, StorageError> {
        let log = self.window_log(token).await;

        // The per-token lock makes the read-filter-append sequence atomic
        // with respect to other checks for the same token.
        let mut instants = log.lock().await;

        let now = Instant::now();
        instants.retain(|instant| now.duration_since(*instant) < self.interval);
        instants.push(now);

        let count = instants.len();
        drop(instants);

        // Write back so the entry's recency reflects this request.
        self.windows.insert(token.to_string(), log);

        let allowed = count <= limit as usize;

        if allowed {
            log::debug!("Request allowed for token '{token}' - {count} requests within limit {limit}");
        } else {
            log::debug!("Request blocked for token '{token}' - {count} requests in window exceeds limit {limit}");
        }

        Ok(RateLimitResult { allowed, count })
    }
}
