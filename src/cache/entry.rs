//! Cache Entry Module
//!
//! Defines the structure for individual cached response payloads.

use std::time::{SystemTime, UNIX_EPOCH};

// == Cache Entry ==
/// A stored response payload with its storage timestamp.
///
/// Entries do not carry their own TTL; the cache applies one shared TTL
/// to every entry at lookup time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The rendered response body to replay
    pub payload: String,
    /// Storage timestamp (Unix milliseconds)
    pub stored_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(payload: String) -> Self {
        Self {
            payload,
            stored_at: current_timestamp_ms(),
        }
    }

    // == Is Stale ==
    /// Checks whether the entry has outlived the given TTL.
    ///
    /// Boundary condition: an entry is stale only when strictly more than
    /// `ttl_ms` has elapsed since it was stored, so a lookup at exactly
    /// the TTL boundary still hits.
    ///
    /// # Arguments
    /// * `ttl_ms` - Shared TTL in milliseconds
    /// * `now_ms` - Current Unix timestamp in milliseconds
    pub fn is_stale(&self, ttl_ms: u64, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.stored_at) > ttl_ms
    }

    // == Age ==
    /// Returns the entry's age in milliseconds.
    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.stored_at)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
