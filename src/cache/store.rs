//! Response Cache Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and a
//! single shared TTL. Keys are canonical request signatures; payloads are
//! rendered response bodies replayed verbatim on a hit.

use std::collections::HashMap;

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, LruQueue};

// == Response Cache ==
/// TTL response cache with a hard capacity bound.
#[derive(Debug)]
pub struct ResponseCache {
    /// Signature-to-payload storage
    entries: HashMap<String, CacheEntry>,
    /// LRU access tracker
    lru: LruQueue,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed; zero disables caching
    max_entries: usize,
    /// Shared TTL applied to every entry, in milliseconds
    ttl_ms: u64,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache.
    ///
    /// # Arguments
    /// * `max_entries` - Capacity bound; the least recently used entry is
    ///   evicted when a new signature would exceed it
    /// * `ttl_secs` - TTL in seconds applied to every entry
    pub fn new(max_entries: usize, ttl_secs: u64) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruQueue::new(),
            stats: CacheStats::new(),
            max_entries,
            ttl_ms: ttl_secs * 1000,
        }
    }

    // == Get ==
    /// Looks up the payload stored under a request signature.
    ///
    /// A stale entry is dropped on sight and the lookup counts as a miss,
    /// so callers never see anything older than the TTL.
    ///
    /// # Arguments
    /// * `key` - The canonical request signature
    pub fn get(&mut self, key: &str) -> Option<String> {
        let now = current_timestamp_ms();

        if let Some(entry) = self.entries.get(key) {
            if entry.is_stale(self.ttl_ms, now) {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_total_entries(self.entries.len());
                return None;
            }

            let payload = entry.payload.clone();
            self.stats.record_hit();
            self.lru.touch(key);
            Some(payload)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Insert ==
    /// Stores a payload under a request signature.
    ///
    /// An existing entry for the same signature is overwritten and its TTL
    /// restarts. A new signature arriving at capacity evicts the least
    /// recently used entry first.
    ///
    /// # Arguments
    /// * `key` - The canonical request signature
    /// * `payload` - The rendered response body to replay
    pub fn insert(&mut self, key: String, payload: String) {
        if self.max_entries == 0 {
            return;
        }

        let is_overwrite = self.entries.contains_key(&key);

        if !is_overwrite && self.entries.len() >= self.max_entries {
            // entries and lru move in lockstep, so a full cache always
            // has an eviction candidate
            if let Some(evicted_key) = self.lru.pop_lru() {
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(key.clone(), CacheEntry::new(payload));
        self.lru.touch(&key);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Purge Expired ==
    /// Removes every stale entry from the cache.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&mut self) -> usize {
        let now = current_timestamp_ms();
        let stale_keys: Vec<String> = self
            .entries
            .iter()
            .filter(|(_, entry)| entry.is_stale(self.ttl_ms, now))
            .map(|(key, _)| key.clone())
            .collect();

        let count = stale_keys.len();

        for key in stale_keys {
            self.entries.remove(&key);
            self.lru.remove(&key);
            self.stats.record_expiration();
        }

        self.stats.set_total_entries(self.entries.len());
        count
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    #[test]
    fn test_cache_new() {
        let cache = ResponseCache::new(100, 30);
        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = ResponseCache::new(100, 30);

        cache.insert("list:20".to_string(), "{\"results\":[]}".to_string());
        let payload = cache.get("list:20");

        assert_eq!(payload.as_deref(), Some("{\"results\":[]}"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_unknown_signature() {
        let mut cache = ResponseCache::new(100, 30);
        assert!(cache.get("search:cats:20:1").is_none());
    }

    #[test]
    fn test_overwrite_replaces_payload() {
        let mut cache = ResponseCache::new(100, 30);

        cache.insert("list:20".to_string(), "first".to_string());
        cache.insert("list:20".to_string(), "second".to_string());

        assert_eq!(cache.get("list:20").as_deref(), Some("second"));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_entries_expire_after_ttl() {
        let mut cache = ResponseCache::new(100, 1);

        cache.insert("list:20".to_string(), "payload".to_string());
        assert!(cache.get("list:20").is_some());

        sleep(Duration::from_millis(1100));

        assert!(cache.get("list:20").is_none());
        assert_eq!(cache.len(), 0);

        let stats = cache.stats();
        assert_eq!(stats.expirations, 1);
    }

    #[test]
    fn test_overwrite_restarts_ttl() {
        let mut cache = ResponseCache::new(100, 1);

        cache.insert("list:20".to_string(), "first".to_string());
        sleep(Duration::from_millis(600));

        cache.insert("list:20".to_string(), "second".to_string());
        sleep(Duration::from_millis(600));

        // 1.2s after the first insert, but only 0.6s after the overwrite
        assert_eq!(cache.get("list:20").as_deref(), Some("second"));
    }

    #[test]
    fn test_capacity_evicts_least_recently_used() {
        let mut cache = ResponseCache::new(3, 30);

        cache.insert("a".to_string(), "1".to_string());
        cache.insert("b".to_string(), "2".to_string());
        cache.insert("c".to_string(), "3".to_string());

        cache.insert("d".to_string(), "4".to_string());

        assert_eq!(cache.len(), 3);
        assert!(cache.get("a").is_none());
        assert!(cache.get("b").is_some());
        assert!(cache.get("c").is_some());
        assert!(cache.get("d").is_some());

        let stats = cache.stats();
        assert_eq!(stats.evictions, 1);
    }

    #[test]
    fn test_get_refreshes_recency() {
        let mut cache = ResponseCache::new(3, 30);

        cache.insert("a".to_string(), "1".to_string());
        cache.insert("b".to_string(), "2".to_string());
        cache.insert("c".to_string(), "3".to_string());

        // Touch "a" so "b" becomes the eviction candidate
        cache.get("a");
        cache.insert("d".to_string(), "4".to_string());

        assert!(cache.get("a").is_some());
        assert!(cache.get("b").is_none());
    }

    #[test]
    fn test_zero_capacity_disables_caching() {
        let mut cache = ResponseCache::new(0, 30);

        cache.insert("list:20".to_string(), "payload".to_string());

        assert_eq!(cache.len(), 0);
        assert!(cache.get("list:20").is_none());
    }

    #[test]
    fn test_purge_expired_removes_only_stale_entries() {
        let mut cache = ResponseCache::new(100, 1);

        cache.insert("old".to_string(), "1".to_string());
        sleep(Duration::from_millis(1100));
        cache.insert("fresh".to_string(), "2".to_string());

        let removed = cache.purge_expired();

        assert_eq!(removed, 1);
        assert_eq!(cache.len(), 1);
        assert!(cache.get("fresh").is_some());

        let stats = cache.stats();
        assert_eq!(stats.expirations, 1);
    }

    #[test]
    fn test_stats_track_hits_and_misses() {
        let mut cache = ResponseCache::new(100, 30);

        cache.insert("list:20".to_string(), "payload".to_string());
        cache.get("list:20");
        cache.get("absent");

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.total_entries, 1);
    }
}
