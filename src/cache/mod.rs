//! Cache Module
//!
//! Provides the in-memory response cache: TTL expiration, a capacity
//! bound with LRU eviction, and hit/miss statistics.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use lru::LruQueue;
pub use stats::CacheStats;
pub use store::ResponseCache;
