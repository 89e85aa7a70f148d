//! LRU Queue Module
//!
//! Tracks cache-key recency so the store can evict the least recently
//! used signature when it reaches its capacity bound.

use std::collections::VecDeque;

// == LRU Queue ==
/// Recency order over cache keys.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// The key space is small (one key per distinct request signature), so
/// linear scans on touch and remove are acceptable.
#[derive(Debug, Default)]
pub struct LruQueue {
    /// Keys ordered by last access
    order: VecDeque<String>,
}

impl LruQueue {
    // == Constructor ==
    /// Creates a new empty queue.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as just used, moving it to the front.
    pub fn touch(&mut self, key: &str) {
        self.remove(key);
        self.order.push_front(key.to_string());
    }

    // == Remove ==
    /// Drops a key from the queue. Unknown keys are ignored.
    pub fn remove(&mut self, key: &str) {
        self.order.retain(|k| k != key);
    }

    // == Pop LRU ==
    /// Removes and returns the least recently used key, or None when empty.
    pub fn pop_lru(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
