//! Background Sweep Task
//!
//! Background task that periodically removes expired cache entries and
//! idle rate-limit windows.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::{current_timestamp_ms, ResponseCache};
use crate::ratelimit::RateLimiter;

/// Spawns a background task that periodically sweeps the cache and the
/// rate limiter.
///
/// The task runs in an infinite loop, sleeping for the specified interval
/// between sweep runs. Each run acquires a write lock on the cache to drop
/// expired entries, then a write lock on the rate limiter to drop client
/// windows older than one window length. Both structures also evict lazily
/// on access; the sweep only bounds memory for keys that are never touched
/// again.
///
/// # Arguments
/// * `cache` - Shared reference to the response cache
/// * `limiter` - Shared reference to the rate limiter
/// * `sweep_interval_secs` - Interval in seconds between sweep runs
///
/// # Returns
/// A JoinHandle for the spawned task, which can be used to abort the task
/// during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(RwLock::new(ResponseCache::new(1000, 30)));
/// let limiter = Arc::new(RwLock::new(RateLimiter::new(120, 60_000)));
/// let sweep_handle = spawn_sweeper_task(cache.clone(), limiter.clone(), 30);
/// // Later, during shutdown:
/// sweep_handle.abort();
/// ```
pub fn spawn_sweeper_task(
    cache: Arc<RwLock<ResponseCache>>,
    limiter: Arc<RwLock<RateLimiter>>,
    sweep_interval_secs: u64,
) -> JoinHandle<()> {
    let interval = Duration::from_secs(sweep_interval_secs);

    tokio::spawn(async move {
        info!(
            "Starting sweep task with interval of {} seconds",
            sweep_interval_secs
        );

        loop {
            // Sleep for the configured interval
            tokio::time::sleep(interval).await;

            // Acquire write locks one at a time to keep hold times short
            let expired = {
                let mut cache_guard = cache.write().await;
                cache_guard.purge_expired()
            };

            let swept = {
                let mut limiter_guard = limiter.write().await;
                limiter_guard.sweep_stale(current_timestamp_ms())
            };

            // Log sweep statistics
            if expired > 0 || swept > 0 {
                info!(
                    "Sweep: removed {} expired cache entries and {} idle client windows",
                    expired, swept
                );
            } else {
                debug!("Sweep: nothing to remove");
            }
        }
    })
}
