//! Rate Limiter Module
//!
//! Fixed-window request counting per client key. The window resets in
//! place rather than sliding, so a burst straddling a window edge can
//! admit up to twice the per-window budget; that approximation is part
//! of the limiter's contract, not something to smooth over.

use std::collections::HashMap;

// == Rate Window ==
/// Per-client counting state.
#[derive(Debug, Clone)]
pub struct RateWindow {
    /// Start of the current window (Unix milliseconds)
    pub window_start: u64,
    /// Requests counted since `window_start`, including denied ones
    pub count: u32,
}

// == Admission ==
/// Outcome of asking the limiter about one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Admission {
    /// The request fits the current window
    Granted,
    /// The request exceeds the window budget
    Denied {
        /// Whole seconds until the window resets, rounded up
        retry_after_secs: u64,
    },
}

// == Rate Limiter ==
/// Per-client fixed-window rate limiter.
#[derive(Debug)]
pub struct RateLimiter {
    /// Counting state per client key
    windows: HashMap<String, RateWindow>,
    /// Requests allowed per window
    max_requests: u32,
    /// Window length in milliseconds
    window_ms: u64,
}

impl RateLimiter {
    // == Constructor ==
    /// Creates a new RateLimiter.
    ///
    /// # Arguments
    /// * `max_requests` - Requests allowed per client per window
    /// * `window_ms` - Window length in milliseconds
    pub fn new(max_requests: u32, window_ms: u64) -> Self {
        Self {
            windows: HashMap::new(),
            max_requests,
            window_ms,
        }
    }

    // == Admit ==
    /// Counts one request from `key` and decides whether it fits.
    ///
    /// The count is incremented before the threshold check, so the request
    /// that crosses the budget is itself denied and at most `max_requests`
    /// are ever granted per window. A window is reset only when strictly
    /// more than one window length has elapsed since it started.
    ///
    /// # Arguments
    /// * `key` - The client key being counted
    /// * `now_ms` - Current Unix timestamp in milliseconds
    pub fn admit(&mut self, key: &str, now_ms: u64) -> Admission {
        let window = self
            .windows
            .entry(key.to_string())
            .or_insert(RateWindow {
                window_start: now_ms,
                count: 0,
            });

        if now_ms.saturating_sub(window.window_start) > self.window_ms {
            window.window_start = now_ms;
            window.count = 0;
        }

        window.count += 1;

        if window.count > self.max_requests {
            let deadline = window.window_start + self.window_ms;
            let retry_after_secs = deadline.saturating_sub(now_ms).div_ceil(1000);
            Admission::Denied { retry_after_secs }
        } else {
            Admission::Granted
        }
    }

    // == Sweep Stale ==
    /// Drops windows that have outlived their length.
    ///
    /// A window strictly older than one window length can no longer deny
    /// anything; the next request from that client would reset it anyway.
    /// Returns the number of windows removed.
    ///
    /// # Arguments
    /// * `now_ms` - Current Unix timestamp in milliseconds
    pub fn sweep_stale(&mut self, now_ms: u64) -> usize {
        let before = self.windows.len();
        let window_ms = self.window_ms;
        self.windows
            .retain(|_, w| now_ms.saturating_sub(w.window_start) <= window_ms);
        before - self.windows.len()
    }

    // == Tracked Clients ==
    /// Returns the number of client keys currently on record.
    pub fn tracked_clients(&self) -> usize {
        self.windows.len()
    }
}
