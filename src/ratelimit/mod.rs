//! Rate Limiting Module
//!
//! Provides per-client request budgeting: client key resolution from
//! request metadata and a fixed-window counter keyed by that value.

mod client;
mod limiter;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use client::resolve_client_key;
pub use limiter::{Admission, RateLimiter, RateWindow};
