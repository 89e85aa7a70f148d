//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults. The upstream credential is the only value without a default:
/// when absent the server still starts, but every proxied request fails with
/// a configuration error until the key is provided.
#[derive(Debug, Clone)]
pub struct Config {
    /// Secret Unsplash access key, attached server-side to upstream calls
    pub access_key: Option<String>,
    /// Base URL of the Unsplash API
    pub upstream_base_url: String,
    /// Timeout in seconds for a single upstream call
    pub upstream_timeout_secs: u64,
    /// TTL in seconds for cached upstream responses
    pub cache_ttl_secs: u64,
    /// Maximum number of entries the response cache can hold
    pub cache_max_entries: usize,
    /// Maximum requests per client per rate-limit window
    pub rate_limit_max: u32,
    /// Rate-limit window length in seconds
    pub rate_limit_window_secs: u64,
    /// Background sweep interval in seconds
    pub sweep_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `UNSPLASH_KEY` / `VITE_UNSPLASH_ACCESS_KEY` - Upstream credential;
    ///   the first non-empty one wins (no default)
    /// - `UNSPLASH_API_BASE` - Upstream base URL (default: `https://api.unsplash.com`)
    /// - `UPSTREAM_TIMEOUT_SECS` - Upstream call timeout (default: 30)
    /// - `CACHE_TTL_SECS` - Response cache TTL (default: 30)
    /// - `CACHE_MAX_ENTRIES` - Response cache capacity (default: 1000)
    /// - `RATE_LIMIT_MAX` - Requests per client per window (default: 120)
    /// - `RATE_LIMIT_WINDOW_SECS` - Rate-limit window length (default: 60)
    /// - `SWEEP_INTERVAL_SECS` - Background sweep frequency (default: 30)
    /// - `PORT` - HTTP server port (default: 4000)
    pub fn from_env() -> Self {
        Self {
            access_key: env::var("UNSPLASH_KEY")
                .ok()
                .filter(|v| !v.is_empty())
                .or_else(|| {
                    env::var("VITE_UNSPLASH_ACCESS_KEY")
                        .ok()
                        .filter(|v| !v.is_empty())
                }),
            upstream_base_url: env::var("UNSPLASH_API_BASE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "https://api.unsplash.com".to_string()),
            upstream_timeout_secs: env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            cache_ttl_secs: env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            rate_limit_max: env::var("RATE_LIMIT_MAX")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(120),
            rate_limit_window_secs: env::var("RATE_LIMIT_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4000),
        }
    }

    /// Rate-limit window length in milliseconds.
    pub fn rate_limit_window_ms(&self) -> u64 {
        self.rate_limit_window_secs * 1000
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: None,
            upstream_base_url: "https://api.unsplash.com".to_string(),
            upstream_timeout_secs: 30,
            cache_ttl_secs: 30,
            cache_max_entries: 1000,
            rate_limit_max: 120,
            rate_limit_window_secs: 60,
            sweep_interval_secs: 30,
            server_port: 4000,
        }
    }
}
