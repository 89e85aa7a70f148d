//! Wallaura Proxy - A server-side gateway for the Unsplash API
//!
//! Keeps the Unsplash access key off the browser while adding response
//! caching and per-client rate limiting in front of the photo API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod ratelimit;
pub mod tasks;
pub mod upstream;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_sweeper_task;
