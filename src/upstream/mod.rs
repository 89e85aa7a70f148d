//! Upstream Module
//!
//! Request classification and the authenticated HTTP client for the
//! photo API.

mod client;
mod request;

// Re-export public types
pub use client::UpstreamClient;
pub use request::UpstreamRequest;
