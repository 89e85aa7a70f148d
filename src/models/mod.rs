//! Request and Response models for the proxy API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP request and response bodies, plus the
//! wire shapes of the upstream photo API.

pub mod requests;
pub mod responses;
pub mod upstream;

// Re-export commonly used types
pub use requests::{PhotoQuery, ProxyFetchQuery};
pub use responses::{
    ErrorBody, HealthResponse, NormalizedPhoto, PhotoListResponse, StatsResponse,
};
pub use upstream::{SearchPage, UpstreamPhoto};
