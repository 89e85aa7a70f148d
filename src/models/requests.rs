//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query parameters accepted by the photo proxy endpoint (GET /api/unsplash).
///
/// The parameters select one of three upstream operations:
/// - `q` present (even empty) selects a search,
/// - otherwise `download_id` / `download_location` select download resolution,
/// - otherwise a plain listing is requested.
///
/// `per_page` and `page` must be numeric when given; a non-numeric value is
/// rejected at deserialization time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoQuery {
    /// Search term; presence, not content, switches to search mode
    pub q: Option<String>,
    /// Page size for search and listing (default 20)
    pub per_page: Option<u32>,
    /// Page number for search (default 1)
    pub page: Option<u32>,
    /// Photo identifier used to derive the download endpoint
    pub download_id: Option<String>,
    /// Explicit download endpoint; wins over `download_id` when both are given
    pub download_location: Option<String>,
}

/// Query parameters accepted by the byte proxy endpoint (GET /proxy).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProxyFetchQuery {
    /// Absolute URL to fetch and stream back
    pub url: Option<String>,
}
