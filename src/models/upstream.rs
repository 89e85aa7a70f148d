//! Wire shapes of the Unsplash API
//!
//! Only the fields the proxy reads are modeled; everything else in the
//! upstream records is ignored during deserialization. Every field is
//! optional because the normalizer owns the fallback chains.

use serde::Deserialize;

/// One photo record as returned by the upstream API.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamPhoto {
    /// Upstream photo identifier
    pub id: Option<String>,
    /// Author-provided description
    pub description: Option<String>,
    /// Generated alt text, used when no description exists
    pub alt_description: Option<String>,
    /// Image URLs by size
    pub urls: Option<PhotoUrls>,
    /// Record of the photographer
    pub user: Option<PhotoUser>,
    /// Per-photo links, including the tracked download link
    pub links: Option<PhotoLinks>,
}

/// Image URLs by size, largest-first preference order.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoUrls {
    pub regular: Option<String>,
    pub full: Option<String>,
    pub small: Option<String>,
}

/// Photographer fields used for attribution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoUser {
    /// Display name
    pub name: Option<String>,
    /// Account handle, the attribution fallback
    pub username: Option<String>,
}

/// Per-photo links.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhotoLinks {
    /// Tracked download link
    pub download: Option<String>,
}

/// One page of a search response: `{"results": [...], ...}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchPage {
    /// Photo records in upstream order; absent or null counts as empty
    pub results: Option<Vec<UpstreamPhoto>>,
}

impl SearchPage {
    /// Consumes the page, yielding its records in upstream order.
    pub fn into_records(self) -> Vec<UpstreamPhoto> {
        self.results.unwrap_or_default()
    }
}
