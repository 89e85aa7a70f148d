//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies, including the
//! normalized photo shape the gallery frontend consumes.

use serde::Serialize;

use super::upstream::UpstreamPhoto;

/// A photo record reduced to the fields the gallery renders.
///
/// Built from an [`UpstreamPhoto`] by walking fallback chains; fields with
/// no usable candidate are omitted from the serialized body entirely.
#[derive(Debug, Clone, Serialize)]
pub struct NormalizedPhoto {
    /// Upstream photo identifier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Description, alt text, or the literal "Untitled"
    pub title: String,
    /// Display URL: regular, then full, then small
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    /// Photographer name, falling back to the account handle
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// Download link, falling back to the full-size image URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<String>,
}

/// Picks the first candidate holding a non-empty string.
fn first_present<'a>(candidates: impl IntoIterator<Item = Option<&'a String>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .cloned()
}

impl From<UpstreamPhoto> for NormalizedPhoto {
    fn from(photo: UpstreamPhoto) -> Self {
        let urls = photo.urls.unwrap_or_default();
        let user = photo.user.unwrap_or_default();
        let links = photo.links.unwrap_or_default();

        let title = first_present([photo.description.as_ref(), photo.alt_description.as_ref()])
            .unwrap_or_else(|| "Untitled".to_string());
        let src = first_present([urls.regular.as_ref(), urls.full.as_ref(), urls.small.as_ref()]);
        let author = first_present([user.name.as_ref(), user.username.as_ref()]);
        let download = first_present([links.download.as_ref(), urls.full.as_ref()]);

        Self {
            id: photo.id.filter(|s| !s.is_empty()),
            title,
            src,
            author,
            download,
        }
    }
}

/// Response body for photo listings: `{"results": [...]}`.
#[derive(Debug, Clone, Serialize)]
pub struct PhotoListResponse {
    /// Normalized photos in upstream order
    pub results: Vec<NormalizedPhoto>,
}

impl PhotoListResponse {
    /// Normalizes a batch of upstream records, preserving their order.
    pub fn from_records(records: Vec<UpstreamPhoto>) -> Self {
        Self {
            results: records.into_iter().map(NormalizedPhoto::from).collect(),
        }
    }
}

/// Response body for all error outcomes.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Stable, user-facing error message
    pub error: String,
    /// Upstream-provided detail, present only for upstream failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorBody {
    /// Creates an error body with only the stable message.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: None,
        }
    }

    /// Creates an error body carrying upstream detail text.
    pub fn with_detail(error: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            detail: Some(detail.into()),
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of live cache entries
    pub entries: usize,
    /// Cache hits since startup
    pub hits: u64,
    /// Cache misses since startup
    pub misses: u64,
    /// Entries evicted by the capacity bound
    pub evictions: u64,
    /// Entries removed after their TTL lapsed
    pub expirations: u64,
    /// Cache hit rate in [0.0, 1.0]
    pub hit_rate: f64,
    /// Clients with a rate-limit window on record
    pub tracked_clients: usize,
}

/// Response body for the health check endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
