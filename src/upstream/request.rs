//! Upstream Request Module
//!
//! Classifies an incoming query into exactly one upstream operation and
//! derives its URL and canonical cache signature. Classification is a
//! pure decision over the query parameters.

use url::form_urlencoded;

use crate::models::PhotoQuery;

/// Page size applied when the client does not send one.
const DEFAULT_PER_PAGE: u32 = 20;

/// Page number applied in search mode when the client does not send one.
const DEFAULT_PAGE: u32 = 1;

// == Upstream Request ==
/// One classified upstream operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpstreamRequest {
    /// Photo search by term
    Search {
        /// Search term, possibly empty
        term: String,
        /// Page size
        per_page: u32,
        /// Page number
        page: u32,
    },
    /// Resolution of a tracked download endpoint
    Download {
        /// Fully resolved endpoint URL
        endpoint: String,
    },
    /// Plain photo listing
    List {
        /// Page size
        per_page: u32,
    },
}

impl UpstreamRequest {
    // == Classification ==
    /// Classifies a query into its upstream operation.
    ///
    /// A `q` parameter selects search mode by presence alone, so an empty
    /// term still searches. Either download parameter selects download
    /// mode, with an explicit `download_location` taking precedence over
    /// an endpoint derived from `download_id`. Anything else lists.
    ///
    /// # Arguments
    /// * `query` - The parsed request parameters
    /// * `base` - Upstream API base URL, used to derive download endpoints
    pub fn from_query(query: &PhotoQuery, base: &str) -> Self {
        if let Some(term) = &query.q {
            return Self::Search {
                term: term.clone(),
                per_page: query.per_page.unwrap_or(DEFAULT_PER_PAGE),
                page: query.page.unwrap_or(DEFAULT_PAGE),
            };
        }

        if query.download_id.is_some() || query.download_location.is_some() {
            let endpoint = match &query.download_location {
                Some(location) => location.clone(),
                None => {
                    let id = query.download_id.as_deref().unwrap_or_default();
                    format!("{}/photos/{}/download", base, id)
                }
            };
            return Self::Download { endpoint };
        }

        Self::List {
            per_page: query.per_page.unwrap_or(DEFAULT_PER_PAGE),
        }
    }

    // == Upstream URL ==
    /// Builds the full upstream URL for this operation.
    ///
    /// Only the search term needs encoding; page parameters are numeric
    /// and the download endpoint is already a complete URL.
    pub fn url(&self, base: &str) -> String {
        match self {
            Self::Search {
                term,
                per_page,
                page,
            } => {
                let encoded: String = form_urlencoded::byte_serialize(term.as_bytes()).collect();
                format!(
                    "{}/search/photos?query={}&per_page={}&page={}",
                    base, encoded, per_page, page
                )
            }
            Self::Download { endpoint } => endpoint.clone(),
            Self::List { per_page } => format!("{}/photos?per_page={}", base, per_page),
        }
    }

    // == Cache Signature ==
    /// Derives the canonical cache signature for this operation.
    ///
    /// Two requests with the same discriminating parameters must map to
    /// the same signature; the cache's correctness rests on that.
    pub fn cache_key(&self) -> String {
        match self {
            Self::Search {
                term,
                per_page,
                page,
            } => format!("search:{}:{}:{}", term, per_page, page),
            Self::Download { endpoint } => format!("download:{}", endpoint),
            Self::List { per_page } => format!("list:{}", per_page),
        }
    }

    // == Error Label ==
    /// The stable error message used when the upstream rejects this
    /// operation.
    pub fn error_label(&self) -> &'static str {
        match self {
            Self::Search { .. } => "Unsplash search error",
            Self::Download { .. } => "Unsplash download endpoint error",
            Self::List { .. } => "Unsplash list error",
        }
    }
}
