//! Upstream Client Module
//!
//! Performs the authenticated HTTP call to the photo API and renders the
//! outcome into the payload the proxy caches and replays. Calls are never
//! retried; a failure surfaces immediately to the request that caused it.

use std::time::Duration;

use reqwest::{header, Client};
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{PhotoListResponse, SearchPage, UpstreamPhoto};
use crate::upstream::UpstreamRequest;

// == Upstream Client ==
/// HTTP client for the photo API.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    /// Shared HTTP client carrying the upstream timeout
    http: Client,
    /// Upstream API base URL
    base_url: String,
    /// Secret credential; absent means the server is misconfigured
    access_key: Option<String>,
}

impl UpstreamClient {
    // == Constructor ==
    /// Builds the client from configuration.
    ///
    /// The timeout bounds each upstream call so a hung request cannot
    /// occupy its task forever.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.clone(),
            access_key: config.access_key.clone(),
        })
    }

    // == Credential ==
    /// Returns the configured credential, or the configuration error every
    /// request gets until one is provided.
    pub fn credential(&self) -> Result<&str> {
        self.access_key.as_deref().ok_or(ProxyError::MissingKey)
    }

    // == Base URL ==
    /// The upstream API base URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == Fetch ==
    /// Executes one classified operation against the upstream API.
    ///
    /// On success the body is parsed and rendered into the replayable
    /// payload. A non-success status is mirrored back with best-effort
    /// detail text; an unreadable error body yields empty detail rather
    /// than masking the primary failure.
    pub async fn fetch(&self, request: &UpstreamRequest) -> Result<String> {
        let credential = self.credential()?;
        let url = request.url(&self.base_url);
        debug!("Forwarding to upstream: GET {}", url);

        let response = self
            .http
            .get(&url)
            .header(header::AUTHORIZATION, format!("Client-ID {}", credential))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Upstream returned {} for {}", status, url);
            let detail = response.text().await.unwrap_or_default();
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                label: request.error_label(),
                detail,
            });
        }

        let body = response.text().await?;
        render_payload(request, &body)
    }
}

// == Payload Rendering ==
/// Parses a successful upstream body and renders the response payload.
///
/// Search and list bodies are normalized into the stable photo shape; a
/// download resolution passes through unchanged apart from re-rendering.
fn render_payload(request: &UpstreamRequest, body: &str) -> Result<String> {
    let payload = match request {
        UpstreamRequest::Search { .. } => {
            let page: SearchPage = serde_json::from_str(body)?;
            serde_json::to_string(&PhotoListResponse::from_records(page.into_records()))?
        }
        UpstreamRequest::List { .. } => {
            let records: Vec<UpstreamPhoto> = serde_json::from_str(body)?;
            serde_json::to_string(&PhotoListResponse::from_records(records))?
        }
        UpstreamRequest::Download { .. } => {
            let resolution: serde_json::Value = serde_json::from_str(body)?;
            serde_json::to_string(&resolution)?
        }
    };

    Ok(payload)
}
