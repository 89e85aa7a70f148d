//! Error types for the proxy
//!
//! Provides unified error handling using thiserror. Every failure is
//! converted to an HTTP status plus a JSON error body at the handler
//! boundary; nothing is retried server-side.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::models::ErrorBody;

// == Proxy Error Enum ==
/// Unified error type for the proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// No upstream credential configured; surfaced to every request until fixed
    #[error("Missing server-side UNSPLASH_KEY")]
    MissingKey,

    /// Client exceeded its per-window request budget
    #[error("Rate limit exceeded")]
    RateLimited {
        /// Seconds until the client's window resets
        retry_after_secs: u64,
    },

    /// Upstream returned a non-success status; mirrored back to the client
    #[error("{label}")]
    Upstream {
        /// HTTP status received from the upstream API
        status: u16,
        /// Operation-specific error message
        label: &'static str,
        /// Best-effort upstream response body (empty when unreadable)
        detail: String,
    },

    /// Network failure reaching the upstream, or a malformed response body
    #[error("proxy error")]
    Transport(#[from] reqwest::Error),

    /// Upstream body could not be parsed as JSON, or a response payload
    /// could not be rendered
    #[error("proxy error")]
    Json(#[from] serde_json::Error),

    /// Request used an HTTP method other than GET
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Byte proxy called without its `url` query parameter
    #[error("Missing url param")]
    MissingUrlParam,
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::MissingKey => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            // Pass the upstream status through; fall back to 502 if the
            // upstream produced something http does not recognize
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::Transport(err) => {
                error!("upstream transport failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProxyError::Json(err) => {
                error!("json handling failure: {err}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::MissingUrlParam => StatusCode::BAD_REQUEST,
        };

        let body = match &self {
            ProxyError::Upstream { detail, .. } => {
                ErrorBody::with_detail(self.to_string(), detail.clone())
            }
            _ => ErrorBody::new(self.to_string()),
        };

        let mut response = (status, Json(body)).into_response();
        if let ProxyError::RateLimited { retry_after_secs } = self {
            response
                .headers_mut()
                .insert(header::RETRY_AFTER, retry_after_secs.into());
        }
        response
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;
