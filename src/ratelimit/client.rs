//! Client Key Resolution Module
//!
//! Derives the per-client key the rate limiter counts against. Behind a
//! reverse proxy the peer address is the proxy itself, so a forwarded
//! address header takes precedence when one is present.

use std::net::SocketAddr;

use axum::http::HeaderMap;

/// Fallback key when no address can be determined.
const UNKNOWN_CLIENT: &str = "unknown";

// == Resolve Client Key ==
/// Produces the rate-limit key for one request.
///
/// Takes the first comma-separated entry of `x-forwarded-for`, trimmed,
/// verbatim; the value is only ever used as a map key, never parsed as an
/// address. Falls back to the peer socket's IP, then to a fixed sentinel.
///
/// # Arguments
/// * `headers` - The request headers
/// * `peer` - The transport-level peer address, when known
pub fn resolve_client_key(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    if let Some(forwarded) = headers
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
    {
        if let Some(first) = forwarded.split(',').next() {
            return first.trim().to_string();
        }
    }

    match peer {
        Some(addr) => addr.ip().to_string(),
        None => UNKNOWN_CLIENT.to_string(),
    }
}
