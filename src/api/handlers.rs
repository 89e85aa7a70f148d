//! API Handlers
//!
//! HTTP request handlers for the proxy endpoints. The photo endpoint runs
//! the full pipeline: resolve the client key, count the request against
//! its window, require the credential, classify, then answer from cache
//! or forward upstream.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::RwLock;

use axum::{
    body::Body,
    extract::{ConnectInfo, Query, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};
use tracing::{debug, warn};

use crate::cache::{current_timestamp_ms, ResponseCache};
use crate::config::Config;
use crate::error::{ProxyError, Result};
use crate::models::{HealthResponse, PhotoQuery, ProxyFetchQuery, StatsResponse};
use crate::ratelimit::{resolve_client_key, Admission, RateLimiter};
use crate::upstream::{UpstreamClient, UpstreamRequest};

/// Application state shared across all handlers.
///
/// The cache and limiter are behind RwLocks because handlers mutate them;
/// the upstream client is internally shareable and cloned freely.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe response cache
    pub cache: Arc<RwLock<ResponseCache>>,
    /// Thread-safe rate limiter
    pub limiter: Arc<RwLock<RateLimiter>>,
    /// Client for the photo API
    pub upstream: UpstreamClient,
    /// Client for the byte proxy; no overall timeout so large media
    /// bodies can finish streaming
    pub fetcher: reqwest::Client,
}

impl AppState {
    /// Creates the application state from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::new(config.cache_max_entries, config.cache_ttl_secs);
        let limiter = RateLimiter::new(config.rate_limit_max, config.rate_limit_window_ms());

        Ok(Self {
            cache: Arc::new(RwLock::new(cache)),
            limiter: Arc::new(RwLock::new(limiter)),
            upstream: UpstreamClient::from_config(config)?,
            fetcher: reqwest::Client::new(),
        })
    }
}

/// Handler for GET /api/unsplash
///
/// Classifies the query into a search, download resolution, or plain
/// listing, and replays a cached payload when one is still fresh. Every
/// request is counted against its client's window first, including ones
/// that end up served from cache.
pub async fn unsplash_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    peer: Option<ConnectInfo<SocketAddr>>,
    Query(query): Query<PhotoQuery>,
) -> Result<Response> {
    let client_key = resolve_client_key(&headers, peer.map(|ConnectInfo(addr)| addr));

    let admission = {
        let mut limiter = state.limiter.write().await;
        limiter.admit(&client_key, current_timestamp_ms())
    };
    if let Admission::Denied { retry_after_secs } = admission {
        warn!("Rate limit exceeded for client {}", client_key);
        return Err(ProxyError::RateLimited { retry_after_secs });
    }

    // Without a credential even cacheable requests fail
    state.upstream.credential()?;

    let request = UpstreamRequest::from_query(&query, state.upstream.base_url());
    let cache_key = request.cache_key();

    let cached = {
        let mut cache = state.cache.write().await;
        cache.get(&cache_key)
    };
    if let Some(payload) = cached {
        debug!("Cache hit for {}", cache_key);
        return Ok(json_payload(payload));
    }

    debug!("Cache miss for {}", cache_key);
    let payload = state.upstream.fetch(&request).await?;

    {
        let mut cache = state.cache.write().await;
        cache.insert(cache_key, payload.clone());
    }

    Ok(json_payload(payload))
}

/// Renders a stored payload as a JSON response, byte for byte.
fn json_payload(payload: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], payload).into_response()
}

/// Handler for GET /proxy
///
/// Fetches an arbitrary URL and streams the body back with a copied
/// content type, sidestepping cross-origin restrictions on media
/// downloads. No credential, cache, or rate limit is involved.
pub async fn proxy_fetch_handler(
    State(state): State<AppState>,
    Query(query): Query<ProxyFetchQuery>,
) -> Result<Response> {
    let url = query
        .url
        .filter(|value| !value.is_empty())
        .ok_or(ProxyError::MissingUrlParam)?;

    debug!("Byte proxy fetching {}", url);
    let response = state.fetcher.get(&url).send().await?;

    let status = response.status();
    if !status.is_success() {
        // Mirror the upstream status and body as-is
        let body = response.text().await.unwrap_or_default();
        return Ok((status, body).into_response());
    }

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("application/octet-stream")
        .to_string();

    let headers = [
        (header::CONTENT_TYPE, content_type),
        (
            header::CACHE_CONTROL,
            "public, max-age=31536000".to_string(),
        ),
    ];

    Ok((headers, Body::from_stream(response.bytes_stream())).into_response())
}

/// Handler for GET /stats
///
/// Returns cache counters and the number of tracked rate-limit clients.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = {
        let cache = state.cache.read().await;
        cache.stats()
    };
    let tracked_clients = {
        let limiter = state.limiter.read().await;
        limiter.tracked_clients()
    };

    Json(StatsResponse {
        entries: stats.total_entries,
        hits: stats.hits,
        misses: stats.misses,
        evictions: stats.evictions,
        expirations: stats.expirations,
        hit_rate: stats.hit_rate(),
        tracked_clients,
    })
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Fallback for requests reaching a known path with the wrong method.
pub async fn method_not_allowed() -> ProxyError {
    ProxyError::MethodNotAllowed
}
