//! API Routes
//!
//! Configures the Axum router with all proxy endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, method_not_allowed, proxy_fetch_handler, stats_handler, unsplash_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/unsplash` - Photo search, listing, and download resolution
/// - `GET /proxy` - Generic byte proxy for cross-origin media fetches
/// - `GET /stats` - Cache and rate-limiter statistics
/// - `GET /health` - Health check endpoint
///
/// The two proxy paths are GET-only; other methods land on a fallback
/// that answers with a method-not-allowed error before any rate-limit or
/// cache interaction.
///
/// # Middleware
/// - CORS: Allows any origin (the proxy exists to serve browser clients)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route(
            "/api/unsplash",
            get(unsplash_handler).fallback(method_not_allowed),
        )
        .route(
            "/proxy",
            get(proxy_fetch_handler).fallback(method_not_allowed),
        )
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
