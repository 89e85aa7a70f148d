//! Wallaura Proxy - A server-side gateway for the Unsplash API
//!
//! Keeps the Unsplash access key off the browser while adding response
//! caching and per-client rate limiting in front of the photo API.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod ratelimit;
mod tasks;
mod upstream;

use std::net::SocketAddr;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use tasks::spawn_sweeper_task;

/// Main entry point for the Wallaura proxy server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the response cache, rate limiter, and upstream client
/// 4. Start the background sweep task
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wallaura_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Wallaura Proxy Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_max_entries={}, cache_ttl={}s, rate_limit={}/{}s, port={}, sweep_interval={}s",
        config.cache_max_entries,
        config.cache_ttl_secs,
        config.rate_limit_max,
        config.rate_limit_window_secs,
        config.server_port,
        config.sweep_interval_secs
    );
    if config.access_key.is_none() {
        warn!("No Unsplash access key configured; photo requests will fail until UNSPLASH_KEY is set");
    }

    // Create application state with cache, limiter, and upstream client
    let state = AppState::from_config(&config)?;
    info!("Application state initialized");

    // Start background sweep task
    let sweep_handle =
        spawn_sweeper_task(state.cache.clone(), state.limiter.clone(), config.sweep_interval_secs);
    info!("Background sweep task started");

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown; ConnectInfo carries the peer
    // address into handlers for rate-limit key resolution
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal(sweep_handle))
    .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweep task and allows graceful shutdown.
async fn shutdown_signal(sweep_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the sweep task
    sweep_handle.abort();
    warn!("Sweep task aborted");
}
