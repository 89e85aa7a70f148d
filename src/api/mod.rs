//! API Module
//!
//! HTTP handlers and routing for the proxy endpoints.
//!
//! # Endpoints
//! - `GET /api/unsplash` - Photo search, listing, and download resolution
//! - `GET /proxy` - Generic byte proxy for cross-origin media fetches
//! - `GET /stats` - Cache and rate-limiter statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
