//! API route configuration.

use crate::api::handlers::{health_handler, redirect_handler, shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All public routes.
///
/// # Endpoints
///
/// - `POST /shorten`             - Create a short URL
/// - `GET  /health`              - Health check
/// - `GET  /{shortcode}`         - Redirect to the target URL (302)
/// - `GET  /{shortcode}/stats`   - Redirect statistics
///
/// Static segments take priority over `/{shortcode}`, which is why `health`
/// is a reserved shortcode.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/health", get(health_handler))
        .route("/{shortcode}", get(redirect_handler))
        .route("/{shortcode}/stats", get(stats_handler))
}
