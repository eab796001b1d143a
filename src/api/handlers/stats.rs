//! Handler for shortcode statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns redirect statistics for a shortcode.
///
/// # Endpoint
///
/// `GET /{shortcode}/stats`
///
/// # Response
///
/// ```json
/// {
///   "created": "2023-05-25T12:00:00Z",
///   "last_redirect": "2023-05-25T13:30:00Z",
///   "redirect_count": 10
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(shortcode): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.url_service.stats(&shortcode).await?;

    Ok(Json(record.into()))
}
