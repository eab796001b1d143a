//! Handler for shortcode redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use url::Url;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a shortcode to its target URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// The visit is counted atomically in the store before the response is
/// built, then `302 Found` is returned with the stored URL in `Location`.
///
/// # Errors
///
/// Returns 404 Not Found if the shortcode doesn't exist.
pub async fn redirect_handler(
    Path(shortcode): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let record = state.url_service.record_visit(&shortcode).await?;

    metrics::counter!("shortener_redirects_total").increment(1);

    let location = location_header(&record.url)?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Builds a `Location` value, percent-encoding targets with non-ASCII text.
fn location_header(target: &str) -> Result<HeaderValue, AppError> {
    if let Ok(value) = HeaderValue::from_str(target) {
        return Ok(value);
    }

    Url::parse(target)
        .ok()
        .and_then(|url| HeaderValue::from_str(url.as_str()).ok())
        .ok_or_else(|| {
            AppError::internal(
                "Stored URL cannot be used as a redirect target",
                json!({ "url": target }),
            )
        })
}
