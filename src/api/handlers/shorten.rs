//! Handler for the shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "shortcode": "abc123" }
/// ```
///
/// `shortcode` is optional; a random one is generated when it is absent.
/// A provided shortcode is checked before `url`, so 412 and 409 take
/// precedence over a missing or malformed URL.
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "url": "https://example.com", "shortcode": "abc123" }
/// ```
///
/// # Errors
///
/// - 400 if `url` is missing or invalid, or the body is not JSON
/// - 412 if the shortcode is not 6 characters of `a-z`, `0-9`, `_`
/// - 409 if the shortcode is already in use
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let record = state
        .url_service
        .shorten(payload.url, payload.shortcode)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            url: record.url,
            shortcode: record.shortcode,
        }),
    ))
}
