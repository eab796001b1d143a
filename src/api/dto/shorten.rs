//! DTOs for the shortening endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// Both fields are optional at the JSON level so that a missing `url` is
/// reported as `missing_url` rather than a generic body rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The redirect target.
    #[validate(length(max = 2048, message = "URL is too long"))]
    pub url: Option<String>,

    /// Optional custom shortcode; generated when absent or empty.
    pub shortcode: Option<String>,
}

/// Created short URL.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub url: String,
    pub shortcode: String,
}
