//! Application error type and its HTTP mapping.
//!
//! Every fallible operation in the service returns [`AppError`]. Handlers
//! propagate it with `?` and Axum turns it into a JSON error response via
//! [`IntoResponse`].
//!
//! # Response Format
//!
//! ```json
//! {
//!   "error": {
//!     "code": "shortcode_in_use",
//!     "message": "Shortcode is already in use",
//!     "details": { "shortcode": "abc123" }
//!   }
//! }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors surfaced by the shortener.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The create request carried no `url`.
    #[error("URL is required")]
    MissingUrl,

    /// Malformed input (bad URL, unparsable body).
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// The requested shortcode breaks the shortcode policy.
    #[error("Shortcode must be an alphanumeric code of 6 characters/numbers")]
    InvalidShortcode { shortcode: String },

    /// Another record already holds the shortcode.
    #[error("Shortcode is already in use")]
    ShortcodeInUse { shortcode: String },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_shortcode(shortcode: impl Into<String>) -> Self {
        Self::InvalidShortcode {
            shortcode: shortcode.into(),
        }
    }

    pub fn shortcode_in_use(shortcode: impl Into<String>) -> Self {
        Self::ShortcodeInUse {
            shortcode: shortcode.into(),
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingUrl | AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidShortcode { .. } => StatusCode::PRECONDITION_FAILED,
            AppError::ShortcodeInUse { .. } => StatusCode::CONFLICT,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable error code exposed to API clients.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingUrl => "missing_url",
            AppError::Validation { .. } => "validation_error",
            AppError::InvalidShortcode { .. } => "invalid_shortcode",
            AppError::ShortcodeInUse { .. } => "shortcode_in_use",
            AppError::NotFound { .. } => "not_found",
            AppError::Internal { .. } => "internal_error",
        }
    }

    /// Builds the serializable error payload without consuming the error.
    pub fn to_error_info(&self) -> ErrorInfo {
        let details = match self {
            AppError::MissingUrl => json!({ "field": "url" }),
            AppError::InvalidShortcode { shortcode } | AppError::ShortcodeInUse { shortcode } => {
                json!({ "shortcode": shortcode })
            }
            AppError::Validation { details, .. }
            | AppError::NotFound { details, .. }
            | AppError::Internal { details, .. } => details.clone(),
        };

        ErrorInfo {
            code: self.code(),
            message: self.to_string(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&errors).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Request validation failed", details)
    }
}
