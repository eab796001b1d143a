//! Redirect target validation.
//!
//! Targets are checked, never rewritten: the stored string is exactly what the
//! client sent, so the `Location` header of a redirect matches the input.
//! Surrounding whitespace is therefore rejected rather than stripped.

use url::Url;

/// Errors that can occur while validating a target URL.
#[derive(Debug, thiserror::Error)]
pub enum UrlValidationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP, HTTPS, FTP and FTPS URLs are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,
}

/// Validates that `input` is an absolute URL suitable as a redirect target.
///
/// # Rules
///
/// 1. Must parse as an absolute URL, with no leading or trailing whitespace
/// 2. Scheme must be `http`, `https`, `ftp` or `ftps`
/// 3. Must have a non-empty host
///
/// Rejects `javascript:`, `data:`, `file:` and similar schemes.
pub fn validate_url(input: &str) -> Result<(), UrlValidationError> {
    if input.trim() != input {
        return Err(UrlValidationError::InvalidFormat(
            "leading or trailing whitespace".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlValidationError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" | "ftp" | "ftps" => {}
        _ => return Err(UrlValidationError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(UrlValidationError::MissingHost),
    }
}
