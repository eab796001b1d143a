//! Shortcode generation and validation.
//!
//! A shortcode is exactly [`SHORTCODE_LENGTH`] characters drawn from
//! [`SHORTCODE_ALPHABET`] (`a-z`, `0-9`, `_`). User-supplied codes are
//! lowercased before they are checked, so `ABC123` is stored as `abc123`.

use crate::error::AppError;
use rand::Rng;
use regex::Regex;
use std::sync::LazyLock;

/// Number of characters in every shortcode.
pub const SHORTCODE_LENGTH: usize = 6;

/// Characters a shortcode may contain.
pub const SHORTCODE_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789_";

/// Codes that would shadow fixed routes.
const RESERVED_CODES: &[&str] = &["health"];

static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9_]{6}$").expect("shortcode regex is valid"));

/// Generates a random shortcode.
///
/// Each character is drawn uniformly from [`SHORTCODE_ALPHABET`]. Reserved
/// codes are never returned. Uniqueness against the store is the caller's
/// concern.
///
/// # Examples
///
/// ```ignore
/// let code = generate_shortcode();
/// assert_eq!(code.len(), 6);
/// ```
pub fn generate_shortcode() -> String {
    let mut rng = rand::rng();

    loop {
        let code: String = (0..SHORTCODE_LENGTH)
            .map(|_| SHORTCODE_ALPHABET[rng.random_range(0..SHORTCODE_ALPHABET.len())] as char)
            .collect();

        if !is_reserved(&code) {
            return code;
        }
    }
}

/// Lowercases a user-supplied shortcode and checks it against the policy.
///
/// # Errors
///
/// Returns [`AppError::InvalidShortcode`] if the lowercased code is not
/// exactly six characters of `a-z`, `0-9` or `_`, or if it is reserved.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_shortcode("ABC_12").unwrap(), "abc_12");
/// assert!(normalize_shortcode("ab!123").is_err());
/// assert!(normalize_shortcode("abc12").is_err());
/// ```
pub fn normalize_shortcode(input: &str) -> Result<String, AppError> {
    let code = input.to_lowercase();

    if !is_valid_shortcode(&code) || is_reserved(&code) {
        return Err(AppError::invalid_shortcode(input));
    }

    Ok(code)
}

/// Returns true if `code` already satisfies the policy as-is.
pub fn is_valid_shortcode(code: &str) -> bool {
    SHORTCODE_REGEX.is_match(code)
}

fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}
