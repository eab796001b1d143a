//! Utility functions for shortcodes, URL validation, and database errors.
//!
//! - [`shortcode`] - Shortcode generation and validation
//! - [`url_validator`] - Redirect target validation
//! - [`db_error`] - Database error classification

pub mod db_error;
pub mod shortcode;
pub mod url_validator;
