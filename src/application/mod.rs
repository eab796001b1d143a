//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::url_service::UrlService`] - Shortening, redirects, and stats

pub mod services;
