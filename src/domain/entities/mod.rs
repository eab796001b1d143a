//! Core domain entities.
//!
//! - [`UrlRecord`] - A persisted shortcode → URL mapping with visit stats
//! - [`NewUrlRecord`] - Input for creating a record

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
