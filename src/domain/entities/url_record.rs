//! URL record entity representing a shortened URL and its redirect statistics.

use chrono::{DateTime, Utc};

/// A shortcode → URL mapping with visit statistics.
///
/// `shortcode` is unique across the store and never changes after creation.
/// Only visit counting mutates a record.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub url: String,
    pub shortcode: String,
    pub created: DateTime<Utc>,
    pub modified: DateTime<Utc>,
    pub last_redirect: Option<DateTime<Utc>>,
    pub redirect_count: i64,
}

impl UrlRecord {
    /// Creates a record that has never been visited.
    pub fn new(id: i64, url: String, shortcode: String, created: DateTime<Utc>) -> Self {
        Self {
            id,
            url,
            shortcode,
            created,
            modified: created,
            last_redirect: None,
            redirect_count: 0,
        }
    }

    /// Applies one visit at `at`.
    pub fn count_visit(&mut self, at: DateTime<Utc>) {
        self.last_redirect = Some(at);
        self.modified = at;
        self.redirect_count += 1;
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub url: String,
    pub shortcode: String,
}
