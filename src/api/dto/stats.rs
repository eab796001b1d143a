//! DTOs for shortcode statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Redirect statistics for one shortcode.
///
/// `last_redirect` is `null` until the first redirect.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub created: DateTime<Utc>,
    pub last_redirect: Option<DateTime<Utc>>,
    pub redirect_count: i64,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            created: record.created,
            last_redirect: record.last_redirect,
            redirect_count: record.redirect_count,
        }
    }
}
