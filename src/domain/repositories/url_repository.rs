//! Repository trait for URL record storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::error::AppError;
use async_trait::async_trait;

/// Store of shortcode → URL records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record with `redirect_count = 0`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ShortcodeInUse`] if the shortcode is already taken.
    /// Returns [`AppError::Internal`] on database errors.
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError>;

    /// Finds a record by its exact shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Returns true if a record holds `shortcode`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn exists(&self, shortcode: &str) -> Result<bool, AppError>;

    /// Atomically increments `redirect_count` and stamps `last_redirect`.
    ///
    /// Returns the updated record, or `Ok(None)` if no record holds the code.
    /// Concurrent visits never lose an increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_visit(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError>;

    /// Checks that the store is reachable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be queried.
    async fn ping(&self) -> Result<(), AppError>;
}
