//! PostgreSQL implementation of the URL record repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::db_error::is_unique_violation_on_shortcode;

/// PostgreSQL repository for URL records.
///
/// Queries are bound at runtime, so the crate builds without a live database.
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            INSERT INTO urls (url, shortcode)
            VALUES ($1, $2)
            RETURNING id, url, shortcode, created, modified, last_redirect, redirect_count
            "#,
        )
        .bind(&new_record.url)
        .bind(&new_record.shortcode)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| {
            if is_unique_violation_on_shortcode(&e) {
                AppError::shortcode_in_use(new_record.shortcode.clone())
            } else {
                e.into()
            }
        })
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, url, shortcode, created, modified, last_redirect, redirect_count
            FROM urls
            WHERE shortcode = $1
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn exists(&self, shortcode: &str) -> Result<bool, AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM urls WHERE shortcode = $1)")
                .bind(shortcode)
                .fetch_one(self.pool.as_ref())
                .await?;

        Ok(exists)
    }

    async fn record_visit(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError> {
        let record = sqlx::query_as::<_, UrlRecord>(
            r#"
            UPDATE urls
            SET redirect_count = redirect_count + 1,
                last_redirect = NOW(),
                modified = NOW()
            WHERE shortcode = $1
            RETURNING id, url, shortcode, created, modified, last_redirect, redirect_count
            "#,
        )
        .bind(shortcode)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(record)
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
