//! Shortening, redirect, and statistics service.

use std::sync::Arc;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::shortcode::{generate_shortcode, normalize_shortcode};
use crate::utils::url_validator::validate_url;
use serde_json::json;
use tracing::{debug, info, warn};

/// Upper bound on attempts to find a free generated shortcode.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

/// Service for creating, resolving, and inspecting short URLs.
///
/// Custom shortcodes are validated and checked for availability. Generated
/// shortcodes are retried on collision, up to [`MAX_GENERATION_ATTEMPTS`].
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>) -> Self {
        Self { repository }
    }

    /// Creates a short URL for `url`.
    ///
    /// Only an absent `shortcode` means "generate one". A provided code, even an
    /// empty one, is checked before the URL, so a bad or taken code wins over a
    /// bad URL. The URL is stored exactly as given.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidShortcode`] if a custom shortcode breaks the policy
    /// - [`AppError::ShortcodeInUse`] if a custom shortcode is taken
    /// - [`AppError::MissingUrl`] if `url` is absent or blank
    /// - [`AppError::Validation`] if `url` is not a valid absolute URL
    /// - [`AppError::Internal`] if no free generated shortcode was found
    pub async fn shorten(
        &self,
        url: Option<String>,
        shortcode: Option<String>,
    ) -> Result<UrlRecord, AppError> {
        let requested = match shortcode {
            Some(raw) => Some(self.validate_or_generate(Some(raw)).await?),
            None => None,
        };

        let url = url
            .filter(|u| !u.trim().is_empty())
            .ok_or(AppError::MissingUrl)?;

        validate_url(&url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        if let Some(shortcode) = requested {
            // A concurrent insert of the same code still surfaces as 409.
            return self.insert(NewUrlRecord { url, shortcode }).await;
        }

        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let shortcode = self.validate_or_generate(None).await?;

            let new_record = NewUrlRecord {
                url: url.clone(),
                shortcode,
            };

            match self.insert(new_record).await {
                Err(AppError::ShortcodeInUse { shortcode }) => {
                    warn!(%shortcode, attempt, "Generated shortcode collided on insert");
                }
                result => return result,
            }
        }

        Err(AppError::internal(
            "Failed to generate unique shortcode",
            json!({ "reason": "Too many collisions" }),
        ))
    }

    /// Resolves the shortcode a new record should use.
    ///
    /// A provided code is lowercased, validated, and checked for availability.
    /// Without one, a random code not currently in the store is generated.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidShortcode`] / [`AppError::ShortcodeInUse`] for a provided code
    /// - [`AppError::Internal`] if every generated candidate was taken
    pub async fn validate_or_generate(&self, input: Option<String>) -> Result<String, AppError> {
        match input {
            Some(raw) => {
                let shortcode = normalize_shortcode(&raw)?;

                if self.repository.exists(&shortcode).await? {
                    return Err(AppError::shortcode_in_use(shortcode));
                }

                Ok(shortcode)
            }
            None => self.generate_unused_shortcode().await,
        }
    }

    /// Finds a record by its shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record holds the code.
    pub async fn find_by_shortcode(&self, shortcode: &str) -> Result<UrlRecord, AppError> {
        self.repository
            .find_by_shortcode(shortcode)
            .await?
            .ok_or_else(|| not_found(shortcode))
    }

    /// Counts one visit and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record holds the code.
    pub async fn record_visit(&self, shortcode: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .repository
            .record_visit(shortcode)
            .await?
            .ok_or_else(|| not_found(shortcode))?;

        debug!(
            shortcode = %record.shortcode,
            redirect_count = record.redirect_count,
            "Visit recorded"
        );

        Ok(record)
    }

    /// Returns the record backing `GET /{shortcode}/stats`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record holds the code.
    pub async fn stats(&self, shortcode: &str) -> Result<UrlRecord, AppError> {
        self.find_by_shortcode(shortcode).await
    }

    /// Returns true if the store answers queries.
    pub async fn health_check(&self) -> bool {
        match self.repository.ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        }
    }

    async fn insert(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        let record = self.repository.create(new_record).await?;

        info!(shortcode = %record.shortcode, "Short URL created");
        metrics::counter!("shortener_links_created_total").increment(1);

        Ok(record)
    }

    async fn generate_unused_shortcode(&self) -> Result<String, AppError> {
        for _ in 0..MAX_GENERATION_ATTEMPTS {
            let shortcode = generate_shortcode();

            if !self.repository.exists(&shortcode).await? {
                return Ok(shortcode);
            }

            debug!(%shortcode, "Generated shortcode already taken");
        }

        Err(AppError::internal(
            "Failed to generate unique shortcode",
            json!({ "reason": "Too many collisions" }),
        ))
    }
}

fn not_found(shortcode: &str) -> AppError {
    AppError::not_found("Shortcode not found", json!({ "shortcode": shortcode }))
}
