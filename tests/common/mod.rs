#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use chrono::Utc;
use serde_json::json;
use shortener::api::routes::routes;
use shortener::application::services::UrlService;
use shortener::domain::entities::{NewUrlRecord, UrlRecord};
use shortener::domain::repositories::UrlRepository;
use shortener::error::AppError;
use shortener::state::AppState;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory store with the same uniqueness and visit semantics as Postgres.
#[derive(Default)]
pub struct InMemoryUrlRepository {
    records: Mutex<HashMap<String, UrlRecord>>,
    unavailable: AtomicBool,
}

impl InMemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent call fail like a lost database connection.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn insert(&self, url: &str, shortcode: &str) -> UrlRecord {
        let mut records = self.records.lock().unwrap();
        let record = UrlRecord::new(
            records.len() as i64 + 1,
            url.to_string(),
            shortcode.to_string(),
            Utc::now(),
        );
        records.insert(shortcode.to_string(), record.clone());
        record
    }

    pub fn get(&self, shortcode: &str) -> Option<UrlRecord> {
        self.records.lock().unwrap().get(shortcode).cloned()
    }

    pub fn len(&self) -> usize {
        self.records.lock().unwrap().len()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::internal("Database error", json!({})));
        }
        Ok(())
    }
}

#[async_trait]
impl UrlRepository for InMemoryUrlRepository {
    async fn create(&self, new_record: NewUrlRecord) -> Result<UrlRecord, AppError> {
        self.check_available()?;
        let mut records = self.records.lock().unwrap();

        if records.contains_key(&new_record.shortcode) {
            return Err(AppError::shortcode_in_use(new_record.shortcode));
        }

        let record = UrlRecord::new(
            records.len() as i64 + 1,
            new_record.url,
            new_record.shortcode.clone(),
            Utc::now(),
        );
        records.insert(new_record.shortcode, record.clone());
        Ok(record)
    }

    async fn find_by_shortcode(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError> {
        self.check_available()?;
        Ok(self.get(shortcode))
    }

    async fn exists(&self, shortcode: &str) -> Result<bool, AppError> {
        self.check_available()?;
        Ok(self.records.lock().unwrap().contains_key(shortcode))
    }

    async fn record_visit(&self, shortcode: &str) -> Result<Option<UrlRecord>, AppError> {
        self.check_available()?;
        let mut records = self.records.lock().unwrap();

        Ok(records.get_mut(shortcode).map(|record| {
            record.count_visit(Utc::now());
            record.clone()
        }))
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

pub fn create_test_state() -> (AppState, Arc<InMemoryUrlRepository>) {
    let repository = Arc::new(InMemoryUrlRepository::new());
    let url_service = Arc::new(UrlService::new(repository.clone()));

    (AppState::new(url_service), repository)
}

pub fn create_test_app() -> (Router, Arc<InMemoryUrlRepository>) {
    let (state, repository) = create_test_state();
    (routes().with_state(state), repository)
}

pub fn create_test_server() -> (TestServer, Arc<InMemoryUrlRepository>) {
    let (app, repository) = create_test_app();
    (TestServer::new(app).unwrap(), repository)
}
