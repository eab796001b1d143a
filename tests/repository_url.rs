//! PostgreSQL store tests. `#[sqlx::test]` creates a fresh database per test
//! from `DATABASE_URL` and applies `./migrations`, so a reachable server is
//! required:
//!
//! ```bash
//! DATABASE_URL=postgres://... cargo test --test repository_url
//! ```

use shortener::domain::entities::NewUrlRecord;
use shortener::domain::repositories::UrlRepository;
use shortener::error::AppError;
use shortener::infrastructure::persistence::PgUrlRepository;
use sqlx::PgPool;
use std::sync::Arc;

fn new_record(url: &str, shortcode: &str) -> NewUrlRecord {
    NewUrlRecord {
        url: url.to_string(),
        shortcode: shortcode.to_string(),
    }
}

#[sqlx::test]
async fn test_create_record(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    let record = repo
        .create(new_record("https://example.com", "abc123"))
        .await
        .unwrap();

    assert_eq!(record.shortcode, "abc123");
    assert_eq!(record.url, "https://example.com");
    assert_eq!(record.redirect_count, 0);
    assert!(record.last_redirect.is_none());
}

#[sqlx::test]
async fn test_create_duplicate_shortcode(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));

    repo.create(new_record("https://example.com", "abc123"))
        .await
        .unwrap();
    let result = repo.create(new_record("https://other.com", "abc123")).await;

    match result {
        Err(AppError::ShortcodeInUse { shortcode }) => assert_eq!(shortcode, "abc123"),
        other => panic!("expected ShortcodeInUse, got {other:?}"),
    }
}

#[sqlx::test]
async fn test_find_and_exists(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    repo.create(new_record("https://assetcare.nl", "asc123"))
        .await
        .unwrap();

    let found = repo.find_by_shortcode("asc123").await.unwrap();
    assert_eq!(found.unwrap().url, "https://assetcare.nl");

    assert!(repo.find_by_shortcode("zzz999").await.unwrap().is_none());
    assert!(repo.exists("asc123").await.unwrap());
    assert!(!repo.exists("zzz999").await.unwrap());
}

#[sqlx::test]
async fn test_record_visit_increments_by_one(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    let created = repo
        .create(new_record("https://example.com", "abc123"))
        .await
        .unwrap();

    let visited = repo.record_visit("abc123").await.unwrap().unwrap();

    assert_eq!(visited.redirect_count, 1);
    assert!(visited.last_redirect.is_some());
    assert_eq!(visited.created, created.created);

    let missing = repo.record_visit("zzz999").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test]
async fn test_concurrent_visits_are_not_lost(pool: PgPool) {
    let repo = Arc::new(PgUrlRepository::new(Arc::new(pool)));
    repo.create(new_record("https://example.com", "abc123"))
        .await
        .unwrap();

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let repo = repo.clone();
            tokio::spawn(async move { repo.record_visit("abc123").await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let record = repo.find_by_shortcode("abc123").await.unwrap().unwrap();
    assert_eq!(record.redirect_count, 20);
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgUrlRepository::new(Arc::new(pool));
    assert!(repo.ping().await.is_ok());
}
