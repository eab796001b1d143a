mod common;

#[tokio::test]
async fn test_stats_for_unvisited_shortcode() {
    let (server, repository) = common::create_test_server();
    let record = repository.insert("https://assetcare.nl", "asc123");

    let response = server.get("/asc123/stats").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["redirect_count"], 0);
    assert!(json["last_redirect"].is_null());

    let created: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(json["created"].clone()).unwrap();
    assert_eq!(created, record.created);
}

#[tokio::test]
async fn test_stats_shape() {
    let (server, repository) = common::create_test_server();
    repository.insert("https://example.com", "abc123");

    let json = server
        .get("/abc123/stats")
        .await
        .json::<serde_json::Value>();

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 3);
    assert!(object.contains_key("created"));
    assert!(object.contains_key("last_redirect"));
    assert!(object.contains_key("redirect_count"));
}

#[tokio::test]
async fn test_stats_does_not_count_as_visit() {
    let (server, repository) = common::create_test_server();
    repository.insert("https://example.com", "abc123");

    server.get("/abc123/stats").await;
    server.get("/abc123/stats").await;

    assert_eq!(repository.get("abc123").unwrap().redirect_count, 0);
}

#[tokio::test]
async fn test_stats_after_visits() {
    let (server, repository) = common::create_test_server();
    repository.insert("https://example.com", "abc123");

    for _ in 0..4 {
        server.get("/abc123").await;
    }

    let json = server
        .get("/abc123/stats")
        .await
        .json::<serde_json::Value>();

    assert_eq!(json["redirect_count"], 4);
    assert!(json["last_redirect"].is_string());
}

#[tokio::test]
async fn test_stats_not_found() {
    let (server, _repository) = common::create_test_server();

    let response = server.get("/doesnotexist/stats").await;

    response.assert_status_not_found();
}
