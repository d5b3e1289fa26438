//! Trigger intake request handling tests.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let (status, body) = app.get("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "memory");
    assert_eq!(body["store_reachable"], true);
    assert_eq!(body["push"], "recording");
}

#[tokio::test]
async fn test_other_collection_is_rejected() {
    let app = TestApp::new();
    app.seed_user("L1", json!({"fcmToken": "tok-123"})).await;

    let (status, body) = app
        .post(
            "/events/bookings/created",
            json!({"document": "users/L1", "data": {"landlordId": "L1"}}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_invalid_document_path_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            "/events/bookings/updated",
            json!({"document": "bookings", "before": {}, "after": {}}),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_qualified_document_name_is_accepted() {
    let app = TestApp::new();
    app.seed_user("L1", json!({"fcmToken": "tok-123"})).await;

    let (status, body) = app
        .post(
            "/events/bookings/created",
            json!({
                "document": "projects/rentals/databases/(default)/documents/bookings/b9",
                "data": {"landlordId": "L1"}
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "sent");
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    let app = TestApp::new();

    let status = app.post_raw("/events/bookings/created", "{not json").await;

    assert!(status.is_client_error());
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_development_seed_file_serves_events() {
    let app = TestApp::with_seed_file("config/dev-seed.json").await;

    let (status, body) = app
        .post(
            "/events/bookings/created",
            json!({
                "document": "bookings/b1",
                "data": {"landlordId": "L1", "tenantName": "Alice", "propertyTitle": "Blue House"}
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "sent");
    assert_eq!(app.sent()[0].0, "dev-landlord-token");
}
