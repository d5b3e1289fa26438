//! Booking-created trigger tests.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

const CREATED: &str = "/events/bookings/created";

#[tokio::test]
async fn test_new_booking_notifies_landlord() {
    let app = TestApp::new();
    app.seed_user("L1", json!({"fcmToken": "tok-123"})).await;

    let (status, body) = app
        .post(
            CREATED,
            json!({
                "document": "bookings/b1",
                "data": {
                    "landlordId": "L1",
                    "tenantName": "Alice",
                    "propertyTitle": "Blue House",
                    "status": "pending"
                }
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "sent");
    assert_eq!(body["recipient"], "L1");
    assert!(body["invocation_id"].is_string());

    let sent = app.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "tok-123");
    assert_eq!(sent[0].1.title, "New Booking Request! 🏡");
    assert_eq!(sent[0].1.body, "Alice wants to book: Blue House.");
    assert_eq!(sent[0].1.sound.as_deref(), Some("default"));
}

#[tokio::test]
async fn test_missing_landlord_id_sends_nothing() {
    let app = TestApp::new();
    app.seed_user("L1", json!({"fcmToken": "tok-123"})).await;

    let (status, body) = app
        .post(
            CREATED,
            json!({
                "document": "bookings/b2",
                "data": {"tenantName": "Alice", "propertyTitle": "Blue House"}
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "skipped");
    assert_eq!(body["reason"], "missing_recipient_id");
    assert_eq!(body["role"], "landlord");
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_missing_snapshot_sends_nothing() {
    let app = TestApp::new();

    let (status, body) = app
        .post(CREATED, json!({"document": "bookings/b3", "data": null}))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reason"], "missing_event_data");
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_unknown_landlord_sends_nothing() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            CREATED,
            json!({"document": "bookings/b4", "data": {"landlordId": "ghost"}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reason"], "recipient_not_found");
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_landlord_without_token_sends_nothing() {
    let app = TestApp::new();
    app.seed_user("L2", json!({"displayName": "Bob"})).await;

    let (status, body) = app
        .post(
            CREATED,
            json!({"document": "bookings/b5", "data": {"landlordId": "L2"}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reason"], "missing_token");
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_push_failure_still_answers_ok() {
    let app = TestApp::new();
    app.seed_user("L1", json!({"fcmToken": "tok-123"})).await;
    app.fail_push();

    let (status, body) = app
        .post(
            CREATED,
            json!({"document": "bookings/b6", "data": {"landlordId": "L1"}}),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "failed");
    assert_eq!(body["recipient"], "L1");
    assert_eq!(app.sent().len(), 1);
}

#[tokio::test]
async fn test_missing_display_fields_render_empty() {
    let app = TestApp::new();
    app.seed_user("L1", json!({"fcmToken": "tok-123"})).await;

    app.post(
        CREATED,
        json!({"document": "bookings/b7", "data": {"landlordId": "L1"}}),
    )
    .await;

    let sent = app.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].1.body, " wants to book: .");
}
