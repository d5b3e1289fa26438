//! Booking-updated trigger tests.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

const UPDATED: &str = "/events/bookings/updated";

#[tokio::test]
async fn test_accepted_booking_notifies_tenant() {
    let app = TestApp::new();
    app.seed_user("T1", json!({"fcmToken": "tok-456"})).await;

    let (status, body) = app
        .post(
            UPDATED,
            json!({
                "document": "bookings/b1",
                "before": {"status": "pending", "tenantId": "T1", "propertyTitle": "Blue House"},
                "after": {"status": "accepted", "tenantId": "T1", "propertyTitle": "Blue House"}
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "sent");
    assert_eq!(body["recipient"], "T1");

    let sent = app.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].0, "tok-456");
    assert_eq!(sent[0].1.title, "Booking ACCEPTED! 🎉");
    assert_eq!(
        sent[0].1.body,
        "Your request for \"Blue House\" has been ACCEPTED."
    );
    assert!(sent[0].1.sound.is_none());
}

#[tokio::test]
async fn test_rejected_booking_notifies_tenant() {
    let app = TestApp::new();
    app.seed_user("T1", json!({"fcmToken": "tok-456"})).await;

    app.post(
        UPDATED,
        json!({
            "document": "bookings/b1",
            "before": {"status": "pending", "tenantId": "T1"},
            "after": {"status": "rejected", "tenantId": "T1", "propertyTitle": "Loft"}
        }),
    )
    .await;

    let sent = app.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].1.title.contains("REJECTED"));
}

#[tokio::test]
async fn test_unchanged_status_sends_nothing() {
    let app = TestApp::new();
    app.seed_user("T1", json!({"fcmToken": "tok-456"})).await;

    let (status, body) = app
        .post(
            UPDATED,
            json!({
                "document": "bookings/b1",
                "before": {"status": "pending", "tenantId": "T1", "propertyTitle": "Old"},
                "after": {"status": "pending", "tenantId": "T1", "propertyTitle": "New"}
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["outcome"], "skipped");
    assert_eq!(body["reason"], "status_unchanged");
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_missing_tenant_id_sends_nothing() {
    let app = TestApp::new();

    let (status, body) = app
        .post(
            UPDATED,
            json!({
                "document": "bookings/b1",
                "before": {"status": "pending"},
                "after": {"status": "accepted"}
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reason"], "missing_recipient_id");
    assert_eq!(body["role"], "tenant");
    assert!(app.sent().is_empty());
}

#[tokio::test]
async fn test_tenant_without_token_sends_nothing() {
    let app = TestApp::new();
    app.seed_user("T1", json!({"fcmToken": ""})).await;

    let (_, body) = app
        .post(
            UPDATED,
            json!({
                "document": "bookings/b1",
                "before": {"status": "pending", "tenantId": "T1"},
                "after": {"status": "cancelled", "tenantId": "T1"}
            }),
        )
        .await;

    assert_eq!(body["reason"], "missing_token");
    assert!(app.sent().is_empty());
}
