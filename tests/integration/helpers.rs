//! Shared test helpers for integration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use notify_core::config::AppConfig;
use notify_core::config::store::MemoryStoreConfig;
use notify_core::error::AppError;
use notify_core::result::AppResult;
use notify_core::traits::push_sender::PushSender;
use notify_core::types::fields::FieldSet;
use notify_core::types::push::{DeliveryToken, PushPayload, PushReceipt};
use notify_store::memory::MemoryDocumentStore;

/// Push sender that records every attempt instead of delivering it.
#[derive(Debug, Default)]
pub struct RecordingPush {
    attempts: Mutex<Vec<(String, PushPayload)>>,
    failing: AtomicBool,
}

#[async_trait]
impl PushSender for RecordingPush {
    fn provider_type(&self) -> &str {
        "recording"
    }

    async fn send(&self, token: &DeliveryToken, payload: &PushPayload) -> AppResult<PushReceipt> {
        self.attempts
            .lock()
            .unwrap()
            .push((token.expose().to_string(), payload.clone()));
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::external_service("FCM returned 503 Service Unavailable"));
        }
        Ok(PushReceipt {
            message_id: Some("0:test".to_string()),
        })
    }
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Backing document store
    pub store: Arc<MemoryDocumentStore>,
    /// Recording push sender
    pub push: Arc<RecordingPush>,
}

impl TestApp {
    /// Create a new test application with an empty store.
    pub fn new() -> Self {
        let store = Arc::new(MemoryDocumentStore::new(&MemoryStoreConfig {
            max_capacity: 100,
            ..MemoryStoreConfig::default()
        }));
        let push = Arc::new(RecordingPush::default());
        let router = notify_api::build_app(&AppConfig::default(), store.clone(), push.clone());

        Self {
            router,
            store,
            push,
        }
    }

    /// Create a test application preloaded from a seed file.
    pub async fn with_seed_file(path: &str) -> Self {
        let app = Self::new();
        app.store
            .load_seed_file(path)
            .await
            .expect("Failed to load seed file");
        app
    }

    /// Insert a user record.
    pub async fn seed_user(&self, id: &str, record: Value) {
        self.store.put("users", id, fields(record)).await;
    }

    /// Make every push attempt fail.
    pub fn fail_push(&self) {
        self.push.failing.store(true, Ordering::SeqCst);
    }

    /// Push attempts so far, as `(token, payload)`.
    pub fn sent(&self) -> Vec<(String, PushPayload)> {
        self.push.attempts.lock().unwrap().clone()
    }

    /// Make a POST request with a JSON body
    pub async fn post(&self, path: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// Make a POST request with a raw body
    pub async fn post_raw(&self, path: &str, body: &str) -> StatusCode {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.router.clone().oneshot(request).await.unwrap().status()
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();
        self.send(request).await
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }
}

pub fn fields(value: Value) -> FieldSet {
    value.as_object().cloned().unwrap_or_default()
}
