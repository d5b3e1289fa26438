//! Fakes for handler tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use notify_core::error::AppError;
use notify_core::result::AppResult;
use notify_core::traits::document_store::DocumentStore;
use notify_core::traits::push_sender::PushSender;
use notify_core::types::fields::FieldSet;
use notify_core::types::push::{DeliveryToken, PushPayload, PushReceipt};

use super::{BookingNotifier, NotifierSettings};

pub fn fields(value: serde_json::Value) -> FieldSet {
    value.as_object().cloned().unwrap_or_default()
}

#[derive(Debug, Default)]
pub struct FakeStore {
    documents: Mutex<HashMap<String, FieldSet>>,
    failing: AtomicBool,
}

#[async_trait]
impl DocumentStore for FakeStore {
    fn provider_type(&self) -> &str {
        "fake"
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<FieldSet>> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::store("store offline"));
        }
        let documents = self.documents.lock().unwrap_or_else(|e| e.into_inner());
        Ok(documents.get(&format!("{collection}/{id}")).cloned())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(!self.failing.load(Ordering::SeqCst))
    }
}

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
            .unwrap_or_else(|e| e.into_inner())
            .push((token.expose().to_string(), payload.clone()));
        if self.failing.load(Ordering::SeqCst) {
            return Err(AppError::external_service("FCM returned 503"));
        }
        Ok(PushReceipt {
            message_id: Some("msg-1".to_string()),
        })
    }
}

/// A notifier wired to an in-process store and a recording push sender.
#[derive(Debug, Default)]
pub struct Harness {
    store: Arc<FakeStore>,
    push: Arc<RecordingPush>,
}

impl Harness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, id: &str, data: serde_json::Value) -> Self {
        self.store
            .documents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(format!("users/{id}"), fields(data));
        self
    }

    pub fn failing_store(self) -> Self {
        self.store.failing.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_push(self) -> Self {
        self.push.failing.store(true, Ordering::SeqCst);
        self
    }

    pub fn notifier(&self) -> BookingNotifier {
        BookingNotifier::new(
            self.store.clone(),
            self.push.clone(),
            NotifierSettings::default(),
        )
    }

    pub fn sent(&self) -> Vec<(String, PushPayload)> {
        self.push
            .attempts
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn attempts(&self) -> usize {
        self.sent().len()
    }
}
