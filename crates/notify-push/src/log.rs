//! Log-only push sender for local development.

use async_trait::async_trait;
use tracing::info;

use notify_core::result::AppResult;
use notify_core::traits::push_sender::PushSender;
use notify_core::types::push::{DeliveryToken, PushPayload, PushReceipt};

/// Push sender that records messages in the log and reports success.
#[derive(Debug, Clone, Default)]
pub struct LogPushSender;

impl LogPushSender {
    /// Create a new log-only sender.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl PushSender for LogPushSender {
    fn provider_type(&self) -> &str {
        "log"
    }

    async fn send(&self, token: &DeliveryToken, payload: &PushPayload) -> AppResult<PushReceipt> {
        info!(
            token = %token,
            title = %payload.title,
            body = %payload.body,
            sound = payload.sound.as_deref().unwrap_or("none"),
            "Push delivery disabled, message logged only"
        );
        Ok(PushReceipt::default())
    }
}
