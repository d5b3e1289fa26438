//! Push manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use notify_core::config::push::PushConfig;
use notify_core::error::AppError;
use notify_core::result::AppResult;
use notify_core::traits::push_sender::PushSender;
use notify_core::types::push::{DeliveryToken, PushPayload, PushReceipt};

/// Push manager that wraps the configured push provider.
#[derive(Debug, Clone)]
pub struct PushManager {
    /// The inner push provider.
    inner: Arc<dyn PushSender>,
}

impl PushManager {
    /// Create a new push manager from configuration.
    pub fn new(config: &PushConfig) -> AppResult<Self> {
        let inner: Arc<dyn PushSender> = match config.provider.as_str() {
            #[cfg(feature = "fcm")]
            "fcm" => {
                info!(endpoint = %config.fcm.endpoint, "Initializing FCM push sender");
                Arc::new(crate::fcm::FcmPushSender::new(&config.fcm)?)
            }
            "log" => {
                info!("Initializing log-only push sender");
                Arc::new(crate::log::LogPushSender::new())
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown push provider: '{other}'. Supported: fcm, log"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a push manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn PushSender>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl PushSender for PushManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn send(&self, token: &DeliveryToken, payload: &PushPayload) -> AppResult<PushReceipt> {
        self.inner.send(token, payload).await
    }
}
