//! FCM sender implementing [`PushSender`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use tracing::debug;

use notify_core::config::push::FcmConfig;
use notify_core::error::{AppError, ErrorKind};
use notify_core::result::AppResult;
use notify_core::traits::push_sender::PushSender;
use notify_core::types::push::{DeliveryToken, PushPayload, PushReceipt};

use super::model::{FcmNotification, FcmRequest, FcmResponse};

/// Sends single-device messages to the FCM HTTP endpoint.
#[derive(Debug, Clone)]
pub struct FcmPushSender {
    client: Client,
    endpoint: String,
    authorization: String,
}

impl FcmPushSender {
    /// Create a new FCM sender from configuration.
    pub fn new(config: &FcmConfig) -> AppResult<Self> {
        if config.server_key.is_empty() {
            return Err(AppError::configuration(
                "push.fcm.server_key is required for the fcm provider",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build FCM HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            authorization: format!("key={}", config.server_key),
        })
    }
}

#[async_trait]
impl PushSender for FcmPushSender {
    fn provider_type(&self) -> &str {
        "fcm"
    }

    async fn send(&self, token: &DeliveryToken, payload: &PushPayload) -> AppResult<PushReceipt> {
        let body = FcmRequest {
            to: token.expose().to_string(),
            notification: FcmNotification {
                title: payload.title.clone(),
                body: payload.body.clone(),
                sound: payload.sound.clone(),
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, &self.authorization)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::ExternalService,
                    format!("FCM request failed: {e}"),
                    e,
                )
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(format!(
                "FCM returned {status}"
            )));
        }

        let result: FcmResponse = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::ExternalService,
                format!("Malformed FCM response: {e}"),
                e,
            )
        })?;

        let first = result.results.into_iter().next().unwrap_or_default();
        if let Some(code) = first.error {
            return Err(AppError::external_service(format!(
                "FCM rejected message for {token}: {code}"
            )));
        }
        if result.failure > 0 {
            return Err(AppError::external_service(format!(
                "FCM reported {} failed deliveries for {token}",
                result.failure
            )));
        }

        debug!(token = %token, success = result.success, "FCM accepted message");
        Ok(PushReceipt {
            message_id: first.message_id,
        })
    }
}
