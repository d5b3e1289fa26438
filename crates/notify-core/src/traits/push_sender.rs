//! Push-delivery abstraction.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::push::{DeliveryToken, PushPayload, PushReceipt};

/// Trait for push-messaging providers.
///
/// `send` makes a single delivery attempt. Callers on the dispatch path
/// catch and log the error; providers never retry.
#[async_trait]
pub trait PushSender: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "fcm", "log").
    fn provider_type(&self) -> &str;

    /// Deliver `payload` to the device identified by `token`.
    async fn send(&self, token: &DeliveryToken, payload: &PushPayload) -> AppResult<PushReceipt>;
}
