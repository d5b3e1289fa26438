//! Shared lookup-and-send path: user record → push token → dispatch.

use std::sync::Arc;

use tracing::{error, info};

use notify_core::traits::document_store::DocumentStore;
use notify_core::traits::push_sender::PushSender;
use notify_core::types::id::RecipientId;
use notify_core::types::push::PushPayload;
use notify_entity::recipient::RecipientRole;
use notify_entity::user::UserRecord;

use super::outcome::{DispatchOutcome, SkipReason};

/// Resolves a recipient's push token and hands the payload to the provider.
#[derive(Debug, Clone)]
pub struct RecipientNotifier {
    /// Store holding user records.
    store: Arc<dyn DocumentStore>,
    /// Push provider.
    push: Arc<dyn PushSender>,
    /// Collection holding user records.
    users_collection: String,
}

impl RecipientNotifier {
    /// Create a new recipient notifier.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        push: Arc<dyn PushSender>,
        users_collection: impl Into<String>,
    ) -> Self {
        Self {
            store,
            push,
            users_collection: users_collection.into(),
        }
    }

    /// Look up `recipient_id` and send `payload` to its device.
    ///
    /// A missing user document, a missing token, or a store read failure
    /// ends the invocation without a dispatch. A provider failure is logged
    /// and reported as [`DispatchOutcome::Failed`].
    pub async fn notify(
        &self,
        role: RecipientRole,
        recipient_id: &RecipientId,
        payload: &PushPayload,
    ) -> DispatchOutcome {
        let fields = match self
            .store
            .get(&self.users_collection, recipient_id.as_str())
            .await
        {
            Ok(Some(fields)) => fields,
            Ok(None) => {
                error!(%role, %recipient_id, "User document not found");
                return DispatchOutcome::skipped(SkipReason::RecipientNotFound { role });
            }
            Err(e) => {
                error!(%role, %recipient_id, error = %e, "Failed to read user document");
                return DispatchOutcome::skipped(SkipReason::StoreUnavailable { role });
            }
        };

        let user = UserRecord::from_fields(recipient_id.clone(), &fields);
        let Some(token) = user.fcm_token else {
            error!(%role, %recipient_id, "Push token missing on user document");
            return DispatchOutcome::skipped(SkipReason::MissingToken { role });
        };

        info!(%role, %recipient_id, %token, title = %payload.title, "Sending push notification");

        match self.push.send(&token, payload).await {
            Ok(receipt) => {
                info!(
                    %role,
                    %recipient_id,
                    message_id = receipt.message_id.as_deref().unwrap_or("-"),
                    "Push notification accepted"
                );
                DispatchOutcome::Sent {
                    recipient: user.id,
                    message_id: receipt.message_id,
                }
            }
            Err(e) => {
                error!(%role, %recipient_id, error = %e, "Error sending push notification");
                DispatchOutcome::Failed {
                    recipient: user.id,
                    error: e.to_string(),
                }
            }
        }
    }
}
