//! User read model.

use notify_core::types::fields::{self, FieldSet};
use notify_core::types::id::RecipientId;
use notify_core::types::push::DeliveryToken;

/// Field holding the device push token.
pub const FCM_TOKEN_FIELD: &str = "fcmToken";

/// The part of a user document the notifier reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// User document ID.
    pub id: RecipientId,
    /// Push token, when present as a non-empty string.
    pub fcm_token: Option<DeliveryToken>,
}

impl UserRecord {
    /// Decode a user record from its document fields.
    pub fn from_fields(id: RecipientId, data: &FieldSet) -> Self {
        Self {
            id,
            fcm_token: fields::non_empty_str(data, FCM_TOKEN_FIELD).and_then(DeliveryToken::parse),
        }
    }
}
