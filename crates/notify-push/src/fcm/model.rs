//! FCM HTTP wire types.

use serde::{Deserialize, Serialize};

/// Request body for a single-device send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmRequest {
    /// Target device token.
    pub to: String,
    /// Display notification.
    pub notification: FcmNotification,
}

/// Display notification section of a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmNotification {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
    /// Sound to play on arrival.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

/// Response body of a send.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FcmResponse {
    /// Number of messages accepted.
    #[serde(default)]
    pub success: u32,
    /// Number of messages rejected.
    #[serde(default)]
    pub failure: u32,
    /// Per-device results, in request order.
    #[serde(default)]
    pub results: Vec<FcmResult>,
}

/// Result for one target device.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FcmResult {
    /// Provider message ID on success.
    pub message_id: Option<String>,
    /// Error code on failure (e.g. `NotRegistered`).
    pub error: Option<String>,
}
