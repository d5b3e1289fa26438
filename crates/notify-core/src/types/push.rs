//! Push notification payloads, delivery tokens, and receipts.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque per-device token used by the push provider to route a message.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeliveryToken(String);

impl DeliveryToken {
    /// Wrap a raw token, rejecting empty input.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() { None } else { Some(Self(raw)) }
    }

    /// The full token, for the provider request only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// A log-safe rendering showing at most the first six characters.
    pub fn masked(&self) -> String {
        let prefix: String = self.0.chars().take(6).collect();
        format!("{prefix}…")
    }
}

impl fmt::Debug for DeliveryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeliveryToken({})", self.masked())
    }
}

impl fmt::Display for DeliveryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

/// The user-visible part of a push message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    /// Notification title.
    pub title: String,
    /// Notification body.
    pub body: String,
    /// Optional sound hint (e.g. `"default"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
}

impl PushPayload {
    /// Create a payload without a sound hint.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            sound: None,
        }
    }

    /// Attach a sound hint.
    pub fn with_sound(mut self, sound: impl Into<String>) -> Self {
        self.sound = Some(sound.into());
        self
    }
}

/// Provider acknowledgement of an accepted message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushReceipt {
    /// Provider-assigned message ID, when one is returned.
    pub message_id: Option<String>,
}
