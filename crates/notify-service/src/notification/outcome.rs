//! Result of one handler invocation.

use serde::Serialize;
use std::fmt;

use notify_core::types::id::RecipientId;
use notify_entity::recipient::RecipientRole;

/// Why an invocation ended without a dispatch attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The created event carried no document snapshot.
    MissingEventData,
    /// The booking lacks the recipient's user ID.
    MissingRecipientId {
        /// Recipient role whose ID was missing.
        role: RecipientRole,
    },
    /// No user document exists for the recipient.
    RecipientNotFound {
        /// Recipient role that was looked up.
        role: RecipientRole,
    },
    /// The user document has no push token.
    MissingToken {
        /// Recipient role lacking a token.
        role: RecipientRole,
    },
    /// The user document could not be read.
    StoreUnavailable {
        /// Recipient role that was looked up.
        role: RecipientRole,
    },
    /// The update did not touch the status field.
    StatusUnchanged,
    /// The updated booking has no usable status value.
    MissingStatus,
}

impl SkipReason {
    /// Machine-readable reason code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingEventData => "missing_event_data",
            Self::MissingRecipientId { .. } => "missing_recipient_id",
            Self::RecipientNotFound { .. } => "recipient_not_found",
            Self::MissingToken { .. } => "missing_token",
            Self::StoreUnavailable { .. } => "store_unavailable",
            Self::StatusUnchanged => "status_unchanged",
            Self::MissingStatus => "missing_status",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal state of a handler invocation.
///
/// Every variant is a normal return: the invoking platform never sees a
/// failure, so it has no reason to redeliver the trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DispatchOutcome {
    /// The push provider accepted the message.
    Sent {
        /// Recipient user ID.
        recipient: RecipientId,
        /// Provider message ID, when returned.
        message_id: Option<String>,
    },
    /// No dispatch was attempted.
    Skipped {
        /// Why the invocation stopped.
        #[serde(flatten)]
        reason: SkipReason,
    },
    /// The dispatch was attempted and failed.
    Failed {
        /// Recipient user ID.
        recipient: RecipientId,
        /// Provider error message.
        error: String,
    },
}

impl DispatchOutcome {
    /// Shorthand for a skipped outcome.
    pub fn skipped(reason: SkipReason) -> Self {
        Self::Skipped { reason }
    }

    /// Whether a message was handed to the push provider successfully.
    pub fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }

    /// The skip reason, if the invocation was skipped.
    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Self::Skipped { reason } => Some(*reason),
            _ => None,
        }
    }

    /// Short label for logs and responses.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sent { .. } => "sent",
            Self::Skipped { .. } => "skipped",
            Self::Failed { .. } => "failed",
        }
    }
}
