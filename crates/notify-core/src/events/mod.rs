//! Document-lifecycle trigger events.
//!
//! The hosting platform delivers one event per document change; each event
//! is wrapped in a [`TriggerEvent`] carrying an invocation ID for log
//! correlation.

pub mod document;
pub mod lifecycle;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use document::DocumentPath;
pub use lifecycle::LifecycleEvent;

/// Wrapper for a delivered lifecycle event with invocation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TriggerEvent {
    /// Unique invocation ID.
    pub id: Uuid,
    /// When the event was received.
    pub received_at: DateTime<Utc>,
    /// The document the event refers to.
    pub document: DocumentPath,
    /// The event payload.
    pub payload: LifecycleEvent,
}

impl TriggerEvent {
    /// Create a new trigger event.
    pub fn new(document: DocumentPath, payload: LifecycleEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            received_at: Utc::now(),
            document,
            payload,
        }
    }
}
