//! Created/updated lifecycle payloads.

use serde::{Deserialize, Serialize};

use crate::types::fields::FieldSet;

/// A document-lifecycle change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LifecycleEvent {
    /// A document was created. `data` is `None` when the platform delivered
    /// the event without a snapshot.
    Created {
        /// The created document's fields.
        data: Option<FieldSet>,
    },
    /// A document was updated.
    Updated {
        /// Fields before the update.
        before: FieldSet,
        /// Fields after the update.
        after: FieldSet,
    },
}

impl LifecycleEvent {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Created { .. } => "created",
            Self::Updated { .. } => "updated",
        }
    }
}
