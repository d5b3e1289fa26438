//! Trigger event request bodies.

use serde::{Deserialize, Serialize};

use notify_core::types::fields::FieldSet;

/// Body of `POST /events/bookings/created`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedEventRequest {
    /// Document path, e.g. `bookings/abc`.
    pub document: String,
    /// The created document's fields; `null` when no snapshot is available.
    #[serde(default)]
    pub data: Option<FieldSet>,
}

/// Body of `POST /events/bookings/updated`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatedEventRequest {
    /// Document path, e.g. `bookings/abc`.
    pub document: String,
    /// Fields before the update.
    #[serde(default)]
    pub before: FieldSet,
    /// Fields after the update.
    #[serde(default)]
    pub after: FieldSet,
}
