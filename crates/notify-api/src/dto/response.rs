//! Response bodies.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use notify_service::notification::outcome::DispatchOutcome;

/// Result of one trigger invocation.
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    /// Invocation ID, also present on every log line of the invocation.
    pub invocation_id: Uuid,
    /// What the handler did.
    #[serde(flatten)]
    pub outcome: DispatchOutcome,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status
    pub status: String,
    /// Server version
    pub version: String,
    /// Document store provider
    pub store: String,
    /// Whether the document store answered
    pub store_reachable: bool,
    /// Push provider
    pub push: String,
}
