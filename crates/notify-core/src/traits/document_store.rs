//! Read-only document store abstraction.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::fields::FieldSet;

/// Trait for document store backends (in-memory, Firestore REST).
///
/// Only point reads are needed: the dispatch path looks up one user
/// record per invocation and never writes.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "memory", "firestore").
    fn provider_type(&self) -> &str;

    /// Fetch a document's fields. Returns `None` if the document does not exist.
    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<FieldSet>>;

    /// Check that the backend is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
