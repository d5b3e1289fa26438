//! In-memory document store implementation using the moka crate.

use std::collections::BTreeMap;

use async_trait::async_trait;
use moka::future::Cache;
use tracing::debug;

use notify_core::config::store::MemoryStoreConfig;
use notify_core::error::{AppError, ErrorKind};
use notify_core::result::AppResult;
use notify_core::traits::document_store::DocumentStore;
use notify_core::types::fields::FieldSet;

/// Documents to preload, keyed by collection and then document ID.
pub type SeedDocuments = BTreeMap<String, BTreeMap<String, FieldSet>>;

/// In-memory document store.
///
/// Documents never expire; capacity is bounded by `max_capacity`.
#[derive(Debug, Clone)]
pub struct MemoryDocumentStore {
    /// Documents keyed by `collection/id`.
    documents: Cache<String, FieldSet>,
}

impl MemoryDocumentStore {
    /// Create a new in-memory store from configuration.
    pub fn new(config: &MemoryStoreConfig) -> Self {
        let documents = Cache::builder().max_capacity(config.max_capacity).build();
        Self { documents }
    }

    /// Insert or replace a document.
    pub async fn put(&self, collection: &str, id: &str, fields: FieldSet) {
        self.documents.insert(document_key(collection, id), fields).await;
        debug!(collection, id, "Stored document");
    }

    /// Remove a document, if present.
    pub async fn remove(&self, collection: &str, id: &str) {
        self.documents.remove(&document_key(collection, id)).await;
    }

    /// Insert every seed document. Returns the number inserted.
    pub async fn seed(&self, seed: SeedDocuments) -> usize {
        let mut count = 0;
        for (collection, documents) in seed {
            for (id, fields) in documents {
                self.put(&collection, &id, fields).await;
                count += 1;
            }
        }
        count
    }

    /// Load seed documents from a JSON file shaped `{collection: {id: fields}}`.
    pub async fn load_seed_file(&self, path: &str) -> AppResult<usize> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Failed to read seed file '{path}': {e}"),
                e,
            )
        })?;
        let seed: SeedDocuments = serde_json::from_str(&raw).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid seed file '{path}': {e}"),
                e,
            )
        })?;
        Ok(self.seed(seed).await)
    }
}

fn document_key(collection: &str, id: &str) -> String {
    format!("{collection}/{id}")
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<FieldSet>> {
        Ok(self.documents.get(&document_key(collection, id)).await)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
