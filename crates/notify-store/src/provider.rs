//! Store manager that dispatches to the configured provider.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use notify_core::config::store::StoreConfig;
use notify_core::error::AppError;
use notify_core::result::AppResult;
use notify_core::traits::document_store::DocumentStore;
use notify_core::types::fields::FieldSet;

/// Store manager that wraps the configured document store provider.
#[derive(Debug, Clone)]
pub struct StoreManager {
    /// The inner store provider.
    inner: Arc<dyn DocumentStore>,
}

impl StoreManager {
    /// Create a new store manager from configuration.
    ///
    /// The memory provider loads `store.memory.seed_file` when one is set.
    pub async fn new(config: &StoreConfig) -> AppResult<Self> {
        let inner: Arc<dyn DocumentStore> = match config.provider.as_str() {
            #[cfg(feature = "firestore")]
            "firestore" => {
                info!(
                    project_id = %config.firestore.project_id,
                    database = %config.firestore.database,
                    "Initializing Firestore document store"
                );
                Arc::new(crate::firestore::FirestoreStore::new(&config.firestore)?)
            }
            #[cfg(feature = "memory")]
            "memory" => {
                info!("Initializing in-memory document store");
                let store = crate::memory::MemoryDocumentStore::new(&config.memory);
                if let Some(path) = &config.memory.seed_file {
                    let count = store.load_seed_file(path).await?;
                    info!(path = %path, count, "Seeded in-memory document store");
                }
                Arc::new(store)
            }
            other => {
                return Err(AppError::configuration(format!(
                    "Unknown store provider: '{other}'. Supported: memory, firestore"
                )));
            }
        };

        Ok(Self { inner })
    }

    /// Create a store manager from an existing provider (for testing).
    pub fn from_provider(provider: Arc<dyn DocumentStore>) -> Self {
        Self { inner: provider }
    }
}

#[async_trait]
impl DocumentStore for StoreManager {
    fn provider_type(&self) -> &str {
        self.inner.provider_type()
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<FieldSet>> {
        self.inner.get(collection, id).await
    }

    async fn health_check(&self) -> AppResult<bool> {
        self.inner.health_check().await
    }
}
