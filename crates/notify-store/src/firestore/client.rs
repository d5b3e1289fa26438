//! Firestore REST client implementing [`DocumentStore`].

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use notify_core::config::store::FirestoreConfig;
use notify_core::error::{AppError, ErrorKind};
use notify_core::result::AppResult;
use notify_core::traits::document_store::DocumentStore;
use notify_core::types::fields::FieldSet;

use super::value::FirestoreDocument;

/// Reads documents through the Firestore `documents.get` REST endpoint.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    client: Client,
    /// `{base_url}/projects/{project}/databases/{database}/documents`
    documents_url: Url,
    access_token: Option<String>,
}

impl FirestoreStore {
    /// Create a new Firestore store from configuration.
    pub fn new(config: &FirestoreConfig) -> AppResult<Self> {
        if config.project_id.is_empty() {
            return Err(AppError::configuration(
                "store.firestore.project_id is required for the firestore provider",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build Firestore HTTP client: {e}"),
                    e,
                )
            })?;

        let mut documents_url = Url::parse(&config.base_url).map_err(|e| {
            AppError::with_source(
                ErrorKind::Configuration,
                format!("Invalid store.firestore.base_url '{}': {e}", config.base_url),
                e,
            )
        })?;
        documents_url
            .path_segments_mut()
            .map_err(|_| {
                AppError::configuration(format!(
                    "store.firestore.base_url '{}' cannot carry a path",
                    config.base_url
                ))
            })?
            .pop_if_empty()
            .extend([
                "projects",
                config.project_id.as_str(),
                "databases",
                config.database.as_str(),
                "documents",
            ]);

        Ok(Self {
            client,
            documents_url,
            access_token: Some(config.access_token.clone()).filter(|t| !t.is_empty()),
        })
    }

    /// Each segment is percent-encoded, so IDs containing `?`, `#`, `%` or
    /// `/` address exactly one document.
    fn document_url(&self, collection: &str, id: &str) -> AppResult<Url> {
        let mut url = self.documents_url.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::store(format!("Cannot address {collection}/{id}")))?
            .extend(collection.split('/'))
            .push(id);
        Ok(url)
    }
}

#[async_trait]
impl DocumentStore for FirestoreStore {
    fn provider_type(&self) -> &str {
        "firestore"
    }

    async fn get(&self, collection: &str, id: &str) -> AppResult<Option<FieldSet>> {
        let url = self.document_url(collection, id)?;

        let mut request = self.client.get(url);
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Store,
                format!("Firestore request for {collection}/{id} failed: {e}"),
                e,
            )
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            debug!(collection, id, "Firestore document not found");
            return Ok(None);
        }
        if !status.is_success() {
            return Err(AppError::store(format!(
                "Firestore returned {status} for {collection}/{id}"
            )));
        }

        let document: FirestoreDocument = response.json().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Serialization,
                format!("Malformed Firestore document {collection}/{id}: {e}"),
                e,
            )
        })?;

        debug!(collection, id, name = %document.name, "Fetched Firestore document");
        Ok(Some(document.into_field_set()))
    }

    async fn health_check(&self) -> AppResult<bool> {
        let mut request = self.client.get(self.documents_url.clone());
        if let Some(token) = &self.access_token {
            request = request.bearer_auth(token);
        }
        match request.send().await {
            Ok(response) => Ok(!response.status().is_server_error()),
            Err(_) => Ok(false),
        }
    }
}
