//! Document store configuration.

use serde::{Deserialize, Serialize};

/// Top-level document store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store provider type: `"memory"` or `"firestore"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Collection holding user records (push tokens).
    #[serde(default = "default_users_collection")]
    pub users_collection: String,
    /// Collection whose lifecycle events trigger notifications.
    #[serde(default = "default_bookings_collection")]
    pub bookings_collection: String,
    /// Firestore REST backend configuration.
    #[serde(default)]
    pub firestore: FirestoreConfig,
    /// In-memory backend configuration.
    #[serde(default)]
    pub memory: MemoryStoreConfig,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            users_collection: default_users_collection(),
            bookings_collection: default_bookings_collection(),
            firestore: FirestoreConfig::default(),
            memory: MemoryStoreConfig::default(),
        }
    }
}

/// Firestore REST API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FirestoreConfig {
    /// Google Cloud project ID.
    #[serde(default)]
    pub project_id: String,
    /// Database ID within the project.
    #[serde(default = "default_database")]
    pub database: String,
    /// REST API base URL (overridable for the emulator).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// OAuth2 bearer token; empty when talking to the emulator.
    #[serde(default)]
    pub access_token: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for FirestoreConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            database: default_database(),
            base_url: default_base_url(),
            access_token: String::new(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

/// In-memory store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryStoreConfig {
    /// Maximum number of documents held.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: u64,
    /// JSON file of `{collection: {id: fields}}` loaded at startup.
    #[serde(default)]
    pub seed_file: Option<String>,
}

impl Default for MemoryStoreConfig {
    fn default() -> Self {
        Self {
            max_capacity: default_max_capacity(),
            seed_file: None,
        }
    }
}

fn default_provider() -> String {
    "memory".to_string()
}

fn default_users_collection() -> String {
    "users".to_string()
}

fn default_bookings_collection() -> String {
    "bookings".to_string()
}

fn default_database() -> String {
    "(default)".to_string()
}

fn default_base_url() -> String {
    "https://firestore.googleapis.com/v1".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_max_capacity() -> u64 {
    10000
}
