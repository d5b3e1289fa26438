//! Push provider configuration.

use serde::{Deserialize, Serialize};

/// Top-level push provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PushConfig {
    /// Push provider type: `"fcm"` or `"log"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Sound hint attached to payloads that request one.
    #[serde(default = "default_sound")]
    pub default_sound: String,
    /// Firebase Cloud Messaging settings.
    #[serde(default)]
    pub fcm: FcmConfig,
}

impl Default for PushConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            default_sound: default_sound(),
            fcm: FcmConfig::default(),
        }
    }
}

/// Firebase Cloud Messaging HTTP configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FcmConfig {
    /// Send endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Server key used in the `Authorization: key=...` header.
    #[serde(default)]
    pub server_key: String,
    /// Request timeout in seconds.
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for FcmConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            server_key: String::new(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_provider() -> String {
    "log".to_string()
}

fn default_sound() -> String {
    "default".to_string()
}

fn default_endpoint() -> String {
    "https://fcm.googleapis.com/fcm/send".to_string()
}

fn default_request_timeout() -> u64 {
    10
}
