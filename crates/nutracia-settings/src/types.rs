//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` for the JSON file
//! format. Each type implements [`Default`] with production default values,
//! and `#[serde(default)]` allows partial JSON; missing fields get their
//! default during deserialization.

use serde::{Deserialize, Serialize};

/// Default Backend API base URL (the backend's local bind address).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8001";

/// Root settings type for the Nutracía demo client.
///
/// Loaded from `~/.nutracia/settings.json` with defaults applied for
/// missing fields. `NUTRACIA_*` environment variables override specific
/// values.
///
/// # JSON Format
///
/// All field names are camelCase. Example:
///
/// ```json
/// {
///   "version": "0.1.0",
///   "api": { "baseUrl": "https://api.nutracia.example" }
/// }
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutraciaSettings {
    /// Settings schema version.
    pub version: String,
    /// Application name.
    pub name: String,
    /// Backend API settings.
    pub api: ApiSettings,
    /// Session store settings.
    pub storage: StorageSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for NutraciaSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            name: "nutracia".to_string(),
            api: ApiSettings::default(),
            storage: StorageSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl NutraciaSettings {
    /// Correct invalid values instead of rejecting them.
    ///
    /// Called automatically during loading. An empty base URL would make
    /// every request fail to build, so it is replaced with the default
    /// with a warning.
    pub fn validate(&mut self) {
        if self.api.base_url.trim().is_empty() {
            tracing::warn!("api.baseUrl is empty, falling back to {DEFAULT_API_BASE_URL}");
            self.api.base_url = DEFAULT_API_BASE_URL.to_string();
        }
        // Trailing slashes would double up when paths are appended.
        while self.api.base_url.ends_with('/') {
            let _ = self.api.base_url.pop();
        }
    }
}

/// Backend API settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// Base URL of the Backend API (the single configuration value the
    /// orchestrator consumes to address it).
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Session store settings.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StorageSettings {
    /// Override for the session store file path. When `None`, the store
    /// lives at `~/.nutracia/store.json`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_path: Option<String>,
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default tracing filter when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of the human-readable format.
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
