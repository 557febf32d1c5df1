//! Settings error types.

/// Result alias for settings operations.
pub type Result<T> = std::result::Result<T, SettingsError>;

/// Errors raised while loading or parsing settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// Settings file could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Settings file is not valid JSON.
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        /// Path that failed to parse.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
