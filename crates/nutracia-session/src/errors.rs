//! Session and store error types.

/// Errors raised by the key-value persistence capability.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Store file could not be read or written.
    #[error("store io error at {path}: {source}")]
    Io {
        /// Store file path.
        path: String,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Store file contents are not a valid JSON object.
    #[error("store file {path} is corrupt: {source}")]
    Corrupt {
        /// Store file path.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised by session orchestration.
///
/// Network failures never appear here; the orchestrator converts them
/// into UI-visible state at the call site. What remains is the persisted
/// state going bad underneath us.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The persisted profile under the `user` key is not valid JSON.
    #[error("persisted profile is malformed: {0}")]
    ProfileParse(#[source] serde_json::Error),

    /// The key-value store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
