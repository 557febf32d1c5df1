//! Client error types and API error-body decoding.

/// Result alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors raised by Backend API calls.
///
/// Every call is single-attempt: a failure here is terminal for that call
/// and is converted by the orchestrator into a UI-visible signal, never
/// retried.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connect, DNS, timeout, body read).
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },
}

impl ClientError {
    /// Whether this is an API-level error with the given status.
    #[must_use]
    pub fn is_status(&self, status: u16) -> bool {
        matches!(self, Self::Api { status: s, .. } if *s == status)
    }
}

/// Extract a human-readable message from a backend error body.
///
/// The backend wraps errors as `{"detail": "..."}`; anything else falls
/// back to the raw text, or to the status code when the body is empty.
#[must_use]
pub fn parse_error_body(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(serde_json::Value::as_str) {
            return detail.to_string();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("HTTP {status}")
    } else {
        trimmed.to_string()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
