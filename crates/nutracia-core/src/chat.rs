//! Chat exchange types.
//!
//! One exchange is held at a time; each submission overwrites the previous
//! one. Nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Fixed reply substituted when the chat call fails.
///
/// The transcript is never left blank on error.
pub const CHAT_FALLBACK_RESPONSE: &str = "Sorry, I encountered an error. Please try again.";

/// The current question/answer pair shown on the chat surface.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatExchange {
    /// Pending request text. Cleared when a reply arrives successfully.
    pub request: String,
    /// Latest reply text (or the fixed fallback on failure).
    pub response: String,
}

impl ChatExchange {
    /// Whether a reply has been received for display.
    #[must_use]
    pub fn has_response(&self) -> bool {
        !self.response.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
