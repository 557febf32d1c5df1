//! The orchestrator's observable state snapshot and per-operation
//! outcomes.

use serde::Serialize;

use nutracia_core::chat::ChatExchange;
use nutracia_core::connectivity::ConnectivityStatus;
use nutracia_core::session::{AuthState, Session, View};

/// One-shot notification text shown when the demo signup fails.
pub const ONBOARDING_FAILURE_MESSAGE: &str = "Failed to create demo user. Please try again.";

/// Everything a front-end shell needs to render, in one snapshot.
///
/// Published through a `tokio::sync::watch` channel; mutation happens only
/// inside the orchestrator, observers only read.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrchestratorState {
    /// Result of the startup API probe.
    pub connectivity: ConnectivityStatus,
    /// Authentication state machine position.
    pub auth: AuthState,
    /// Which surface to render.
    pub view: View,
    /// Current question/answer pair.
    pub exchange: ChatExchange,
    /// True while a network call triggered by a UI intent is in flight.
    /// Doubles as the double-submission debounce.
    pub loading: bool,
    /// The authenticated identity, when held.
    pub session: Option<Session>,
}

impl OrchestratorState {
    /// Whether a session is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.auth == AuthState::Authenticated
    }
}

/// Result of a "Get Started" intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OnboardingOutcome {
    /// The chat surface is ready (already authenticated, or the demo
    /// signup succeeded).
    ChatReady,
    /// The demo signup failed; `message` is the one-shot notification to
    /// show. State is unchanged and nothing was persisted.
    Failed {
        /// User-visible notification text.
        message: String,
    },
    /// An onboarding call is already in flight; nothing was done.
    InFlight,
}

/// Result of a chat submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChatOutcome {
    /// The backend replied; the exchange holds the response and the
    /// pending request text was cleared.
    Answered,
    /// The call failed; the exchange holds the fixed fallback text.
    FallbackShown,
    /// An exchange is already in flight; the submission was rejected.
    RejectedBusy,
    /// The message was empty after trimming; no call was issued.
    IgnoredEmpty,
    /// No session is held; no call was issued.
    IgnoredUnauthenticated,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
