//! Session and authentication state types.
//!
//! A [`Session`] is either fully present (token and profile restored or
//! created together) or fully absent. The durable half is a
//! [`StoredProfile`] plus a raw token string, persisted under two
//! independent keys by the session store.

use serde::{Deserialize, Serialize};

/// Authentication state of the orchestrator.
///
/// Transitions:
/// - `Anonymous → Authenticating` when onboarding starts a signup
/// - `Authenticating → Authenticated` when the signup succeeds
/// - `Authenticating → Anonymous` when the signup fails
/// - `Anonymous → Authenticated` when a persisted session restores at startup
///
/// `Authenticated` is terminal for the lifetime of the instance; no logout
/// operation is exposed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthState {
    /// No session held.
    #[default]
    Anonymous,
    /// Demo signup in flight.
    Authenticating,
    /// Session held (bootstrapped or restored).
    Authenticated,
}

/// Which surface the embedding shell should render.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    /// Marketing/landing surface with the "Get Started" affordance.
    #[default]
    Landing,
    /// Chat surface.
    Chat,
}

/// The authenticated identity held in memory by the orchestrator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Server-assigned user identifier.
    pub user_id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Bearer token for authenticated calls.
    pub auth_token: String,
}

/// The durable profile half of a session, serialized under the `user` key.
///
/// Field names match the backend's signup payload so the stored object
/// reads the same as what was sent at account creation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredProfile {
    /// Server-assigned user identifier.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Selected wellness goal tags.
    pub health_goals: Vec<String>,
}

impl Session {
    /// Reconstruct a session from its two persisted halves.
    #[must_use]
    pub fn from_parts(token: impl Into<String>, profile: &StoredProfile) -> Self {
        Self {
            user_id: profile.id.clone(),
            email: profile.email.clone(),
            name: profile.name.clone(),
            auth_token: token.into(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
