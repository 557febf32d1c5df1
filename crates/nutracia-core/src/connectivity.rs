//! Connectivity status for the startup API probe.

use serde::{Deserialize, Serialize};

/// Result of the one-shot API connectivity probe.
///
/// Starts as [`Checking`](Self::Checking) and resolves exactly once to
/// [`Connected`](Self::Connected) or [`Failed`](Self::Failed). A resolved
/// status never reverts to `Checking`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConnectivityStatus {
    /// Probe has not resolved yet.
    #[default]
    Checking,
    /// Probe returned HTTP 200.
    Connected,
    /// Probe failed (transport error or non-200).
    Failed,
}

impl ConnectivityStatus {
    /// Whether the probe has resolved (successfully or not).
    #[must_use]
    pub fn is_resolved(self) -> bool {
        self != Self::Checking
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
