//! The Session Orchestrator.
//!
//! Mediates between UI-triggered intents and the Backend API, owns the
//! observable [`OrchestratorState`], and enforces ordering between
//! dependent calls. Every network operation is single-attempt; failures
//! degrade to visible state, never to a crash and never to a retry.

use std::path::PathBuf;
use std::sync::Arc;

use metrics::counter;
use tokio::sync::watch;
use tracing::{debug, info, instrument, warn};

use nutracia_client::{ApiClient, ChatRequest, SignupRequest};
use nutracia_core::chat::CHAT_FALLBACK_RESPONSE;
use nutracia_core::connectivity::ConnectivityStatus;
use nutracia_core::identity::DemoIdentity;
use nutracia_core::session::{AuthState, Session, StoredProfile, View};
use nutracia_settings::NutraciaSettings;

use crate::errors::SessionError;
use crate::state::{
    ChatOutcome, ONBOARDING_FAILURE_MESSAGE, OnboardingOutcome, OrchestratorState,
};
use crate::store::{FileStore, KeyValueStore, TOKEN_KEY, USER_KEY};

/// Outcome of trying to claim the loading flag for a chat submission.
enum Claim {
    Granted(Session),
    Denied(ChatOutcome),
}

/// Coordinates the connectivity probe, the demo-session bootstrap, and
/// authenticated chat exchanges.
///
/// State is published through a `watch` channel: [`Self::subscribe`]
/// observes every transition, [`Self::state`] takes a one-off snapshot.
pub struct SessionOrchestrator {
    client: ApiClient,
    store: Arc<dyn KeyValueStore>,
    state: watch::Sender<OrchestratorState>,
}

impl SessionOrchestrator {
    /// Create an orchestrator from an API client and a persistence
    /// capability.
    #[must_use]
    pub fn new(client: ApiClient, store: Arc<dyn KeyValueStore>) -> Self {
        let (state, _) = watch::channel(OrchestratorState::default());
        Self {
            client,
            store,
            state,
        }
    }

    /// Create an orchestrator wired from settings: API client at
    /// `api.baseUrl`, file store at `storage.storePath` (default
    /// `~/.nutracia/store.json`).
    #[must_use]
    pub fn from_settings(settings: &NutraciaSettings) -> Self {
        let store_path = settings.storage.store_path.as_ref().map_or_else(
            || nutracia_settings::loader::config_dir().join("store.json"),
            PathBuf::from,
        );
        Self::new(
            ApiClient::new(settings.api.base_url.clone()),
            Arc::new(FileStore::new(store_path)),
        )
    }

    /// Observe every state transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<OrchestratorState> {
        self.state.subscribe()
    }

    /// A snapshot of the current state.
    #[must_use]
    pub fn state(&self) -> OrchestratorState {
        self.state.borrow().clone()
    }

    /// Startup sequence: restore any persisted session and probe the
    /// backend. The two are independent of each other; the probe runs
    /// regardless of what the restore found.
    ///
    /// Returns the restore result. A malformed persisted profile is the
    /// one condition the embedding shell must decide about (the
    /// orchestrator itself stays `Anonymous`).
    pub async fn startup(&self) -> Result<(), SessionError> {
        let restored = self.restore_session();
        self.probe_connectivity().await;
        restored
    }

    /// One-shot connectivity probe against the API root.
    ///
    /// HTTP 200 resolves the status to `Connected`; any failure resolves
    /// it to `Failed`. Single attempt, no retry: this feeds a UI
    /// affordance, not a reliability-critical path. Called once at
    /// startup.
    #[instrument(skip_all)]
    pub async fn probe_connectivity(&self) {
        let status = match self.client.health().await {
            Ok(()) => {
                info!("backend reachable");
                ConnectivityStatus::Connected
            }
            Err(e) => {
                warn!(error = %e, "connectivity probe failed");
                ConnectivityStatus::Failed
            }
        };
        self.state.send_modify(|state| state.connectivity = status);
    }

    /// Restore a persisted session, if both halves are present.
    ///
    /// Reads the `token` and `user` keys; when either is absent the
    /// orchestrator stays `Anonymous` with no error. A present but
    /// malformed profile raises [`SessionError::ProfileParse`]. No
    /// network call is made.
    #[instrument(skip_all)]
    pub fn restore_session(&self) -> Result<(), SessionError> {
        let token = self.store.get(TOKEN_KEY)?;
        let profile_json = self.store.get(USER_KEY)?;
        let (Some(token), Some(profile_json)) = (token, profile_json) else {
            debug!("no persisted session");
            return Ok(());
        };

        let profile: StoredProfile =
            serde_json::from_str(&profile_json).map_err(SessionError::ProfileParse)?;
        let session = Session::from_parts(token, &profile);
        info!(user_id = %session.user_id, "session restored");
        self.state.send_modify(|state| {
            state.session = Some(session);
            state.auth = AuthState::Authenticated;
        });
        Ok(())
    }

    /// Handle the "Get Started" intent.
    ///
    /// Already authenticated → reveal the chat surface without any
    /// network call. Otherwise bootstrap a demo session.
    #[instrument(skip_all)]
    pub async fn begin_onboarding(&self) -> OnboardingOutcome {
        let authenticated = self.state.borrow().is_authenticated();
        if authenticated {
            debug!("already authenticated, revealing chat surface");
            self.state.send_modify(|state| state.view = View::Chat);
            return OnboardingOutcome::ChatReady;
        }
        self.bootstrap_demo_session().await
    }

    /// Create a fresh demo account and establish a session from it.
    ///
    /// Every unauthenticated "Get Started" lands here and creates a
    /// brand-new backend account, with no rate limit or confirmation in
    /// front of it. On success the token and profile are persisted (two
    /// independent writes) and the view moves to `Chat`; on failure
    /// nothing changes and the caller gets the one-shot notification
    /// text.
    #[instrument(skip_all)]
    pub async fn bootstrap_demo_session(&self) -> OnboardingOutcome {
        let mut granted = false;
        let _ = self.state.send_if_modified(|state| {
            if state.loading {
                return false;
            }
            state.loading = true;
            state.auth = AuthState::Authenticating;
            granted = true;
            true
        });
        if !granted {
            debug!("onboarding already in flight");
            return OnboardingOutcome::InFlight;
        }

        let identity = DemoIdentity::generate();
        warn!(email = %identity.email, "creating a new demo account");

        match self
            .client
            .signup(&SignupRequest::from(identity.clone()))
            .await
        {
            Ok(resp) => {
                counter!("demo_signup_total", "status" => "success").increment(1);
                let token = resp.access_token;
                let profile = identity.into_profile(resp.user_id);
                self.persist_session(&token, &profile);
                let session = Session::from_parts(token, &profile);
                info!(user_id = %session.user_id, "demo session established");
                self.state.send_modify(|state| {
                    state.session = Some(session);
                    state.auth = AuthState::Authenticated;
                    state.view = View::Chat;
                    state.loading = false;
                });
                OnboardingOutcome::ChatReady
            }
            Err(e) => {
                counter!("demo_signup_total", "status" => "failure").increment(1);
                warn!(error = %e, "demo signup failed");
                self.state.send_modify(|state| {
                    state.auth = AuthState::Anonymous;
                    state.loading = false;
                });
                OnboardingOutcome::Failed {
                    message: ONBOARDING_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }

    /// Submit a chat question to the wellness AI.
    ///
    /// Guards, in order: an exchange already in flight is rejected; text
    /// that is empty after trimming is a no-op; an unauthenticated
    /// session is a no-op. Callers are expected to disable the affordance
    /// rather than rely on these guards, but they hold regardless.
    ///
    /// On success the exchange holds the reply and the pending request
    /// text is cleared; on failure the exchange holds the fixed fallback
    /// so the transcript is never left blank.
    #[instrument(skip_all)]
    pub async fn submit_chat_message(&self, text: &str) -> ChatOutcome {
        let trimmed = text.trim();
        let mut claim = Claim::Denied(ChatOutcome::RejectedBusy);
        let _ = self.state.send_if_modified(|state| {
            if state.loading {
                claim = Claim::Denied(ChatOutcome::RejectedBusy);
                return false;
            }
            if trimmed.is_empty() {
                claim = Claim::Denied(ChatOutcome::IgnoredEmpty);
                return false;
            }
            let Some(session) = state.session.clone() else {
                claim = Claim::Denied(ChatOutcome::IgnoredUnauthenticated);
                return false;
            };
            state.loading = true;
            state.exchange.request = trimmed.to_string();
            claim = Claim::Granted(session);
            true
        });
        let session = match claim {
            Claim::Granted(session) => session,
            Claim::Denied(outcome) => {
                debug!(?outcome, "chat submission not sent");
                return outcome;
            }
        };

        let request = ChatRequest {
            message: trimmed.to_string(),
            user_id: session.user_id.clone(),
        };
        match self.client.chat(&session.auth_token, &request).await {
            Ok(resp) => {
                counter!("chat_requests_total", "status" => "success").increment(1);
                self.state.send_modify(|state| {
                    state.exchange.response = resp.response;
                    state.exchange.request.clear();
                    state.loading = false;
                });
                ChatOutcome::Answered
            }
            Err(e) => {
                counter!("chat_requests_total", "status" => "fallback").increment(1);
                warn!(error = %e, "chat request failed, substituting fallback reply");
                self.state.send_modify(|state| {
                    state.exchange.response = CHAT_FALLBACK_RESPONSE.to_string();
                    state.loading = false;
                });
                ChatOutcome::FallbackShown
            }
        }
    }

    /// Persist the two halves of a session.
    ///
    /// Two independent writes under fixed keys; a failure of either is
    /// logged and the in-memory session proceeds; the account already
    /// exists on the backend.
    fn persist_session(&self, token: &str, profile: &StoredProfile) {
        if let Err(e) = self.store.set(TOKEN_KEY, token) {
            warn!(error = %e, "failed to persist session token");
        }
        match serde_json::to_string(profile) {
            Ok(json) => {
                if let Err(e) = self.store.set(USER_KEY, &json) {
                    warn!(error = %e, "failed to persist session profile");
                }
            }
            Err(e) => warn!(error = %e, "failed to serialize session profile"),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use assert_matches::assert_matches;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn orchestrator_for(server_uri: &str) -> (SessionOrchestrator, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let shared: Arc<dyn KeyValueStore> = store.clone();
        let orchestrator = SessionOrchestrator::new(ApiClient::new(server_uri), shared);
        (orchestrator, store)
    }

    fn seed_session(store: &MemoryStore, token: &str, user_id: &str) {
        store.set(TOKEN_KEY, token).unwrap();
        store
            .set(
                USER_KEY,
                &serde_json::to_string(&StoredProfile {
                    id: user_id.into(),
                    email: "demo1@nutracia.com".into(),
                    name: "Demo User".into(),
                    age: 30,
                    health_goals: vec!["Weight Management".into()],
                })
                .unwrap(),
            )
            .unwrap();
    }

    // ── restore_session ──────────────────────────────────────────────────

    #[test]
    fn restore_with_no_persisted_session_stays_anonymous() {
        let (orchestrator, _store) = orchestrator_for("http://localhost:0");
        orchestrator.restore_session().unwrap();
        let state = orchestrator.state();
        assert_eq!(state.auth, AuthState::Anonymous);
        assert!(state.session.is_none());
    }

    #[test]
    fn restore_with_both_halves_authenticates_with_exact_fields() {
        let (orchestrator, store) = orchestrator_for("http://localhost:0");
        seed_session(&store, "abc", "u-1");
        orchestrator.restore_session().unwrap();
        let state = orchestrator.state();
        assert_eq!(state.auth, AuthState::Authenticated);
        let session = state.session.unwrap();
        assert_eq!(session.user_id, "u-1");
        assert_eq!(session.email, "demo1@nutracia.com");
        assert_eq!(session.name, "Demo User");
        assert_eq!(session.auth_token, "abc");
    }

    #[test]
    fn restore_with_token_only_stays_anonymous() {
        let (orchestrator, store) = orchestrator_for("http://localhost:0");
        store.set(TOKEN_KEY, "abc").unwrap();
        orchestrator.restore_session().unwrap();
        assert_eq!(orchestrator.state().auth, AuthState::Anonymous);
    }

    #[test]
    fn restore_with_malformed_profile_errors_and_stays_anonymous() {
        let (orchestrator, store) = orchestrator_for("http://localhost:0");
        store.set(TOKEN_KEY, "abc").unwrap();
        store.set(USER_KEY, "{not json").unwrap();
        let err = orchestrator.restore_session().unwrap_err();
        assert_matches!(err, SessionError::ProfileParse(_));
        assert_eq!(orchestrator.state().auth, AuthState::Anonymous);
    }

    // ── probe_connectivity ───────────────────────────────────────────────

    #[tokio::test]
    async fn probe_resolves_to_connected_on_200() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let (orchestrator, _store) = orchestrator_for(&server.uri());
        assert_eq!(
            orchestrator.state().connectivity,
            ConnectivityStatus::Checking
        );
        orchestrator.probe_connectivity().await;
        assert_eq!(
            orchestrator.state().connectivity,
            ConnectivityStatus::Connected
        );
    }

    #[tokio::test]
    async fn probe_resolves_to_failed_on_500() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let (orchestrator, _store) = orchestrator_for(&server.uri());
        orchestrator.probe_connectivity().await;
        assert_eq!(
            orchestrator.state().connectivity,
            ConnectivityStatus::Failed
        );
    }

    // ── submit_chat_message guards ───────────────────────────────────────

    #[tokio::test]
    async fn empty_message_is_a_no_op() {
        // No mock server mounted: any HTTP call would error the test.
        let (orchestrator, store) = orchestrator_for("http://localhost:0");
        seed_session(&store, "abc", "u-1");
        orchestrator.restore_session().unwrap();

        let before = orchestrator.state();
        let outcome = orchestrator.submit_chat_message("   ").await;
        assert_eq!(outcome, ChatOutcome::IgnoredEmpty);
        assert_eq!(orchestrator.state(), before);
    }

    #[tokio::test]
    async fn unauthenticated_message_is_a_no_op() {
        let (orchestrator, _store) = orchestrator_for("http://localhost:0");
        let before = orchestrator.state();
        let outcome = orchestrator
            .submit_chat_message("What should I eat?")
            .await;
        assert_eq!(outcome, ChatOutcome::IgnoredUnauthenticated);
        assert_eq!(orchestrator.state(), before);
    }

    // ── bootstrap ────────────────────────────────────────────────────────

    #[tokio::test]
    async fn bootstrap_failure_leaves_state_unchanged() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/signup"))
            .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
                "detail": "Failed to create user"
            })))
            .mount(&server)
            .await;

        let (orchestrator, store) = orchestrator_for(&server.uri());
        let outcome = orchestrator.begin_onboarding().await;
        assert_matches!(outcome, OnboardingOutcome::Failed { ref message } => {
            assert_eq!(message, ONBOARDING_FAILURE_MESSAGE);
        });

        let state = orchestrator.state();
        assert_eq!(state.auth, AuthState::Anonymous);
        assert_eq!(state.view, View::Landing);
        assert!(!state.loading);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn onboarding_when_already_authenticated_skips_network() {
        // No signup mock: a network call would fail the flow.
        let (orchestrator, store) = orchestrator_for("http://localhost:0");
        seed_session(&store, "abc", "u-1");
        orchestrator.restore_session().unwrap();

        let outcome = orchestrator.begin_onboarding().await;
        assert_eq!(outcome, OnboardingOutcome::ChatReady);
        assert_eq!(orchestrator.state().view, View::Chat);
    }
}
