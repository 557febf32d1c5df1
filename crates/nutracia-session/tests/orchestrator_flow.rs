//! End-to-end orchestration flows against a mock backend:
//! probe → bootstrap → chat, session restore across instances, and the
//! in-flight debounce.

#![allow(missing_docs)]

use std::sync::Arc;

use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nutracia_client::ApiClient;
use nutracia_core::chat::CHAT_FALLBACK_RESPONSE;
use nutracia_core::connectivity::ConnectivityStatus;
use nutracia_core::session::{AuthState, View};
use nutracia_session::{
    ChatOutcome, FileStore, KeyValueStore, MemoryStore, OnboardingOutcome, SessionOrchestrator,
    TOKEN_KEY, USER_KEY,
};

fn memory_orchestrator(uri: &str) -> (SessionOrchestrator, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let shared: Arc<dyn KeyValueStore> = store.clone();
    (
        SessionOrchestrator::new(ApiClient::new(uri), shared),
        store,
    )
}

async fn mount_healthy_backend(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "Nutracía API - Your Intelligent Wellness Companion"
        })))
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "User created successfully",
            "user_id": "u-demo",
            "access_token": "tok-demo",
            "token_type": "bearer"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn first_visit_flow_probe_bootstrap_chat() {
    let server = MockServer::start().await;
    mount_healthy_backend(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/chat/ai"))
        .and(header("authorization", "Bearer tok-demo"))
        .and(body_partial_json(serde_json::json!({"user_id": "u-demo"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "AI response generated",
            "response": "Eat protein.",
            "timestamp": "2026-08-07T09:00:00.000000"
        })))
        .mount(&server)
        .await;

    let (orchestrator, store) = memory_orchestrator(&server.uri());

    orchestrator.startup().await.unwrap();
    let state = orchestrator.state();
    assert_eq!(state.connectivity, ConnectivityStatus::Connected);
    assert_eq!(state.auth, AuthState::Anonymous);
    assert_eq!(state.view, View::Landing);

    let outcome = orchestrator.begin_onboarding().await;
    assert_eq!(outcome, OnboardingOutcome::ChatReady);
    let state = orchestrator.state();
    assert_eq!(state.auth, AuthState::Authenticated);
    assert_eq!(state.view, View::Chat);
    assert!(!state.loading);
    let session = state.session.expect("session after bootstrap");
    assert_eq!(session.user_id, "u-demo");
    assert_eq!(session.auth_token, "tok-demo");
    assert!(session.email.starts_with("demo"));
    assert!(session.email.ends_with("@nutracia.com"));

    // Both halves persisted under the fixed keys.
    assert_eq!(store.get(TOKEN_KEY).unwrap().as_deref(), Some("tok-demo"));
    let profile_json = store.get(USER_KEY).unwrap().expect("persisted profile");
    let profile: serde_json::Value = serde_json::from_str(&profile_json).unwrap();
    assert_eq!(profile["id"], "u-demo");
    assert!(profile.get("password").is_none());

    let outcome = orchestrator
        .submit_chat_message("What should I eat?")
        .await;
    assert_eq!(outcome, ChatOutcome::Answered);
    let state = orchestrator.state();
    assert_eq!(state.exchange.response, "Eat protein.");
    assert_eq!(state.exchange.request, "");
    assert!(!state.loading);
}

#[tokio::test]
async fn offline_backend_degrades_to_failed_probe() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let (orchestrator, _store) = memory_orchestrator(&server.uri());
    orchestrator.startup().await.unwrap();
    assert_eq!(
        orchestrator.state().connectivity,
        ConnectivityStatus::Failed
    );
}

#[tokio::test]
async fn session_restores_across_orchestrator_instances() {
    let server = MockServer::start().await;
    mount_healthy_backend(&server).await;

    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("store.json");

    // First visit: bootstrap persists the session to disk.
    {
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&store_path));
        let orchestrator = SessionOrchestrator::new(ApiClient::new(server.uri()), store);
        orchestrator.startup().await.unwrap();
        assert_eq!(
            orchestrator.begin_onboarding().await,
            OnboardingOutcome::ChatReady
        );
    }

    // Second visit: no signup call, the restored session goes straight to
    // the chat surface.
    let server2 = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server2)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/signup"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server2)
        .await;

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(&store_path));
    let orchestrator = SessionOrchestrator::new(ApiClient::new(server2.uri()), store);
    orchestrator.startup().await.unwrap();

    let state = orchestrator.state();
    assert_eq!(state.auth, AuthState::Authenticated);
    assert_eq!(state.session.as_ref().unwrap().user_id, "u-demo");

    assert_eq!(
        orchestrator.begin_onboarding().await,
        OnboardingOutcome::ChatReady
    );
    assert_eq!(orchestrator.state().view, View::Chat);
}

#[tokio::test]
async fn chat_failure_substitutes_fallback_and_keeps_request() {
    let server = MockServer::start().await;
    mount_healthy_backend(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/chat/ai"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "detail": "AI chat failed"
        })))
        .mount(&server)
        .await;

    let (orchestrator, _store) = memory_orchestrator(&server.uri());
    orchestrator.startup().await.unwrap();
    let _ = orchestrator.begin_onboarding().await;

    let outcome = orchestrator.submit_chat_message("Help me sleep").await;
    assert_eq!(outcome, ChatOutcome::FallbackShown);
    let state = orchestrator.state();
    assert_eq!(state.exchange.response, CHAT_FALLBACK_RESPONSE);
    // The pending request is only cleared on success.
    assert_eq!(state.exchange.request, "Help me sleep");
    assert!(!state.loading);
}

#[tokio::test]
async fn second_submission_while_loading_is_rejected() {
    let server = MockServer::start().await;
    mount_healthy_backend(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/chat/ai"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({
                    "message": "AI response generated",
                    "response": "Slow reply."
                }))
                .set_delay(std::time::Duration::from_millis(250)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let (orchestrator, _store) = memory_orchestrator(&server.uri());
    orchestrator.startup().await.unwrap();
    let _ = orchestrator.begin_onboarding().await;

    // The second submission lands while the first is still waiting on the
    // delayed mock response.
    let (first, second) = tokio::join!(
        orchestrator.submit_chat_message("first"),
        async {
            tokio::time::sleep(std::time::Duration::from_millis(100)).await;
            orchestrator.submit_chat_message("second").await
        }
    );

    assert_eq!(first, ChatOutcome::Answered);
    assert_eq!(second, ChatOutcome::RejectedBusy);
    let state = orchestrator.state();
    assert_eq!(state.exchange.response, "Slow reply.");
    assert!(!state.loading);
}

#[tokio::test]
async fn subscribers_observe_the_published_state() {
    let server = MockServer::start().await;
    mount_healthy_backend(&server).await;

    let (orchestrator, _store) = memory_orchestrator(&server.uri());
    let rx = orchestrator.subscribe();

    orchestrator.startup().await.unwrap();
    let _ = orchestrator.begin_onboarding().await;

    // The receiver sees the same snapshot the orchestrator reports.
    let observed = rx.borrow().clone();
    assert_eq!(observed, orchestrator.state());
    assert_eq!(observed.auth, AuthState::Authenticated);
    assert_eq!(observed.view, View::Chat);
}
