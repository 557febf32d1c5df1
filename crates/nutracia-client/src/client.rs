//! The Backend API client.
//!
//! One method per consumed endpoint. Every call is single-attempt with no
//! retry and no timeout beyond the transport default; failures surface as
//! [`ClientError`] and the orchestrator decides what the UI sees.

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::errors::{ClientError, Result, parse_error_body};
use crate::types::{
    Ack, AuthResponse, CartSyncRequest, CartSyncResponse, ChatRequest, ChatResponse,
    DashboardResponse, LoginRequest, ProfileResponse, ProfileUpdate, SignupRequest,
};

/// HTTP client for the Nutracía Backend API.
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a new client for the given base URL.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    /// Create a new client sharing an existing `reqwest::Client`.
    #[must_use]
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            let _ = base_url.pop();
        }
        Self { base_url, client }
    }

    /// The configured base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Connectivity probe: `GET /`.
    ///
    /// Succeeds only on HTTP 200; the body is ignored.
    #[instrument(skip_all, fields(base_url = %self.base_url))]
    pub async fn health(&self) -> Result<()> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await?;
        let status = response.status();
        if status.as_u16() == 200 {
            debug!("health probe ok");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "health probe returned non-200");
            Err(ClientError::Api {
                status: status.as_u16(),
                message: parse_error_body(&body, status.as_u16()),
            })
        }
    }

    /// Create an account: `POST /api/signup`.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse> {
        self.send_json(Method::POST, "/api/signup", None, Some(request))
            .await
    }

    /// Exchange credentials for a token: `POST /api/login`.
    #[instrument(skip_all, fields(email = %request.email))]
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse> {
        self.send_json(Method::POST, "/api/login", None, Some(request))
            .await
    }

    /// Ask the wellness AI a question: `POST /api/chat/ai` (bearer).
    #[instrument(skip_all, fields(user_id = %request.user_id))]
    pub async fn chat(&self, token: &str, request: &ChatRequest) -> Result<ChatResponse> {
        self.send_json(Method::POST, "/api/chat/ai", Some(token), Some(request))
            .await
    }

    /// Fetch a user profile: `GET /api/profile/{user_id}` (bearer).
    #[instrument(skip_all, fields(user_id))]
    pub async fn profile(&self, token: &str, user_id: &str) -> Result<ProfileResponse> {
        self.send_json::<(), _>(
            Method::GET,
            &format!("/api/profile/{user_id}"),
            Some(token),
            None,
        )
        .await
    }

    /// Merge profile changes: `PUT /api/profile/{user_id}` (bearer).
    #[instrument(skip_all, fields(user_id))]
    pub async fn update_profile(
        &self,
        token: &str,
        user_id: &str,
        update: &ProfileUpdate,
    ) -> Result<Ack> {
        self.send_json(
            Method::PUT,
            &format!("/api/profile/{user_id}"),
            Some(token),
            Some(update),
        )
        .await
    }

    /// Fetch the dashboard summary: `GET /api/dashboard/{user_id}` (bearer).
    #[instrument(skip_all, fields(user_id))]
    pub async fn dashboard(&self, token: &str, user_id: &str) -> Result<DashboardResponse> {
        self.send_json::<(), _>(
            Method::GET,
            &format!("/api/dashboard/{user_id}"),
            Some(token),
            None,
        )
        .await
    }

    /// Replace the server-side cart: `POST /api/cart/sync` (bearer).
    #[instrument(skip_all, fields(user_id = %request.user_id, items = request.items.len()))]
    pub async fn sync_cart(&self, token: &str, request: &CartSyncRequest) -> Result<CartSyncResponse> {
        self.send_json(Method::POST, "/api/cart/sync", Some(token), Some(request))
            .await
    }

    /// Issue one request and decode the success body, or map the error
    /// body into [`ClientError::Api`].
    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<&B>,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{path}", self.base_url);
        let mut builder: RequestBuilder = self.client.request(method, &url);
        if let Some(token) = token {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let message = parse_error_body(&body_text, status.as_u16());
            warn!(%url, status = status.as_u16(), %message, "api call failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json::<T>().await?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
