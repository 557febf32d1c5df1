//! Wire types for the Backend API.
//!
//! Field names are snake_case on the wire; the backend defines the
//! format. Responses keep only the fields the client reads plus the
//! `message` acknowledgements the backend always includes.

use serde::{Deserialize, Serialize};

use nutracia_core::identity::DemoIdentity;

// ─────────────────────────────────────────────────────────────────────────────
// Auth
// ─────────────────────────────────────────────────────────────────────────────

/// Signup request body for `POST /api/signup`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SignupRequest {
    /// Account email (unique on the backend).
    pub email: String,
    /// Plaintext password (hashed server-side).
    pub password: String,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Age in years.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Wellness goal tags.
    #[serde(default)]
    pub health_goals: Vec<String>,
}

impl From<DemoIdentity> for SignupRequest {
    fn from(identity: DemoIdentity) -> Self {
        Self {
            email: identity.email,
            password: identity.password,
            name: Some(identity.name),
            age: Some(identity.age),
            health_goals: identity.health_goals,
        }
    }
}

/// Login request body for `POST /api/login`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Account email.
    pub email: String,
    /// Plaintext password.
    pub password: String,
}

/// Response shared by signup and login.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Server acknowledgement text.
    #[serde(default)]
    pub message: String,
    /// Server-assigned user identifier.
    pub user_id: String,
    /// Bearer token for authenticated calls.
    pub access_token: String,
    /// Token scheme, always `"bearer"`.
    #[serde(default)]
    pub token_type: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────────────────

/// Chat request body for `POST /api/chat/ai`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's question.
    pub message: String,
    /// The authenticated user's identifier.
    pub user_id: String,
}

/// Chat response.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Server acknowledgement text.
    #[serde(default)]
    pub message: String,
    /// The AI reply text, the only field the UI renders.
    pub response: String,
    /// Server-side generation time (ISO 8601, no timezone suffix).
    #[serde(default)]
    pub timestamp: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile
// ─────────────────────────────────────────────────────────────────────────────

/// Profile response for `GET /api/profile/{user_id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProfileResponse {
    /// User identifier.
    pub id: String,
    /// Account email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Age in years.
    #[serde(default)]
    pub age: Option<u32>,
    /// Wellness goal tags.
    #[serde(default)]
    pub health_goals: Vec<String>,
    /// Dietary preference tags.
    #[serde(default)]
    pub dietary_preferences: Vec<String>,
    /// Self-reported fitness level.
    #[serde(default)]
    pub fitness_level: Option<String>,
}

/// Partial profile update for `PUT /api/profile/{user_id}`.
///
/// Only set fields are sent; the backend merges them into the stored
/// profile.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New age.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Replacement goal tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health_goals: Option<Vec<String>>,
    /// Replacement dietary preference tags.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_preferences: Option<Vec<String>>,
    /// New fitness level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_level: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard
// ─────────────────────────────────────────────────────────────────────────────

/// Dashboard summary for `GET /api/dashboard/{user_id}`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// User identifier.
    pub user_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Wellness goal tags.
    #[serde(default)]
    pub health_goals: Vec<String>,
    /// Number of recent chat exchanges.
    #[serde(default)]
    pub recent_chats: u32,
    /// Number of items in the synced cart.
    #[serde(default)]
    pub cart_items_count: u32,
    /// Wellness tip of the day.
    #[serde(default)]
    pub daily_tip: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Cart
// ─────────────────────────────────────────────────────────────────────────────

/// One cart line item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Product display name.
    pub product_name: String,
    /// Product category tag.
    pub category: String,
    /// Unit price.
    pub price: f64,
    /// Quantity in cart.
    pub quantity: u32,
}

/// Cart sync request body for `POST /api/cart/sync`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartSyncRequest {
    /// The authenticated user's identifier.
    pub user_id: String,
    /// Full replacement cart contents.
    pub items: Vec<CartItem>,
}

/// Cart sync acknowledgement.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CartSyncResponse {
    /// Server acknowledgement text.
    #[serde(default)]
    pub message: String,
    /// Number of items the backend stored.
    #[serde(default)]
    pub items_count: u32,
}

/// Bare acknowledgement returned by mutation endpoints.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ack {
    /// Server acknowledgement text.
    #[serde(default)]
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
