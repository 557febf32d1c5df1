//! # nutracia-client
//!
//! Typed HTTP client for the Nutracía Backend API.
//!
//! The Backend API is an external collaborator; this crate knows its
//! endpoints, wire shapes, and error-body format, and nothing else:
//!
//! - **Health**: `GET /` connectivity probe (status code only)
//! - **Auth**: `POST /api/signup`, `POST /api/login`
//! - **Chat**: `POST /api/chat/ai` with bearer auth
//! - **Profile**: `GET`/`PUT /api/profile/{user_id}`
//! - **Dashboard**: `GET /api/dashboard/{user_id}`
//! - **Cart**: `POST /api/cart/sync`
//!
//! Bearer tokens are supplied per call by the session layer; the client
//! itself is stateless. All calls are single-attempt: no retry, no
//! backoff.

#![deny(unsafe_code)]

pub mod client;
pub mod errors;
pub mod types;

pub use client::ApiClient;
pub use errors::{ClientError, Result};
pub use types::{
    Ack, AuthResponse, CartItem, CartSyncRequest, CartSyncResponse, ChatRequest, ChatResponse,
    DashboardResponse, LoginRequest, ProfileResponse, ProfileUpdate, SignupRequest,
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
