//! # nutracia-session
//!
//! Session orchestration for the Nutracía demo client.
//!
//! The [`SessionOrchestrator`] is the one component with design substance
//! in this product: it drives the startup connectivity probe, restores or
//! bootstraps the demo session, and exchanges chat messages with the
//! backend, holding all UI-visible state in an observable
//! [`OrchestratorState`] snapshot.
//!
//! - **Orchestrator**: [`orchestrator::SessionOrchestrator`]
//! - **State**: [`state::OrchestratorState`], published via `tokio::sync::watch`
//! - **Persistence**: [`store::KeyValueStore`] capability with
//!   [`store::FileStore`] and [`store::MemoryStore`] implementations
//! - **Errors**: [`errors::SessionError`], [`errors::StoreError`]

#![deny(unsafe_code)]

pub mod errors;
pub mod orchestrator;
pub mod state;
pub mod store;

pub use errors::{SessionError, StoreError};
pub use orchestrator::SessionOrchestrator;
pub use state::{ChatOutcome, ONBOARDING_FAILURE_MESSAGE, OnboardingOutcome, OrchestratorState};
pub use store::{FileStore, KeyValueStore, MemoryStore, TOKEN_KEY, USER_KEY};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
