//! # nutracia-core
//!
//! Foundation types and shared vocabulary for the Nutracía demo client.
//!
//! This crate provides the types every other crate in the workspace speaks:
//!
//! - **Connectivity**: [`connectivity::ConnectivityStatus`] for the startup API probe
//! - **Session**: [`session::Session`], [`session::StoredProfile`], [`session::AuthState`]
//! - **Demo identity**: [`identity::DemoIdentity`] with timestamp-qualified emails
//! - **Chat**: [`chat::ChatExchange`] and the fixed error-fallback reply
//! - **Logging**: [`logging::init`] tracing setup for embedding shells and tests
//!
//! ## Crate Position
//!
//! Foundation crate. Depended on by all other nutracia crates.

#![deny(unsafe_code)]

pub mod chat;
pub mod connectivity;
pub mod identity;
pub mod logging;
pub mod session;
