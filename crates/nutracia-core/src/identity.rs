//! Demo identity generation for the onboarding bootstrap.
//!
//! "Get Started" by an unauthenticated visitor creates a brand-new backend
//! account each time. The email carries a millisecond timestamp so repeated
//! bootstraps never collide on the backend's unique-email check.

use serde::{Deserialize, Serialize};

use crate::session::StoredProfile;

/// Fixed placeholder password for demo accounts.
pub const DEMO_PASSWORD: &str = "demo123";

/// Fixed display name for demo accounts.
pub const DEMO_NAME: &str = "Demo User";

/// Fixed age for demo accounts.
pub const DEMO_AGE: u32 = 30;

/// Email domain for generated demo addresses.
pub const DEMO_EMAIL_DOMAIN: &str = "nutracia.com";

/// Fixed wellness goal tags sent with every demo signup.
pub const DEMO_HEALTH_GOALS: [&str; 3] = [
    "Weight Management",
    "Better Nutrition",
    "Fitness Improvement",
];

/// A generated signup payload for a demo account.
///
/// Constructed fresh for each bootstrap; never reused or compared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DemoIdentity {
    /// Timestamp-qualified unique email.
    pub email: String,
    /// Placeholder password.
    pub password: String,
    /// Display name.
    pub name: String,
    /// Age in years.
    pub age: u32,
    /// Wellness goal tags.
    pub health_goals: Vec<String>,
}

impl DemoIdentity {
    /// Generate a fresh identity using the current wall clock.
    #[must_use]
    pub fn generate() -> Self {
        Self::at_timestamp(chrono::Utc::now().timestamp_millis())
    }

    /// Generate an identity for a specific millisecond timestamp.
    ///
    /// Two invocations at different timestamps produce distinct emails.
    #[must_use]
    pub fn at_timestamp(unix_millis: i64) -> Self {
        Self {
            email: format!("demo{unix_millis}@{DEMO_EMAIL_DOMAIN}"),
            password: DEMO_PASSWORD.to_string(),
            name: DEMO_NAME.to_string(),
            age: DEMO_AGE,
            health_goals: DEMO_HEALTH_GOALS.iter().map(ToString::to_string).collect(),
        }
    }

    /// The durable profile for this identity once the backend assigns an id.
    ///
    /// The placeholder password is deliberately not part of the stored
    /// profile.
    #[must_use]
    pub fn into_profile(self, user_id: impl Into<String>) -> StoredProfile {
        StoredProfile {
            id: user_id.into(),
            email: self.email,
            name: self.name,
            age: self.age,
            health_goals: self.health_goals,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
