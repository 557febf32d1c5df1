//! # nutracia-settings
//!
//! Configuration management with layered sources for the Nutracía demo
//! client.
//!
//! Settings are loaded from three layers (in priority order):
//! 1. **Compiled defaults** — [`NutraciaSettings::default()`]
//! 2. **User file** — `~/.nutracia/settings.json` (deep-merged over defaults)
//! 3. **Environment variables** — `NUTRACIA_*` overrides (highest priority)
//!
//! The only value the orchestrator strictly requires is the Backend API
//! base URL (`api.baseUrl` / `NUTRACIA_API_BASE_URL`); everything else has
//! workable defaults.
//!
//! # Usage
//!
//! ```no_run
//! use nutracia_settings::get_settings;
//!
//! let settings = get_settings();
//! println!("API base: {}", settings.api.base_url);
//! ```

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;

use std::path::Path;
use std::sync::{Arc, RwLock};

/// Global settings singleton.
///
/// `RwLock<Option<Arc<_>>>` rather than `OnceLock` so the cached value can
/// be swapped when the settings file changes. Reads are a shared lock plus
/// an `Arc::clone`; writes only happen on reload.
static SETTINGS: RwLock<Option<Arc<NutraciaSettings>>> = RwLock::new(None);

/// Get the global settings instance.
///
/// On first call, loads from `~/.nutracia/settings.json` with env
/// overrides; afterwards returns the cached value. If loading fails the
/// compiled defaults apply.
///
/// Returns an `Arc` so callers hold a consistent snapshot even if another
/// thread reloads concurrently.
pub fn get_settings() -> Arc<NutraciaSettings> {
    {
        let guard = SETTINGS.read().expect("settings lock poisoned");
        if let Some(ref s) = *guard {
            return Arc::clone(s);
        }
    }

    let mut guard = SETTINGS.write().expect("settings lock poisoned");
    // Another thread may have initialized while we waited for the lock.
    if let Some(ref s) = *guard {
        return Arc::clone(s);
    }

    let settings = Arc::new(match load_settings() {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, "failed to load settings, using defaults");
            NutraciaSettings::default()
        }
    });
    *guard = Some(Arc::clone(&settings));
    settings
}

/// Initialize the global settings with a specific value.
///
/// Replaces any previously cached settings. Used by tests and by embedding
/// shells that resolve configuration themselves.
pub fn init_settings(settings: NutraciaSettings) {
    let mut guard = SETTINGS.write().expect("settings lock poisoned");
    *guard = Some(Arc::new(settings));
}

/// Reload settings from a specific file path and swap the global cache.
///
/// All subsequent [`get_settings`] calls return the new values.
pub fn reload_settings_from_path(path: &Path) {
    let new = Arc::new(match load_settings_from_path(path) {
        Ok(s) => s,
        Err(e) => {
            tracing::warn!(error = %e, ?path, "failed to reload settings, falling back to defaults");
            NutraciaSettings::default()
        }
    });
    let mut guard = SETTINGS.write().expect("settings lock poisoned");
    *guard = Some(new);
    tracing::info!(?path, "settings reloaded from disk");
}

/// Reset the global settings cache (test-only).
#[cfg(test)]
pub(crate) fn reset_settings() {
    let mut guard = SETTINGS.write().expect("settings lock poisoned");
    *guard = None;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
