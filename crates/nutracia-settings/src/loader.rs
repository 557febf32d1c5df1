//! Settings loading: defaults ← user file (deep merge) ← env overrides.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{Result, SettingsError};
use crate::types::NutraciaSettings;

/// Path to the user settings file: `~/.nutracia/settings.json`.
///
/// Falls back to the current directory when `HOME` is unset.
#[must_use]
pub fn settings_path() -> PathBuf {
    config_dir().join("settings.json")
}

/// The `~/.nutracia` configuration directory.
#[must_use]
pub fn config_dir() -> PathBuf {
    std::env::var_os("HOME")
        .map_or_else(|| PathBuf::from("."), PathBuf::from)
        .join(".nutracia")
}

/// Deep-merge `overlay` into `base`.
///
/// Objects merge recursively; any other value type in `overlay` replaces
/// the `base` value wholesale.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Load settings from the default path with env overrides applied.
pub fn load_settings() -> Result<NutraciaSettings> {
    load_settings_from_path(&settings_path())
}

/// Load settings from a specific file path.
///
/// A missing file is not an error; defaults (plus env overrides) apply.
/// A present-but-unreadable or malformed file is an error, so a typo in
/// `settings.json` does not silently fall back.
pub fn load_settings_from_path(path: &Path) -> Result<NutraciaSettings> {
    let defaults = serde_json::to_value(NutraciaSettings::default())
        .unwrap_or_else(|_| Value::Object(serde_json::Map::new()));

    let merged = if path.exists() {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let overlay: Value =
            serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        deep_merge(defaults, overlay)
    } else {
        defaults
    };

    let mut settings: NutraciaSettings =
        serde_json::from_value(merged).map_err(|source| SettingsError::Parse {
            path: path.display().to_string(),
            source,
        })?;

    apply_env_overrides(&mut settings, |key| std::env::var(key).ok());
    settings.validate();
    Ok(settings)
}

/// Apply `NUTRACIA_*` environment overrides (highest priority layer).
///
/// `lookup` abstracts `std::env::var` so tests can inject values without
/// mutating process state.
pub fn apply_env_overrides<F>(settings: &mut NutraciaSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("NUTRACIA_API_BASE_URL") {
        settings.api.base_url = url;
    }
    if let Some(path) = lookup("NUTRACIA_STORE_PATH") {
        settings.storage.store_path = Some(path);
    }
    if let Some(level) = lookup("NUTRACIA_LOG_LEVEL") {
        settings.logging.level = level;
    }
    if let Some(json) = lookup("NUTRACIA_LOG_JSON") {
        settings.logging.json = matches!(json.as_str(), "1" | "true" | "yes");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
