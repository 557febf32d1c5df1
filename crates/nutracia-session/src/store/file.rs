//! File-backed store: one JSON object per store, whole-file rewrite per
//! write.
//!
//! Each `set`/`remove` is atomic on its own (temp file + rename), but a
//! sequence of calls is not a transaction: a crash between the token and
//! profile writes leaves a half-written pair, which the session restore
//! treats as no session.

use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use serde_json::{Map, Value};
use tracing::debug;

use super::KeyValueStore;
use crate::errors::StoreError;

/// A [`KeyValueStore`] persisted as a JSON object file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Create a store backed by `path`. The file and its parent directory
    /// are created lazily on first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        if !self.path.exists() {
            return Ok(Map::new());
        }
        let raw = std::fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        if raw.trim().is_empty() {
            return Ok(Map::new());
        }
        let value: Value = serde_json::from_str(&raw).map_err(|source| StoreError::Corrupt {
            path: self.path.display().to_string(),
            source,
        })?;
        match value {
            Value::Object(map) => Ok(map),
            other => Err(StoreError::Corrupt {
                path: self.path.display().to_string(),
                source: serde::de::Error::custom(format!(
                    "expected a JSON object, found {other}"
                )),
            }),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.display().to_string(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        let body = serde_json::to_string_pretty(&Value::Object(entries.clone()))
            .map_err(|source| StoreError::Corrupt {
                path: self.path.display().to_string(),
                source,
            })?;

        // Write-then-rename keeps each individual write atomic.
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, body).map_err(io_err)?;
        std::fs::rename(&tmp, &self.path).map_err(io_err)?;
        debug!(path = %self.path.display(), keys = entries.len(), "store written");
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(key)
            .and_then(Value::as_str)
            .map(ToString::to_string))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        let _ = entries.insert(key.to_string(), Value::String(value.to_string()));
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock();
        if self.path.exists() {
            self.write_entries(&Map::new())?;
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
