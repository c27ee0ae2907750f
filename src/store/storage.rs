//! Local persistence for the editor's theme state.

use crate::error::StorageError;
use crate::slots::ThemeState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// On-disk record. Mode payloads stay raw JSON so they can be merged over
/// defaults field by field on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedState {
    #[serde(default)]
    pub light: Value,
    #[serde(default)]
    pub dark: Value,
    /// Persisted theme currently loaded into the editor, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loaded_theme_id: Option<String>,
    /// A persisted theme is applied for the user; the editor must not project.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub external_theme_active: bool,
}

impl PersistedState {
    pub fn from_state(
        state: &ThemeState,
        loaded_theme_id: Option<&str>,
        external_theme_active: bool,
    ) -> Result<Self, StorageError> {
        Ok(Self {
            light: serde_json::to_value(&state.light)?,
            dark: serde_json::to_value(&state.dark)?,
            loaded_theme_id: loaded_theme_id.map(str::to_string),
            external_theme_active,
        })
    }
}

/// Where the store keeps its state between sessions.
pub trait StateStorage: Send {
    /// `Ok(None)` when nothing has been stored yet.
    fn load(&self) -> Result<Option<PersistedState>, StorageError>;
    fn save(&self, state: &PersistedState) -> Result<(), StorageError>;
}

/// JSON file storage with atomic replace-on-write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl StateStorage for FileStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_vec_pretty(state)?;
        // Write a sibling file first so a partial write never replaces the
        // last good state.
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

/// In-process storage; clones share the same slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Option<PersistedState>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(state: PersistedState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(state))),
        }
    }

    /// Last saved record, if any.
    pub fn snapshot(&self) -> Option<PersistedState> {
        self.inner.lock().ok().and_then(|guard| guard.clone())
    }
}

impl StateStorage for MemoryStorage {
    fn load(&self) -> Result<Option<PersistedState>, StorageError> {
        Ok(self.snapshot())
    }

    fn save(&self, state: &PersistedState) -> Result<(), StorageError> {
        if let Ok(mut guard) = self.inner.lock() {
            *guard = Some(state.clone());
        }
        Ok(())
    }
}
