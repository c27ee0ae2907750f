//! Shared test fixtures for store, reconciler, and storage test modules.

use crate::api::{Theme, ThemeApi, ThemePayload, ThemeSelection};
use crate::css::CssVariables;
use crate::error::ApiError;
use crate::slots::Mode;
use crate::store::Environment;
use crate::tokens::TokenTree;
use async_trait::async_trait;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

static NEXT_DIR: AtomicU64 = AtomicU64::new(0);

/// Scratch directory for storage and CSS-output tests, removed on drop.
#[derive(Debug)]
pub struct TestTempDir {
    root: PathBuf,
}

impl TestTempDir {
    pub fn new(label: &str) -> Self {
        let root = std::env::temp_dir().join(format!(
            "themekit-{label}-{}-{}",
            std::process::id(),
            NEXT_DIR.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&root).expect("create scratch dir");
        Self { root }
    }

    /// Path under the scratch root; nothing is created.
    pub fn child(&self, relative: &str) -> PathBuf {
        self.root.join(relative)
    }

    /// Write a file under the scratch root and return its path.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).expect("create scratch subdir");
        }
        fs::write(&path, content).expect("write scratch file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.root);
    }
}

/// Environment that records every projection; clones share the log.
#[derive(Debug, Clone, Default)]
pub struct RecordingEnvironment {
    applied: Arc<Mutex<Vec<(Mode, CssVariables)>>>,
}

impl RecordingEnvironment {
    pub fn count(&self) -> usize {
        self.applied.lock().expect("lock").len()
    }

    pub fn last(&self) -> Option<CssVariables> {
        self.last_applied().map(|(_, vars)| vars)
    }

    pub fn last_applied(&self) -> Option<(Mode, CssVariables)> {
        self.applied.lock().expect("lock").last().cloned()
    }
}

impl Environment for RecordingEnvironment {
    fn apply(&mut self, mode: Mode, vars: &CssVariables) {
        self.applied.lock().expect("lock").push((mode, vars.clone()));
    }
}

#[derive(Debug, Default)]
struct FakeApiState {
    themes: Vec<Theme>,
    selection: ThemeSelection,
    calls: Vec<String>,
    next_id: u32,
    fail_with: Option<u16>,
}

/// In-memory [`ThemeApi`] that records every call.
#[derive(Debug, Clone, Default)]
pub struct FakeThemeApi {
    state: Arc<Mutex<FakeApiState>>,
}

impl FakeThemeApi {
    pub fn with_themes(themes: Vec<Theme>) -> Self {
        let api = Self::default();
        api.state.lock().expect("lock").themes = themes;
        api
    }

    /// Names of the calls made so far, e.g. `["list", "create"]`.
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().expect("lock").calls.clone()
    }

    pub fn themes(&self) -> Vec<Theme> {
        self.state.lock().expect("lock").themes.clone()
    }

    /// Make every following call fail with this HTTP status.
    pub fn fail_with_status(&self, code: u16) {
        self.state.lock().expect("lock").fail_with = Some(code);
    }

    fn begin(&self, call: &str) -> Result<std::sync::MutexGuard<'_, FakeApiState>, ApiError> {
        let mut state = self.state.lock().expect("lock");
        state.calls.push(call.to_string());
        if let Some(code) = state.fail_with {
            return Err(ApiError::Status {
                code,
                body: "injected failure".to_string(),
            });
        }
        Ok(state)
    }
}

#[async_trait]
impl ThemeApi for FakeThemeApi {
    async fn list(&self) -> Result<Vec<Theme>, ApiError> {
        Ok(self.begin("list")?.themes.clone())
    }

    async fn create(&self, payload: &ThemePayload) -> Result<Theme, ApiError> {
        let mut state = self.begin("create")?;
        state.next_id += 1;
        let theme = Theme {
            id: format!("new-{}", state.next_id),
            name: payload.name.clone().unwrap_or_default(),
            description: payload.description.clone(),
            light_mode_tokens: payload.light_mode_tokens.clone(),
            dark_mode_tokens: payload.dark_mode_tokens.clone(),
            is_active: payload.is_active.unwrap_or(true),
            created_at: None,
            updated_at: None,
        };
        state.themes.push(theme.clone());
        Ok(theme)
    }

    async fn update(&self, id: &str, payload: &ThemePayload) -> Result<Theme, ApiError> {
        let mut state = self.begin("update")?;
        let Some(theme) = state.themes.iter_mut().find(|t| t.id == id) else {
            return Err(ApiError::Status {
                code: 404,
                body: format!("theme {id} not found"),
            });
        };
        if let Some(name) = &payload.name {
            theme.name = name.clone();
        }
        if let Some(description) = &payload.description {
            theme.description = Some(description.clone());
        }
        if let Some(tokens) = &payload.light_mode_tokens {
            theme.light_mode_tokens = Some(tokens.clone());
        }
        if let Some(tokens) = &payload.dark_mode_tokens {
            theme.dark_mode_tokens = Some(tokens.clone());
        }
        if let Some(active) = payload.is_active {
            theme.is_active = active;
        }
        Ok(theme.clone())
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let mut state = self.begin("delete")?;
        state.themes.retain(|t| t.id != id);
        Ok(())
    }

    async fn selection(&self) -> Result<ThemeSelection, ApiError> {
        Ok(self.begin("selection")?.selection.clone())
    }

    async fn set_selection(&self, selection: &ThemeSelection) -> Result<ThemeSelection, ApiError> {
        let mut state = self.begin("set_selection")?;
        state.selection = selection.clone();
        Ok(selection.clone())
    }
}

/// Theme row fixture.
pub fn theme_fixture(
    id: &str,
    is_active: bool,
    light: Option<TokenTree>,
    dark: Option<TokenTree>,
) -> Theme {
    Theme {
        id: id.to_string(),
        name: format!("theme {id}"),
        description: None,
        light_mode_tokens: light,
        dark_mode_tokens: dark,
        is_active,
        created_at: Some("2024-01-01T00:00:00Z".to_string()),
        updated_at: None,
    }
}
