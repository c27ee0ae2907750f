//! Load/save guards between the editor store and persisted themes.
//!
//! The two places where one mode's data used to overwrite the other are
//! guarded here:
//! - loading decodes light and dark tokens independently, and a missing blob
//!   leaves that mode's editor state as it was;
//! - updating a theme requires that exact theme to have been loaded first, so
//!   stale or default slots are never written over real data.

use crate::api::{Theme, ThemeApi, ThemePayload, ThemeSelection};
use crate::error::ThemeError;
use crate::slots::{ColorSlot, Mode, ThemeState};
use crate::store::ThemeStore;
use crate::tokens::{self, CodecWarning, EncodedPair, TokenTree};
use std::fmt;

/// At most this many themes may be active at once.
pub const MAX_ACTIVE_THEMES: usize = 4;

/// Fields for a brand-new theme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTheme {
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
}

/// Metadata changes sent alongside an update; `None` leaves a field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeMeta {
    pub name: Option<String>,
    pub description: Option<String>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveTarget {
    Create(NewTheme),
    Update { id: String, meta: ThemeMeta },
}

/// Non-blocking findings reported with a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveWarning {
    Codec(CodecWarning),
    /// The encoded background hex does not match its palette key.
    BackgroundMismatch {
        mode: Mode,
        expected: String,
        actual: Option<String>,
    },
    /// The active cap was reached, so the theme took an inactive slot.
    CreatedInactive { limit: usize },
}

impl fmt::Display for SaveWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Codec(w) => write!(f, "{w}"),
            Self::BackgroundMismatch {
                mode,
                expected,
                actual,
            } => write!(
                f,
                "{mode} background encoded as {} but its palette key is {expected}",
                actual.as_deref().unwrap_or("nothing")
            ),
            Self::CreatedInactive { limit } => write!(
                f,
                "{limit} themes are already active; the new theme was saved as inactive"
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveOutcome {
    pub theme: Theme,
    pub warnings: Vec<SaveWarning>,
}

/// Which modes a load actually replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    pub light_loaded: bool,
    pub dark_loaded: bool,
}

/// Coordinates a [`ThemeStore`] with the persisted-theme API.
pub struct ThemeEditor<A> {
    api: A,
}

impl<A: ThemeApi> ThemeEditor<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn list(&self) -> Result<Vec<Theme>, ThemeError> {
        Ok(self.api.list().await?)
    }

    /// Fetch a theme by id and load it into the editor.
    pub async fn load_by_id(&self, store: &mut ThemeStore, id: &str) -> Result<(Theme, LoadReport), ThemeError> {
        let theme = self
            .api
            .list()
            .await?
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| ThemeError::ThemeNotFound(id.to_string()))?;
        let report = self.load(store, &theme)?;
        Ok((theme, report))
    }

    /// Load a persisted theme into the editor.
    ///
    /// Each mode is decoded from its own blob and written only to its own
    /// slot set. A missing blob keeps the existing editor state for that mode.
    pub fn load(&self, store: &mut ThemeStore, theme: &Theme) -> Result<LoadReport, ThemeError> {
        let light_loaded = load_mode(store, theme, Mode::Light, theme.light_mode_tokens.as_ref())?;
        let dark_loaded = load_mode(store, theme, Mode::Dark, theme.dark_mode_tokens.as_ref())?;
        store.set_loaded_theme_id(Some(theme.id.clone()))?;
        tracing::info!(id = %theme.id, light_loaded, dark_loaded, "loaded theme into editor");
        Ok(LoadReport {
            light_loaded,
            dark_loaded,
        })
    }

    /// Persist the editor state as a new theme or as an update.
    ///
    /// Updates are refused before any network call unless that theme was
    /// loaded first. The save is attempted once; on failure the editor state
    /// is kept so the user can retry.
    pub async fn save(&self, store: &mut ThemeStore, target: SaveTarget) -> Result<SaveOutcome, ThemeError> {
        if let SaveTarget::Update { id, .. } = &target {
            if store.loaded_theme_id() != Some(id.as_str()) {
                tracing::warn!(%id, loaded = ?store.loaded_theme_id(), "refusing update of a theme that was not loaded");
                return Err(ThemeError::UpdateWithoutLoad { id: id.clone() });
            }
        }

        let pair = tokens::encode_pair(store.state());
        let mut warnings: Vec<SaveWarning> = pair.warnings.iter().cloned().map(SaveWarning::Codec).collect();
        warnings.extend(validate_backgrounds(store.state(), &pair));

        let theme = match target {
            SaveTarget::Create(new) => {
                let mut is_active = new.is_active;
                if is_active {
                    let themes = self.api.list().await?;
                    match check_active_capacity(&themes, None) {
                        Capacity::Available => {}
                        Capacity::ReplaceInactive => {
                            is_active = false;
                            warnings.push(SaveWarning::CreatedInactive {
                                limit: MAX_ACTIVE_THEMES,
                            });
                        }
                        Capacity::Full => {
                            return Err(ThemeError::ActiveLimitExceeded {
                                limit: MAX_ACTIVE_THEMES,
                            })
                        }
                    }
                }
                let payload = ThemePayload {
                    name: Some(new.name),
                    description: new.description,
                    light_mode_tokens: Some(pair.light),
                    dark_mode_tokens: Some(pair.dark),
                    is_active: Some(is_active),
                };
                let created = self.api.create(&payload).await?;
                store.set_loaded_theme_id(Some(created.id.clone()))?;
                created
            }
            SaveTarget::Update { id, meta } => {
                if meta.is_active == Some(true) {
                    let themes = self.api.list().await?;
                    if check_active_capacity(&themes, Some(&id)) != Capacity::Available {
                        return Err(ThemeError::ActiveLimitExceeded {
                            limit: MAX_ACTIVE_THEMES,
                        });
                    }
                }
                let payload = ThemePayload {
                    name: meta.name,
                    description: meta.description,
                    light_mode_tokens: Some(pair.light),
                    dark_mode_tokens: Some(pair.dark),
                    is_active: meta.is_active,
                };
                self.api.update(&id, &payload).await?
            }
        };

        for warning in &warnings {
            tracing::warn!(id = %theme.id, %warning, "theme saved with warning");
        }
        Ok(SaveOutcome { theme, warnings })
    }

    /// Soft-delete: the row stays but no longer counts against the cap.
    pub async fn deactivate(&self, id: &str) -> Result<Theme, ThemeError> {
        let payload = ThemePayload {
            is_active: Some(false),
            ..ThemePayload::default()
        };
        Ok(self.api.update(id, &payload).await?)
    }

    /// Hard delete. Forgets the editor's loaded id if it was this theme.
    pub async fn delete(&self, store: &mut ThemeStore, id: &str) -> Result<(), ThemeError> {
        self.api.delete(id).await?;
        if store.loaded_theme_id() == Some(id) {
            store.set_loaded_theme_id(None)?;
        }
        Ok(())
    }

    /// Read the user's applied theme and stop the store projecting over it.
    pub async fn refresh_selection(&self, store: &mut ThemeStore) -> Result<ThemeSelection, ThemeError> {
        let selection = self.api.selection().await?;
        store.set_external_theme_active(selection.is_applied())?;
        Ok(selection)
    }

    /// Apply a persisted theme for the user, or clear it with `None`.
    pub async fn select(
        &self,
        store: &mut ThemeStore,
        theme_id: Option<String>,
        mode: Option<Mode>,
    ) -> Result<ThemeSelection, ThemeError> {
        let request = ThemeSelection { theme_id, mode };
        let selection = self.api.set_selection(&request).await?;
        store.set_external_theme_active(selection.is_applied())?;
        Ok(selection)
    }
}

fn load_mode(
    store: &mut ThemeStore,
    theme: &Theme,
    mode: Mode,
    tokens: Option<&TokenTree>,
) -> Result<bool, ThemeError> {
    let Some(tokens) = tokens else {
        tracing::warn!(id = %theme.id, %mode, "theme has no tokens for this mode; keeping current editor values");
        return Ok(false);
    };
    store.replace_mode(mode, tokens::decode(tokens, mode))?;
    Ok(true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Capacity {
    Available,
    ReplaceInactive,
    Full,
}

/// Whether one more active theme fits. `exclude` is a theme being updated,
/// which must not count against itself.
fn check_active_capacity(themes: &[Theme], exclude: Option<&str>) -> Capacity {
    let others = themes.iter().filter(|t| Some(t.id.as_str()) != exclude);
    let (active, inactive) = others.fold((0usize, 0usize), |(a, i), t| {
        if t.is_active {
            (a + 1, i)
        } else {
            (a, i + 1)
        }
    });
    if active < MAX_ACTIVE_THEMES {
        Capacity::Available
    } else if inactive > 0 {
        Capacity::ReplaceInactive
    } else {
        Capacity::Full
    }
}

/// Re-derive each mode's background hex from its palette key and compare it
/// with what was encoded.
fn validate_backgrounds(state: &ThemeState, pair: &EncodedPair) -> Vec<SaveWarning> {
    let mut warnings = Vec::new();
    for (mode, tree) in [(Mode::Light, &pair.light), (Mode::Dark, &pair.dark)] {
        let expected = state.mode(mode).background.hex();
        let actual = tree.lookup(&[ColorSlot::Background.key()]);
        if actual != Some(expected) {
            tracing::error!(%mode, expected, actual = ?actual, "encoded background does not match its palette key");
            warnings.push(SaveWarning::BackgroundMismatch {
                mode,
                expected: expected.to_string(),
                actual: actual.map(str::to_string),
            });
        }
    }
    warnings
}
