//! Theme store: the editor's live light/dark slot state.
//!
//! Every mutation is an atomic replace followed by two side effects: the full
//! state is written to [`StateStorage`], and the active mode's CSS variables
//! are pushed to the [`Environment`]. Projection is skipped while an
//! externally selected persisted theme is applied, so the editor never fights
//! it for the document root.

mod environment;
mod storage;

pub use environment::{CssFileEnvironment, NullEnvironment};
pub use storage::{FileStorage, MemoryStorage, PersistedState, StateStorage};

use crate::css::{self, CssVariables};
use crate::error::ThemeError;
use crate::palette::{BorderWeight, ButtonStyle, PaletteColor};
use crate::slots::presets;
use crate::slots::{ColorSlot, Mode, SlotSet, ThemeState};

/// Receives projected CSS variables for the active color mode.
pub trait Environment: Send {
    fn apply(&mut self, mode: Mode, vars: &CssVariables);
}

/// Value accepted by [`ThemeStore::set_slot`] to unset a derived slot.
pub const AUTO_VALUE: &str = "auto";

pub struct ThemeStore {
    state: ThemeState,
    color_mode: Mode,
    external_theme_active: bool,
    loaded_theme_id: Option<String>,
    storage: Box<dyn StateStorage>,
    environment: Box<dyn Environment>,
}

impl ThemeStore {
    /// Initialize from storage (merged over defaults) and project once.
    pub fn open(
        storage: Box<dyn StateStorage>,
        environment: Box<dyn Environment>,
        color_mode: Mode,
    ) -> Self {
        let stored = match storage.load() {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(%err, "failed to read stored theme state; starting from defaults");
                None
            }
        };
        let (state, loaded_theme_id, external_theme_active) = match stored {
            Some(record) => (
                ThemeState {
                    light: SlotSet::merged_over_defaults(Mode::Light, &record.light),
                    dark: SlotSet::merged_over_defaults(Mode::Dark, &record.dark),
                },
                record.loaded_theme_id,
                record.external_theme_active,
            ),
            None => (ThemeState::default(), None, false),
        };

        let mut store = Self {
            state,
            color_mode,
            external_theme_active,
            loaded_theme_id,
            storage,
            environment,
        };
        store.project();
        store
    }

    pub fn state(&self) -> &ThemeState {
        &self.state
    }

    pub fn slots(&self, mode: Mode) -> &SlotSet {
        self.state.mode(mode)
    }

    pub fn color_mode(&self) -> Mode {
        self.color_mode
    }

    pub fn is_external_theme_active(&self) -> bool {
        self.external_theme_active
    }

    pub fn loaded_theme_id(&self) -> Option<&str> {
        self.loaded_theme_id.as_deref()
    }

    /// Set one color slot from a palette key.
    ///
    /// Unknown keys are not an error: the slot falls back to its default and a
    /// warning is logged. [`AUTO_VALUE`] unsets a derived slot.
    pub fn set_slot(&mut self, mode: Mode, slot: ColorSlot, value: &str) -> Result<(), ThemeError> {
        let value = value.trim();
        let color = if value.is_empty() || value.eq_ignore_ascii_case(AUTO_VALUE) {
            None
        } else {
            let parsed = PaletteColor::from_key(value);
            if parsed.is_none() {
                tracing::warn!(%mode, slot = slot.key(), value, "unknown palette key; using slot default");
            }
            parsed
        };
        self.set_color(mode, slot, color)
    }

    /// Typed variant of [`set_slot`](Self::set_slot); `None` restores the default.
    pub fn set_color(
        &mut self,
        mode: Mode,
        slot: ColorSlot,
        color: Option<PaletteColor>,
    ) -> Result<(), ThemeError> {
        let slots = self.state.mode_mut(mode);
        match color {
            Some(color) => slots.assign(slot, color),
            None => slots.clear(slot, mode),
        }
        self.commit()
    }

    pub fn set_button_style(&mut self, mode: Mode, style: ButtonStyle) -> Result<(), ThemeError> {
        self.state.mode_mut(mode).button_style = style;
        self.commit()
    }

    pub fn set_border_weight(&mut self, mode: Mode, weight: BorderWeight) -> Result<(), ThemeError> {
        self.state.mode_mut(mode).border_weight = weight;
        self.commit()
    }

    /// Replace both modes with a named preset.
    pub fn load_preset(&mut self, name: &str) -> Result<(), ThemeError> {
        let state = presets::preset(name).ok_or_else(|| ThemeError::UnknownPreset(name.to_string()))?;
        self.state = state;
        self.commit()
    }

    /// Replace both modes with the documented defaults.
    pub fn reset(&mut self) -> Result<(), ThemeError> {
        self.state = ThemeState::default();
        self.commit()
    }

    /// Replace exactly one mode. The other mode is left untouched.
    pub fn replace_mode(&mut self, mode: Mode, slots: SlotSet) -> Result<(), ThemeError> {
        *self.state.mode_mut(mode) = slots;
        self.commit()
    }

    pub fn export_css(&self) -> String {
        css::export_css(&self.state)
    }

    /// Record which persisted theme is loaded into the editor.
    pub fn set_loaded_theme_id(&mut self, id: Option<String>) -> Result<(), ThemeError> {
        self.loaded_theme_id = id;
        self.persist()
    }

    /// Follow the externally owned light/dark toggle.
    pub fn set_color_mode(&mut self, mode: Mode) {
        self.color_mode = mode;
        self.project();
    }

    /// Mark whether a persisted theme is applied from outside the editor.
    /// The flag is persisted so later sessions keep out of its way.
    pub fn set_external_theme_active(&mut self, active: bool) -> Result<(), ThemeError> {
        let was_active = self.external_theme_active;
        self.external_theme_active = active;
        if was_active && !active {
            self.project();
        }
        self.persist()
    }

    /// Variables for the current color mode.
    pub fn current_variables(&self) -> CssVariables {
        css::project(self.state.mode(self.color_mode), self.color_mode)
    }

    fn commit(&mut self) -> Result<(), ThemeError> {
        self.project();
        self.persist()
    }

    fn persist(&self) -> Result<(), ThemeError> {
        let record = PersistedState::from_state(
            &self.state,
            self.loaded_theme_id.as_deref(),
            self.external_theme_active,
        )?;
        self.storage.save(&record)?;
        Ok(())
    }

    fn project(&mut self) {
        if self.external_theme_active {
            tracing::debug!("external theme active; skipping css projection");
            return;
        }
        let vars = self.current_variables();
        self.environment.apply(self.color_mode, &vars);
    }
}
