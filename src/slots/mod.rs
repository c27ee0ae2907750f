//! Theme slot schema shared by both color modes.
//!
//! A [`SlotSet`] is the in-editor representation of one mode's theme: every
//! color slot holds a [`PaletteColor`] key, never a raw hex string. Three slots
//! (`pageBackground`, `buttonBackground`, `buttonHover`) may be left unset and
//! derive their value through the chains declared in [`resolve`].

pub mod presets;
pub mod resolve;

use crate::palette::{BorderWeight, ButtonStyle, PaletteColor};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Light or dark color mode. Each mode owns an independent [`SlotSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Light,
    Dark,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Self::Light, Self::Dark];

    pub fn key(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Color-valued theme roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ColorSlot {
    PageBackground,
    Background,
    Surface,
    Card,
    CardText,
    Text,
    Accent,
    BorderColor,
    ButtonBackground,
    ButtonText,
    ButtonBorder,
    ButtonHover,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 12] = [
        Self::PageBackground,
        Self::Background,
        Self::Surface,
        Self::Card,
        Self::CardText,
        Self::Text,
        Self::Accent,
        Self::BorderColor,
        Self::ButtonBackground,
        Self::ButtonText,
        Self::ButtonBorder,
        Self::ButtonHover,
    ];

    /// camelCase field name used in local state and token trees.
    pub fn key(self) -> &'static str {
        match self {
            Self::PageBackground => "pageBackground",
            Self::Background => "background",
            Self::Surface => "surface",
            Self::Card => "card",
            Self::CardText => "cardText",
            Self::Text => "text",
            Self::Accent => "accent",
            Self::BorderColor => "borderColor",
            Self::ButtonBackground => "buttonBackground",
            Self::ButtonText => "buttonText",
            Self::ButtonBorder => "buttonBorder",
            Self::ButtonHover => "buttonHover",
        }
    }

    /// Accepts the camelCase key as well as snake/kebab spellings.
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized: String = key
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|slot| slot.key().to_ascii_lowercase() == normalized)
    }

    /// True for slots that may be unset and derive their value.
    pub fn is_derived(self) -> bool {
        matches!(
            self,
            Self::PageBackground | Self::ButtonBackground | Self::ButtonHover
        )
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One mode's complete slot assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_background: Option<PaletteColor>,
    pub background: PaletteColor,
    pub surface: PaletteColor,
    pub card: PaletteColor,
    pub card_text: PaletteColor,
    pub text: PaletteColor,
    pub accent: PaletteColor,
    pub border_color: PaletteColor,
    pub border_weight: BorderWeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_background: Option<PaletteColor>,
    pub button_text: PaletteColor,
    pub button_border: PaletteColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub button_hover: Option<PaletteColor>,
    pub button_style: ButtonStyle,
}

impl SlotSet {
    /// Documented default slot set for a mode.
    pub fn defaults(mode: Mode) -> Self {
        match mode {
            Mode::Light => Self {
                page_background: None,
                background: PaletteColor::Cloud,
                surface: PaletteColor::White,
                card: PaletteColor::White,
                card_text: PaletteColor::Charcoal,
                text: PaletteColor::Charcoal,
                accent: PaletteColor::Coral,
                border_color: PaletteColor::Silver,
                border_weight: BorderWeight::Thin,
                button_background: None,
                button_text: PaletteColor::White,
                button_border: PaletteColor::Coral,
                button_hover: None,
                button_style: ButtonStyle::Solid,
            },
            Mode::Dark => Self {
                page_background: None,
                background: PaletteColor::Charcoal,
                surface: PaletteColor::Black,
                card: PaletteColor::Black,
                card_text: PaletteColor::Ice,
                text: PaletteColor::Ice,
                accent: PaletteColor::Lime,
                border_color: PaletteColor::Charcoal,
                border_weight: BorderWeight::Thin,
                button_background: None,
                button_text: PaletteColor::Charcoal,
                button_border: PaletteColor::Coral,
                button_hover: None,
                button_style: ButtonStyle::Solid,
            },
        }
    }

    /// Raw slot value; `None` only for unset derived slots.
    pub fn color(&self, slot: ColorSlot) -> Option<PaletteColor> {
        match slot {
            ColorSlot::PageBackground => self.page_background,
            ColorSlot::Background => Some(self.background),
            ColorSlot::Surface => Some(self.surface),
            ColorSlot::Card => Some(self.card),
            ColorSlot::CardText => Some(self.card_text),
            ColorSlot::Text => Some(self.text),
            ColorSlot::Accent => Some(self.accent),
            ColorSlot::BorderColor => Some(self.border_color),
            ColorSlot::ButtonBackground => self.button_background,
            ColorSlot::ButtonText => Some(self.button_text),
            ColorSlot::ButtonBorder => Some(self.button_border),
            ColorSlot::ButtonHover => self.button_hover,
        }
    }

    /// Assign a palette color to one slot.
    pub fn assign(&mut self, slot: ColorSlot, value: PaletteColor) {
        match slot {
            ColorSlot::PageBackground => self.page_background = Some(value),
            ColorSlot::Background => self.background = value,
            ColorSlot::Surface => self.surface = value,
            ColorSlot::Card => self.card = value,
            ColorSlot::CardText => self.card_text = value,
            ColorSlot::Text => self.text = value,
            ColorSlot::Accent => self.accent = value,
            ColorSlot::BorderColor => self.border_color = value,
            ColorSlot::ButtonBackground => self.button_background = Some(value),
            ColorSlot::ButtonText => self.button_text = value,
            ColorSlot::ButtonBorder => self.button_border = value,
            ColorSlot::ButtonHover => self.button_hover = Some(value),
        }
    }

    /// Unset a derived slot, or restore a base slot to the mode default.
    pub fn clear(&mut self, slot: ColorSlot, mode: Mode) {
        match slot {
            ColorSlot::PageBackground => self.page_background = None,
            ColorSlot::ButtonBackground => self.button_background = None,
            ColorSlot::ButtonHover => self.button_hover = None,
            base => {
                if let Some(default) = Self::defaults(mode).color(base) {
                    self.assign(base, default);
                }
            }
        }
    }

    /// Merge a stored JSON object over the mode defaults, field by field.
    ///
    /// Unknown fields are ignored. Invalid values keep the default and log a
    /// warning, so fields added later pick up defaults without discarding the
    /// choices already stored.
    pub fn merged_over_defaults(mode: Mode, stored: &Value) -> Self {
        let mut slots = Self::defaults(mode);
        let Some(object) = stored.as_object() else {
            tracing::warn!(%mode, "stored slot set is not an object; using defaults");
            return slots;
        };

        for slot in ColorSlot::ALL {
            let Some(raw) = object.get(slot.key()) else {
                continue;
            };
            match raw.as_str().and_then(PaletteColor::from_key) {
                Some(color) => slots.assign(slot, color),
                None if raw.is_null() && slot.is_derived() => slots.clear(slot, mode),
                None => tracing::warn!(
                    %mode,
                    slot = slot.key(),
                    value = %raw,
                    "invalid palette key in stored theme; using default"
                ),
            }
        }

        if let Some(raw) = object.get("buttonStyle") {
            match raw.as_str().and_then(ButtonStyle::from_key) {
                Some(style) => slots.button_style = style,
                None => tracing::warn!(%mode, value = %raw, "invalid stored buttonStyle; using default"),
            }
        }
        if let Some(raw) = object.get("borderWeight") {
            match raw.as_str().and_then(BorderWeight::from_key) {
                Some(weight) => slots.border_weight = weight,
                None => tracing::warn!(%mode, value = %raw, "invalid stored borderWeight; using default"),
            }
        }
        slots
    }
}

/// Light and dark slot sets held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeState {
    pub light: SlotSet,
    pub dark: SlotSet,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            light: SlotSet::defaults(Mode::Light),
            dark: SlotSet::defaults(Mode::Dark),
        }
    }
}

impl ThemeState {
    pub fn mode(&self, mode: Mode) -> &SlotSet {
        match mode {
            Mode::Light => &self.light,
            Mode::Dark => &self.dark,
        }
    }

    pub fn mode_mut(&mut self, mode: Mode) -> &mut SlotSet {
        match mode {
            Mode::Light => &mut self.light,
            Mode::Dark => &mut self.dark,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn slot_keys_round_trip_through_from_key() {
        for slot in ColorSlot::ALL {
            assert_eq!(ColorSlot::from_key(slot.key()), Some(slot));
        }
        assert_eq!(
            ColorSlot::from_key("button_background"),
            Some(ColorSlot::ButtonBackground)
        );
        assert_eq!(ColorSlot::from_key("card-text"), Some(ColorSlot::CardText));
        assert_eq!(ColorSlot::from_key("nope"), None);
    }

    #[test]
    fn merge_keeps_defaults_for_missing_and_invalid_fields() {
        let stored = json!({
            "background": "lime",
            "surface": "mauve",
            "buttonStyle": "ghost",
            "borderWeight": 7,
            "legacyField": "whatever"
        });
        let merged = SlotSet::merged_over_defaults(Mode::Dark, &stored);
        let defaults = SlotSet::defaults(Mode::Dark);
        assert_eq!(merged.background, PaletteColor::Lime);
        assert_eq!(merged.surface, defaults.surface);
        assert_eq!(merged.button_style, ButtonStyle::Ghost);
        assert_eq!(merged.border_weight, defaults.border_weight);
        assert_eq!(merged.text, defaults.text);
    }

    #[test]
    fn clear_restores_base_default_and_unsets_derived() {
        let mut slots = SlotSet::defaults(Mode::Light);
        slots.assign(ColorSlot::Text, PaletteColor::Coral);
        slots.assign(ColorSlot::ButtonHover, PaletteColor::Lime);
        slots.clear(ColorSlot::Text, Mode::Light);
        slots.clear(ColorSlot::ButtonHover, Mode::Light);
        assert_eq!(slots.text, PaletteColor::Charcoal);
        assert_eq!(slots.button_hover, None);
    }

    #[test]
    fn slot_set_serializes_camel_case_without_unset_derived_slots() {
        let value = serde_json::to_value(SlotSet::defaults(Mode::Light)).expect("serialize");
        assert_eq!(value["cardText"], "charcoal");
        assert_eq!(value["borderWeight"], "thin");
        assert!(value.get("buttonBackground").is_none());
    }
}
