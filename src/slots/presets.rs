//! Named theme presets shipped with the editor.

use super::{Mode, SlotSet, ThemeState};
use crate::palette::{BorderWeight, ButtonStyle, PaletteColor};

/// Preset names in display order.
pub const PRESET_NAMES: [&str; 4] = ["default", "midnight", "citrus", "monochrome"];

/// Resolve a preset by name (case-insensitive).
pub fn preset(name: &str) -> Option<ThemeState> {
    match name.trim().to_ascii_lowercase().as_str() {
        "default" => Some(ThemeState::default()),
        "midnight" => Some(midnight()),
        "citrus" => Some(citrus()),
        "monochrome" => Some(monochrome()),
        _ => None,
    }
}

fn midnight() -> ThemeState {
    let mut light = SlotSet::defaults(Mode::Light);
    light.background = PaletteColor::Ice;
    light.surface = PaletteColor::White;
    light.accent = PaletteColor::Charcoal;
    light.button_text = PaletteColor::Ice;

    let mut dark = SlotSet::defaults(Mode::Dark);
    dark.page_background = Some(PaletteColor::Black);
    dark.background = PaletteColor::Charcoal;
    dark.surface = PaletteColor::Black;
    dark.card = PaletteColor::Charcoal;
    dark.border_color = PaletteColor::Black;
    dark.border_weight = BorderWeight::Medium;
    dark.button_style = ButtonStyle::Outline;
    ThemeState { light, dark }
}

fn citrus() -> ThemeState {
    let mut light = SlotSet::defaults(Mode::Light);
    light.background = PaletteColor::Lime;
    light.card = PaletteColor::White;
    light.accent = PaletteColor::Coral;
    light.button_background = Some(PaletteColor::Charcoal);
    light.button_text = PaletteColor::Lime;
    light.button_hover = Some(PaletteColor::Coral);

    let mut dark = SlotSet::defaults(Mode::Dark);
    dark.text = PaletteColor::Lime;
    dark.card_text = PaletteColor::Lime;
    dark.accent = PaletteColor::Coral;
    dark.border_weight = BorderWeight::Thick;
    ThemeState { light, dark }
}

fn monochrome() -> ThemeState {
    let mut light = SlotSet::defaults(Mode::Light);
    light.background = PaletteColor::White;
    light.surface = PaletteColor::Cloud;
    light.card = PaletteColor::Silver;
    light.text = PaletteColor::Black;
    light.card_text = PaletteColor::Black;
    light.accent = PaletteColor::Black;
    light.border_color = PaletteColor::Black;
    light.button_border = PaletteColor::Black;
    light.button_style = ButtonStyle::Ghost;

    let mut dark = SlotSet::defaults(Mode::Dark);
    dark.background = PaletteColor::Black;
    dark.surface = PaletteColor::Charcoal;
    dark.card = PaletteColor::Charcoal;
    dark.text = PaletteColor::White;
    dark.card_text = PaletteColor::White;
    dark.accent = PaletteColor::White;
    dark.border_color = PaletteColor::Silver;
    dark.button_background = Some(PaletteColor::White);
    dark.button_text = PaletteColor::Black;
    dark.button_border = PaletteColor::White;
    dark.border_weight = BorderWeight::None;
    ThemeState { light, dark }
}
