//! CSS custom-property projection.
//!
//! [`project`] is the pure half: slot set in, ordered variable list out.
//! Writing those variables somewhere is the job of an
//! [`Environment`](crate::store::Environment) implementation.

pub mod watcher;

pub use watcher::ModeWatcher;

use crate::slots::resolve::resolve_hex;
use crate::slots::{ColorSlot, Mode, SlotSet, ThemeState};
use std::fmt::Write as _;

/// Ordered CSS custom properties for one mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CssVariables {
    entries: Vec<(&'static str, String)>,
}

impl CssVariables {
    fn push(&mut self, name: &'static str, value: impl Into<String>) {
        self.entries.push((name, value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Render as `selector { --name: value; ... }`.
    pub fn to_block(&self, selector: &str) -> String {
        let mut out = format!("{selector} {{\n");
        for (name, value) in self.iter() {
            let _ = writeln!(out, "  {name}: {value};");
        }
        out.push('}');
        out
    }
}

/// Property names emitted by [`project`], in emission order.
pub const VARIABLE_NAMES: [&str; 26] = [
    "--page-background",
    "--background",
    "--foreground",
    "--card",
    "--card-foreground",
    "--surface",
    "--muted",
    "--secondary",
    "--popover",
    "--popover-foreground",
    "--border",
    "--border-weight",
    "--input",
    "--input-border",
    "--accent",
    "--ring",
    "--sidebar",
    "--sidebar-foreground",
    "--sidebar-primary",
    "--button-background",
    "--button-foreground",
    "--button-border",
    "--button-hover",
    "--button-style",
    "--primary",
    "--primary-foreground",
];

/// Compute the CSS variables for one mode's slots.
pub fn project(slots: &SlotSet, mode: Mode) -> CssVariables {
    let hex = |slot: ColorSlot| resolve_hex(slots, slot, mode);
    let mut vars = CssVariables::default();

    vars.push("--page-background", hex(ColorSlot::PageBackground));
    vars.push("--background", hex(ColorSlot::Background));
    vars.push("--foreground", hex(ColorSlot::Text));
    vars.push("--card", hex(ColorSlot::Card));
    vars.push("--card-foreground", hex(ColorSlot::CardText));
    vars.push("--surface", hex(ColorSlot::Surface));
    vars.push("--muted", hex(ColorSlot::Surface));
    vars.push("--secondary", hex(ColorSlot::Surface));
    vars.push("--popover", hex(ColorSlot::Card));
    vars.push("--popover-foreground", hex(ColorSlot::CardText));
    vars.push("--border", hex(ColorSlot::BorderColor));
    vars.push("--border-weight", slots.border_weight.css_width());
    vars.push("--input", hex(ColorSlot::Surface));
    vars.push("--input-border", hex(ColorSlot::BorderColor));
    vars.push("--accent", hex(ColorSlot::Accent));
    vars.push("--ring", hex(ColorSlot::Accent));
    vars.push("--sidebar", hex(ColorSlot::Surface));
    vars.push("--sidebar-foreground", hex(ColorSlot::Text));
    vars.push("--sidebar-primary", hex(ColorSlot::Accent));
    vars.push("--button-background", hex(ColorSlot::ButtonBackground));
    vars.push("--button-foreground", hex(ColorSlot::ButtonText));
    vars.push("--button-border", hex(ColorSlot::ButtonBorder));
    vars.push("--button-hover", hex(ColorSlot::ButtonHover));
    vars.push("--button-style", slots.button_style.key());
    // UI primitives read --primary as "the button color", not the accent.
    vars.push("--primary", hex(ColorSlot::ButtonBackground));
    vars.push("--primary-foreground", hex(ColorSlot::ButtonText));

    vars
}

/// Copy-paste stylesheet with a `:root` (light) and a `.dark` block.
pub fn export_css(state: &ThemeState) -> String {
    let light = project(&state.light, Mode::Light);
    let dark = project(&state.dark, Mode::Dark);
    format!("{}\n\n{}\n", light.to_block(":root"), dark.to_block(".dark"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BorderWeight, PaletteColor};
    use crate::slots::presets::{preset, PRESET_NAMES};
    use std::collections::BTreeSet;

    fn declared_names(block: &str) -> Vec<String> {
        block
            .lines()
            .filter_map(|line| line.trim().strip_prefix("--"))
            .filter_map(|rest| rest.split(':').next())
            .map(|name| format!("--{name}"))
            .collect()
    }

    #[test]
    fn projection_emits_every_name_once_in_order() {
        let vars = project(&SlotSet::defaults(Mode::Light), Mode::Light);
        let names: Vec<&str> = vars.iter().map(|(k, _)| k).collect();
        assert_eq!(names, VARIABLE_NAMES.to_vec());
    }

    #[test]
    fn primary_binds_to_button_colors_not_accent() {
        let mut slots = SlotSet::defaults(Mode::Light);
        slots.accent = PaletteColor::Lime;
        slots.button_background = Some(PaletteColor::Charcoal);
        slots.button_text = PaletteColor::Ice;
        let vars = project(&slots, Mode::Light);
        assert_eq!(vars.get("--primary"), Some(PaletteColor::Charcoal.hex()));
        assert_eq!(vars.get("--primary-foreground"), Some(PaletteColor::Ice.hex()));
        assert_eq!(vars.get("--ring"), Some(PaletteColor::Lime.hex()));
    }

    #[test]
    fn border_weight_projects_pixel_width() {
        let mut slots = SlotSet::defaults(Mode::Dark);
        slots.border_weight = BorderWeight::Medium;
        assert_eq!(project(&slots, Mode::Dark).get("--border-weight"), Some("2px"));
    }

    #[test]
    fn export_has_one_root_and_one_dark_block_with_full_names() {
        for name in PRESET_NAMES {
            let state = preset(name).expect("preset");
            let css = export_css(&state);
            assert_eq!(css.matches(":root {").count(), 1, "{name}");
            assert_eq!(css.matches(".dark {").count(), 1, "{name}");

            let (root, dark) = css.split_once(".dark {").expect("dark block");
            for block in [root, dark] {
                let names = declared_names(block);
                let unique: BTreeSet<&String> = names.iter().collect();
                assert_eq!(names.len(), unique.len(), "duplicate names in {name}");
                assert_eq!(names.len(), VARIABLE_NAMES.len(), "{name}");
            }
        }
    }
}
