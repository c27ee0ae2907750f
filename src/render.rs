//! Terminal output for the CLI: status lines on stderr, slot tables on stdout.

use crate::palette::{PaletteColor, Rgb};
use crate::slots::resolve::resolve;
use crate::slots::{ColorSlot, Mode, SlotSet};
use crossterm::style::{Color, Stylize};

const INDENT: &str = "  ";
const SWATCH: &str = "   ";
const LABEL_WARNING: &str = "warning:";
const LABEL_ERROR: &str = "error:";

/// Plain-or-colored terminal renderer.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    color: bool,
}

impl Renderer {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Print a section header (to stderr).
    pub fn section(&self, title: &str) {
        if self.color {
            eprintln!("{} {}", "•".with(Color::DarkGrey), title.bold());
        } else {
            eprintln!("{title}:");
        }
    }

    /// Print one key/value row (to stderr).
    pub fn field(&self, key: &str, value: &str) {
        if self.color {
            eprintln!("{INDENT}{} {value}", format!("{key}:").with(Color::DarkGrey));
        } else {
            eprintln!("{INDENT}{key}: {value}");
        }
    }

    pub fn warn(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_WARNING.with(Color::Yellow).bold());
        } else {
            eprintln!("{LABEL_WARNING} {msg}");
        }
    }

    pub fn error(&self, msg: &str) {
        if self.color {
            eprintln!("{} {msg}", LABEL_ERROR.with(Color::Red).bold());
        } else {
            eprintln!("{LABEL_ERROR} {msg}");
        }
    }

    /// Print one mode's slots with resolved colors (to stdout).
    pub fn slot_table(&self, slots: &SlotSet, mode: Mode) {
        println!("{mode}");
        for row in slot_rows(slots, mode) {
            let swatch = if self.color {
                let Rgb { r, g, b } = row.resolved.rgb();
                format!("{} ", SWATCH.on(Color::Rgb { r, g, b }))
            } else {
                String::new()
            };
            println!("{INDENT}{swatch}{}", row.text());
        }
        println!("{INDENT}buttonStyle: {}", slots.button_style.key());
        println!(
            "{INDENT}borderWeight: {} ({})",
            slots.border_weight.key(),
            slots.border_weight.css_width()
        );
    }
}

/// One line of `show` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRow {
    pub slot: ColorSlot,
    pub assigned: Option<PaletteColor>,
    pub resolved: PaletteColor,
}

impl SlotRow {
    pub fn text(&self) -> String {
        match self.assigned {
            Some(color) => format!("{}: {color} {}", self.slot, color.hex()),
            None => format!(
                "{}: auto → {} {}",
                self.slot,
                self.resolved,
                self.resolved.hex()
            ),
        }
    }
}

pub fn slot_rows(slots: &SlotSet, mode: Mode) -> Vec<SlotRow> {
    ColorSlot::ALL
        .iter()
        .map(|&slot| SlotRow {
            slot,
            assigned: slots.color(slot),
            resolved: resolve(slots, slot, mode),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_derived_slots_show_their_resolved_color() {
        let slots = SlotSet::defaults(Mode::Dark);
        let rows = slot_rows(&slots, Mode::Dark);
        assert_eq!(rows.len(), ColorSlot::ALL.len());

        let button = rows
            .iter()
            .find(|r| r.slot == ColorSlot::ButtonBackground)
            .expect("button row");
        assert_eq!(button.assigned, None);
        assert_eq!(button.resolved, PaletteColor::Coral);
        assert_eq!(button.text(), "buttonBackground: auto → coral #ff8475");
    }

    #[test]
    fn assigned_slots_show_their_own_color() {
        let slots = SlotSet::defaults(Mode::Light);
        let rows = slot_rows(&slots, Mode::Light);
        let text = rows
            .iter()
            .find(|r| r.slot == ColorSlot::Text)
            .map(SlotRow::text)
            .expect("text row");
        assert_eq!(text, "text: charcoal #26282b");
    }
}
