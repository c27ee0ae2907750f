//! Ordered fallback chains for resolving a slot to a concrete palette color.
//!
//! Each slot declares its precedence once here. Both the token encoder and the
//! CSS projection resolve through [`resolve`], so the two can never disagree.

use super::{ColorSlot, Mode, SlotSet};
use crate::palette::PaletteColor;

/// Used only if a chain is exhausted, which the tables below never allow.
pub const LAST_RESORT: PaletteColor = PaletteColor::Charcoal;

/// One candidate in a slot's fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The slot's own value, if set.
    Own,
    /// The slot's own value unless it equals the given slot's resolved value.
    OwnUnlessEqual(ColorSlot),
    /// Another slot's fully resolved value.
    Slot(ColorSlot),
    /// A different candidate per mode.
    PerMode {
        light: &'static Source,
        dark: &'static Source,
    },
    /// The documented default for this slot in the current mode.
    ModeDefault,
    /// A fixed palette color.
    Fixed(PaletteColor),
}

const PAGE_BACKGROUND: &[Source] = &[
    Source::OwnUnlessEqual(ColorSlot::Background),
    Source::Slot(ColorSlot::Background),
    Source::Fixed(PaletteColor::Cloud),
];

// Dark mode must not fall back to the accent: the dark accent (lime) behind
// the dark button text is unreadable, so dark buttons default to coral.
const BUTTON_BACKGROUND: &[Source] = &[
    Source::Own,
    Source::PerMode {
        light: &Source::Slot(ColorSlot::Accent),
        dark: &Source::Fixed(DARK_BUTTON_FALLBACK),
    },
    Source::Fixed(DARK_BUTTON_FALLBACK),
];

const BUTTON_HOVER: &[Source] = &[
    Source::Own,
    Source::Slot(ColorSlot::ButtonBackground),
    Source::Fixed(DARK_BUTTON_FALLBACK),
];

const BASE: &[Source] = &[Source::Own, Source::ModeDefault, Source::Fixed(LAST_RESORT)];

/// Fixed dark-mode button color used when `buttonBackground` is unset.
pub const DARK_BUTTON_FALLBACK: PaletteColor = PaletteColor::Coral;

/// Fallback chain for a slot, highest precedence first.
pub fn chain(slot: ColorSlot) -> &'static [Source] {
    match slot {
        ColorSlot::PageBackground => PAGE_BACKGROUND,
        ColorSlot::ButtonBackground => BUTTON_BACKGROUND,
        ColorSlot::ButtonHover => BUTTON_HOVER,
        _ => BASE,
    }
}

/// Resolve a slot to a palette color by walking its chain.
pub fn resolve(slots: &SlotSet, slot: ColorSlot, mode: Mode) -> PaletteColor {
    chain(slot)
        .iter()
        .find_map(|source| evaluate(slots, slot, mode, source))
        .unwrap_or(LAST_RESORT)
}

/// Resolve a slot straight to its hex value.
pub fn resolve_hex(slots: &SlotSet, slot: ColorSlot, mode: Mode) -> &'static str {
    resolve(slots, slot, mode).hex()
}

fn evaluate(slots: &SlotSet, slot: ColorSlot, mode: Mode, source: &Source) -> Option<PaletteColor> {
    match *source {
        Source::Own => slots.color(slot),
        Source::OwnUnlessEqual(other) => {
            let own = slots.color(slot)?;
            (own != resolve(slots, other, mode)).then_some(own)
        }
        Source::Slot(other) => Some(resolve(slots, other, mode)),
        Source::PerMode { light, dark } => {
            let picked = match mode {
                Mode::Light => light,
                Mode::Dark => dark,
            };
            evaluate(slots, slot, mode, picked)
        }
        Source::ModeDefault => SlotSet::defaults(mode).color(slot),
        Source::Fixed(color) => Some(color),
    }
}
