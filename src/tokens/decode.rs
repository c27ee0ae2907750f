//! Token tree → slot set.
//!
//! Persisted trees come from several historical shapes, so every field is read
//! from an ordered list of candidate paths and the first non-empty value wins.
//! Decoding is a pure function of one tree and one mode: it starts from that
//! mode's defaults and never sees the other mode's state.

use super::{TokenTree, BORDER_WEIGHT_PATHS, BUTTON_STYLE_PATHS, FIELDS};
use crate::palette::{nearest, BorderWeight, ButtonStyle};
use crate::slots::resolve::resolve;
use crate::slots::{ColorSlot, Mode, SlotSet};

/// Decode one mode's token tree into a slot set.
pub fn decode(tree: &TokenTree, mode: Mode) -> SlotSet {
    let mut slots = SlotSet::defaults(mode);

    for field in FIELDS {
        let found = field
            .candidates()
            .into_iter()
            .find_map(|path| tree.lookup(path));

        let Some(hex) = found.or_else(|| default_hex(field.slot, mode)) else {
            // Derived slot with no stored value: leave it to its fallback chain.
            slots.clear(field.slot, mode);
            continue;
        };

        match nearest(hex) {
            Some(color) => slots.assign(field.slot, color),
            None => {
                tracing::warn!(
                    %mode,
                    slot = field.slot.key(),
                    value = hex,
                    "unparseable color in theme tokens; using default"
                );
                slots.clear(field.slot, mode);
            }
        }
    }

    relink_derived_slots(&mut slots, mode);

    if let Some(raw) = first_string(tree, &BUTTON_STYLE_PATHS) {
        match ButtonStyle::from_key(raw) {
            Some(style) => slots.button_style = style,
            None => tracing::warn!(%mode, value = raw, "unknown buttonStyle in theme tokens"),
        }
    }
    if let Some(raw) = first_string(tree, &BORDER_WEIGHT_PATHS) {
        match BorderWeight::from_key(raw) {
            Some(weight) => slots.border_weight = weight,
            None => tracing::warn!(%mode, value = raw, "unknown borderWeight in theme tokens"),
        }
    }

    slots
}

/// Encoded trees always carry a concrete hex for derived slots. A stored color
/// equal to what the slot's chain yields without it is read back as unset, so
/// the slot keeps following its source (e.g. `pageBackground` tracks
/// `background`) after a save/load cycle.
fn relink_derived_slots(slots: &mut SlotSet, mode: Mode) {
    for slot in ColorSlot::ALL.into_iter().filter(|s| s.is_derived()) {
        let Some(own) = slots.color(slot) else {
            continue;
        };
        let mut unset = slots.clone();
        unset.clear(slot, mode);
        if resolve(&unset, slot, mode) == own {
            slots.clear(slot, mode);
        }
    }
}

/// Mode-aware default hex for a slot; `None` for derived slots.
fn default_hex(slot: ColorSlot, mode: Mode) -> Option<&'static str> {
    SlotSet::defaults(mode).color(slot).map(|color| color.hex())
}

fn first_string<'a>(tree: &'a TokenTree, paths: &[&[&str]]) -> Option<&'a str> {
    paths.iter().find_map(|path| tree.lookup(path))
}
