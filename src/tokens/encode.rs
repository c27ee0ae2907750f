//! Slot set → token tree.

use super::{TokenTree, FIELDS};
use crate::slots::resolve::resolve_hex;
use crate::slots::{ColorSlot, Mode, SlotSet, ThemeState};
use std::fmt;

/// Non-fatal findings produced while encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecWarning {
    /// Light and dark backgrounds encode to the same hex.
    BackgroundCollision { hex: String },
}

impl fmt::Display for CodecWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BackgroundCollision { hex } => write!(
                f,
                "light and dark backgrounds are both {hex}; modes will look identical"
            ),
        }
    }
}

/// Both modes encoded together plus any cross-mode warnings.
#[derive(Debug, Clone)]
pub struct EncodedPair {
    pub light: TokenTree,
    pub dark: TokenTree,
    pub warnings: Vec<CodecWarning>,
}

/// Encode one mode's slots into a token tree.
///
/// Every color slot is resolved through its fallback chain, so the output
/// never has a missing color. Each value lands at its nested semantic path
/// and again as a bare top-level field.
pub fn encode(slots: &SlotSet, mode: Mode) -> TokenTree {
    let mut tree = TokenTree::default();
    for field in FIELDS {
        let hex = resolve_hex(slots, field.slot, mode);
        tree.insert(field.nested, hex);
        tree.insert(field.bare, hex);
    }
    tree.insert(&["buttonStyle"], slots.button_style.key());
    tree.insert(&["borderWeight"], slots.border_weight.key());
    tree
}

/// Encode both modes for a dual-mode save.
pub fn encode_pair(state: &ThemeState) -> EncodedPair {
    let light = encode(&state.light, Mode::Light);
    let dark = encode(&state.dark, Mode::Dark);
    let mut warnings = Vec::new();

    let dark_bg = background_hex(&dark);
    if let Some(hex) = background_hex(&light).filter(|hex| Some(*hex) == dark_bg) {
        tracing::warn!(%hex, "light and dark backgrounds encode to the same color");
        warnings.push(CodecWarning::BackgroundCollision {
            hex: hex.to_string(),
        });
    }

    EncodedPair {
        light,
        dark,
        warnings,
    }
}

fn background_hex(tree: &TokenTree) -> Option<&str> {
    FIELDS
        .iter()
        .find(|f| f.slot == ColorSlot::Background)
        .and_then(|f| tree.lookup(f.nested))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{BorderWeight, ButtonStyle, PaletteColor};
    use crate::slots::resolve::DARK_BUTTON_FALLBACK;

    #[test]
    fn nested_and_bare_shapes_carry_the_same_values() {
        let slots = SlotSet::defaults(Mode::Light);
        let tree = encode(&slots, Mode::Light);
        for field in FIELDS {
            assert_eq!(tree.lookup(field.nested), tree.lookup(field.bare), "{}", field.slot);
            assert!(tree.lookup(field.nested).is_some(), "{} missing", field.slot);
        }
        assert_eq!(
            tree.lookup(&["colors", "semantic", "background", "primary"]),
            Some(PaletteColor::Cloud.hex())
        );
        assert_eq!(tree.lookup(&["colors", "primary", "500"]), Some(slots.accent.hex()));
    }

    #[test]
    fn dark_unset_button_background_uses_fixed_fallback_not_accent() {
        let mut dark = SlotSet::defaults(Mode::Dark);
        dark.button_background = None;
        dark.accent = PaletteColor::Lime;
        let tree = encode(&dark, Mode::Dark);
        assert_eq!(tree.lookup(&["buttonBackground"]), Some(DARK_BUTTON_FALLBACK.hex()));
        assert_ne!(tree.lookup(&["buttonBackground"]), Some(PaletteColor::Lime.hex()));
    }

    #[test]
    fn light_unset_button_background_uses_accent() {
        let mut light = SlotSet::defaults(Mode::Light);
        light.button_background = None;
        light.accent = PaletteColor::Ice;
        let tree = encode(&light, Mode::Light);
        assert_eq!(tree.lookup(&["buttonBackground"]), Some(PaletteColor::Ice.hex()));
        // Hover follows the resolved button background.
        assert_eq!(tree.lookup(&["buttonHover"]), Some(PaletteColor::Ice.hex()));
    }

    #[test]
    fn page_background_defaults_to_background() {
        let dark = SlotSet::defaults(Mode::Dark);
        let tree = encode(&dark, Mode::Dark);
        assert_eq!(tree.lookup(&["pageBackground"]), Some(dark.background.hex()));
    }

    #[test]
    fn style_fields_are_encoded_as_keys() {
        let mut slots = SlotSet::defaults(Mode::Light);
        slots.button_style = ButtonStyle::Outline;
        slots.border_weight = BorderWeight::Thick;
        let tree = encode(&slots, Mode::Light);
        assert_eq!(tree.lookup(&["buttonStyle"]), Some("outline"));
        assert_eq!(tree.lookup(&["borderWeight"]), Some("thick"));
    }

    #[test]
    fn pair_warns_on_background_collision_only() {
        let state = ThemeState::default();
        assert!(encode_pair(&state).warnings.is_empty());

        let mut collided = ThemeState::default();
        collided.dark.background = collided.light.background;
        let pair = encode_pair(&collided);
        assert_eq!(
            pair.warnings,
            vec![CodecWarning::BackgroundCollision {
                hex: PaletteColor::Cloud.hex().to_string()
            }]
        );
    }
}
