//! Persisted token representation of a theme mode.
//!
//! A [`TokenTree`] is the hex-based JSON document stored on the server for one
//! mode. The field table below is shared by both codec directions: the encoder
//! writes each slot to its nested path and to a bare top-level field, and the
//! decoder reads the nested path, then the legacy `colors.<field>` shape, then
//! the bare field.

pub mod decode;
pub mod encode;

pub use decode::decode;
pub use encode::{encode, encode_pair, CodecWarning, EncodedPair};

use crate::slots::ColorSlot;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Hex-based JSON token document for one mode.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenTree(Value);

impl TokenTree {
    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// String at `path`, ignoring missing, non-string, and blank values.
    pub fn lookup(&self, path: &[&str]) -> Option<&str> {
        let mut cursor = &self.0;
        for segment in path {
            cursor = cursor.as_object()?.get(*segment)?;
        }
        cursor.as_str().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Write a string at `path`, creating intermediate objects as needed.
    pub(crate) fn insert(&mut self, path: &[&str], value: &str) {
        insert_at(&mut self.0, path, value);
    }
}

fn insert_at(node: &mut Value, path: &[&str], leaf: &str) {
    let Some((head, rest)) = path.split_first() else {
        *node = Value::String(leaf.to_string());
        return;
    };
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    if let Value::Object(map) = node {
        let child = map.entry(head.to_string()).or_insert(Value::Null);
        insert_at(child, rest, leaf);
    }
}

/// Where one color slot lives inside a token tree.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TokenField {
    pub slot: ColorSlot,
    pub nested: &'static [&'static str],
    pub legacy: &'static [&'static str],
    pub bare: &'static [&'static str],
}

impl TokenField {
    /// Candidate paths in decode precedence order.
    pub fn candidates(&self) -> [&'static [&'static str]; 3] {
        [self.nested, self.legacy, self.bare]
    }
}

macro_rules! token_field {
    ($slot:ident, [$($nested:literal),+], $key:literal) => {
        TokenField {
            slot: ColorSlot::$slot,
            nested: &[$($nested),+],
            legacy: &["colors", $key],
            bare: &[$key],
        }
    };
}

pub(crate) const FIELDS: [TokenField; 12] = [
    token_field!(PageBackground, ["colors", "semantic", "background", "page"], "pageBackground"),
    token_field!(Background, ["colors", "semantic", "background", "primary"], "background"),
    token_field!(Surface, ["colors", "semantic", "background", "secondary"], "surface"),
    token_field!(Card, ["colors", "semantic", "background", "tertiary"], "card"),
    token_field!(CardText, ["colors", "semantic", "text", "secondary"], "cardText"),
    token_field!(Text, ["colors", "semantic", "text", "primary"], "text"),
    token_field!(Accent, ["colors", "primary", "500"], "accent"),
    token_field!(BorderColor, ["colors", "semantic", "border", "primary"], "borderColor"),
    token_field!(ButtonBackground, ["colors", "semantic", "button", "background"], "buttonBackground"),
    token_field!(ButtonText, ["colors", "semantic", "button", "text"], "buttonText"),
    token_field!(ButtonBorder, ["colors", "semantic", "button", "border"], "buttonBorder"),
    token_field!(ButtonHover, ["colors", "semantic", "button", "hover"], "buttonHover"),
];

pub(crate) const BUTTON_STYLE_PATHS: [&[&str]; 2] = [&["buttonStyle"], &["styles", "buttonStyle"]];
pub(crate) const BORDER_WEIGHT_PATHS: [&[&str]; 2] = [&["borderWeight"], &["styles", "borderWeight"]];

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lookup_skips_blank_and_non_string_values() {
        let tree = TokenTree::from_value(json!({
            "a": { "b": "  " },
            "n": 5,
            "ok": { "x": " #ffffff " }
        }));
        assert_eq!(tree.lookup(&["a", "b"]), None);
        assert_eq!(tree.lookup(&["n"]), None);
        assert_eq!(tree.lookup(&["missing", "x"]), None);
        assert_eq!(tree.lookup(&["ok", "x"]), Some("#ffffff"));
    }

    #[test]
    fn insert_builds_nested_objects() {
        let mut tree = TokenTree::default();
        tree.insert(&["colors", "primary", "500"], "#ff8475");
        tree.insert(&["colors", "semantic", "text", "primary"], "#26282b");
        assert_eq!(tree.lookup(&["colors", "primary", "500"]), Some("#ff8475"));
        assert_eq!(
            tree.as_value()["colors"]["semantic"]["text"]["primary"],
            "#26282b"
        );
    }

    #[test]
    fn field_table_covers_every_slot_once() {
        for slot in ColorSlot::ALL {
            let count = FIELDS.iter().filter(|f| f.slot == slot).count();
            assert_eq!(count, 1, "{slot}");
        }
        for field in FIELDS {
            assert_eq!(field.bare, &[field.slot.key()]);
        }
    }
}
