//! Wire types for the persisted-theme REST surface.

use crate::slots::Mode;
use crate::tokens::TokenTree;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Persisted theme row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Legacy rows may carry only one mode, or none.
    #[serde(default)]
    pub light_mode_tokens: Option<TokenTree>,
    #[serde(default)]
    pub dark_mode_tokens: Option<TokenTree>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Body for `POST /api/themes` and (partially filled) `PUT /api/themes/:id`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ThemePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub light_mode_tokens: Option<TokenTree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode_tokens: Option<TokenTree>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Which persisted theme and mode the requesting user has applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeSelection {
    #[serde(default, deserialize_with = "optional_id_string")]
    pub theme_id: Option<String>,
    #[serde(default, alias = "theme_mode")]
    pub mode: Option<Mode>,
}

impl ThemeSelection {
    pub fn is_applied(&self) -> bool {
        self.theme_id.is_some()
    }
}

// Postgres ids may arrive as numbers or uuid strings.
fn id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!("invalid theme id: {other}"))),
    }
}

fn optional_id_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        other => Err(serde::de::Error::custom(format!("invalid theme id: {other}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn theme_accepts_numeric_id_and_missing_tokens() {
        let theme: Theme = serde_json::from_value(json!({
            "id": 42,
            "name": "Harbor",
            "light_mode_tokens": { "background": "#ffffff" },
            "dark_mode_tokens": null,
            "is_active": true
        }))
        .expect("theme");
        assert_eq!(theme.id, "42");
        assert!(theme.light_mode_tokens.is_some());
        assert!(theme.dark_mode_tokens.is_none());
    }

    #[test]
    fn payload_omits_unset_fields() {
        let payload = ThemePayload {
            name: Some("x".into()),
            ..ThemePayload::default()
        };
        assert_eq!(serde_json::to_value(&payload).expect("json"), json!({ "name": "x" }));
    }

    #[test]
    fn selection_accepts_theme_mode_alias_and_null_id() {
        let selection: ThemeSelection =
            serde_json::from_value(json!({ "theme_id": "abc", "theme_mode": "dark" })).expect("selection");
        assert_eq!(selection.mode, Some(Mode::Dark));
        assert!(selection.is_applied());

        let none: ThemeSelection = serde_json::from_value(json!({ "theme_id": null })).expect("selection");
        assert!(!none.is_applied());
    }
}
