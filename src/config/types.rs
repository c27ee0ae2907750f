//! Configuration data model.
//!
//! Struct definitions and defaults only; loading and precedence live in
//! `config::mod`.

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::{
    APP_DIR_NAME, DEFAULT_API_BASE_URL, DEFAULT_API_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_MS,
    STATE_FILE_NAME,
};
use crate::slots::Mode;

/// Top-level runtime configuration.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub api: ApiConfig,
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub projection: ProjectionConfig,
}

/// `[api]`: persisted-theme server connection.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token sent with every request, if set.
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            token: None,
            timeout_secs: DEFAULT_API_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// `[storage]`: where editor state is kept between runs.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageConfig {
    pub state_path: Option<PathBuf>,
}

impl StorageConfig {
    /// Configured path, else `<config dir>/themekit/state.json`, else a
    /// relative `state.json`.
    pub fn resolved_state_path(&self) -> PathBuf {
        if let Some(path) = &self.state_path {
            return path.clone();
        }
        dirs::config_dir()
            .map(|root| root.join(APP_DIR_NAME).join(STATE_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(STATE_FILE_NAME))
    }
}

/// `[display]`: terminal output preferences.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color mode the store projects at startup.
    pub mode: Mode,
    /// Print color swatches in `show`.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Light,
            color: true,
        }
    }
}

/// `[projection]`: where projected CSS variables go.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Stylesheet rewritten on every projection; disabled when unset.
    pub css_output: Option<PathBuf>,
    pub settle_delay_ms: u64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            css_output: None,
            settle_delay_ms: DEFAULT_SETTLE_DELAY_MS,
        }
    }
}

impl ProjectionConfig {
    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}
