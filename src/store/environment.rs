//! Targets that receive projected CSS variables.

use super::Environment;
use crate::css::CssVariables;
use crate::slots::Mode;
use std::fs;
use std::path::PathBuf;

/// Discards every projection.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEnvironment;

impl Environment for NullEnvironment {
    fn apply(&mut self, _mode: Mode, _vars: &CssVariables) {}
}

/// Writes the active mode's variables as a `:root` stylesheet file.
///
/// This stands in for the document root: a page can link the file and pick up
/// every re-projection.
#[derive(Debug, Clone)]
pub struct CssFileEnvironment {
    path: PathBuf,
}

impl CssFileEnvironment {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Environment for CssFileEnvironment {
    fn apply(&mut self, mode: Mode, vars: &CssVariables) {
        let body = format!("/* mode: {mode} */\n{}\n", vars.to_block(":root"));
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), %err, "failed to create css output directory");
                return;
            }
        }
        if let Err(err) = fs::write(&self.path, body) {
            tracing::warn!(path = %self.path.display(), %err, "failed to write projected css");
        }
    }
}
