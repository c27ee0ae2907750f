//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`THEMEKIT_API_BASE_URL`, `THEMEKIT_API_TOKEN`,
//!    `THEMEKIT_STATE_PATH`, `THEMEKIT_MODE`)
//! 2. TOML file specified via --config CLI flag
//! 3. ./themekit.toml in the current directory
//! 4. $XDG_CONFIG_HOME/themekit/themekit.toml (or the platform equivalent)
//! 5. Built-in defaults

use crate::error::ConfigError;
use crate::slots::Mode;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

mod defaults;
mod types;

use defaults::{APP_DIR_NAME, CONFIG_FILE_NAME};
pub use types::{ApiConfig, Config, DisplayConfig, ProjectionConfig, StorageConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from --config flag).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    load_config_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        dirs::config_dir,
    )
}

fn load_config_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<Config, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (text, source) = read_config_text(path_override, &read_file, &config_root)?;
    if let Some(source) = &source {
        tracing::debug!(path = %source.display(), "loaded config file");
    }
    let mut config: Config = toml::from_str(&text)?;
    apply_env_overrides(&mut config, &env_lookup)?;
    validate(&config)?;
    Ok(config)
}

fn read_config_text<FRead, FRoot>(
    path_override: Option<&str>,
    read_file: &FRead,
    config_root: &FRoot,
) -> Result<(String, Option<PathBuf>), ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FRoot: Fn() -> Option<PathBuf>,
{
    // An explicit path must exist; implicit locations are optional.
    if let Some(p) = path_override {
        let path = PathBuf::from(p);
        let text = read_file(&path)?;
        return Ok((text, Some(path)));
    }

    let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
    if let Some(root) = config_root() {
        candidates.push(root.join(APP_DIR_NAME).join(CONFIG_FILE_NAME));
    }
    for path in candidates {
        match read_file(&path) {
            Ok(text) => return Ok((text, Some(path))),
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok((String::new(), None))
}

fn apply_env_overrides<FEnv>(config: &mut Config, env_lookup: &FEnv) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let non_empty = |name: &str| env_lookup(name).filter(|v| !v.trim().is_empty());

    if let Some(base_url) = non_empty("THEMEKIT_API_BASE_URL") {
        config.api.base_url = base_url.trim().to_string();
    }
    if let Some(token) = non_empty("THEMEKIT_API_TOKEN") {
        config.api.token = Some(token.trim().to_string());
    }
    if let Some(path) = non_empty("THEMEKIT_STATE_PATH") {
        config.storage.state_path = Some(PathBuf::from(path.trim()));
    }
    if let Some(mode) = non_empty("THEMEKIT_MODE") {
        config.display.mode = Mode::from_key(&mode).ok_or_else(|| {
            ConfigError::Invalid(format!("THEMEKIT_MODE must be `light` or `dark`, got `{mode}`"))
        })?;
    }
    Ok(())
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let base_url = config.api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        return Err(ConfigError::Invalid(format!(
            "api.base_url must be an http(s) URL, got `{base_url}`"
        )));
    }
    if config.api.timeout_secs == 0 {
        return Err(ConfigError::Invalid(
            "api.timeout_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}
