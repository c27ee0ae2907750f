//! Default configuration constants.

/// Config file name looked up in the working directory and config root.
pub(super) const CONFIG_FILE_NAME: &str = "themekit.toml";
/// Directory under the platform config root.
pub(super) const APP_DIR_NAME: &str = "themekit";
/// Local theme state file under the app directory.
pub(super) const STATE_FILE_NAME: &str = "state.json";
/// Express API server used in development.
pub(super) const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
/// Default timeout for theme API requests.
pub(super) const DEFAULT_API_TIMEOUT_SECS: u64 = 30;
/// Wait after a light/dark toggle before re-reading the mode.
pub(super) const DEFAULT_SETTLE_DELAY_MS: u64 = 50;
