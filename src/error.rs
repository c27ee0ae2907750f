//! Unified error types for the theme engine.

use std::fmt;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading or parsing configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the persisted-theme HTTP API.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the API.
    Status { code: u16, body: String },
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
    /// The configured base URL cannot carry theme paths.
    InvalidUrl(String),
}

impl ApiError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status { code, body } => write!(f, "status {code}: {body}"),
            Self::Decode(msg) => write!(f, "unexpected response: {msg}"),
            Self::InvalidUrl(msg) => write!(f, "invalid url: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// StorageError
// ---------------------------------------------------------------------------

/// Errors reading or writing the local theme state.
#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Json(e) => write!(f, "json: {e}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

// ---------------------------------------------------------------------------
// ThemeError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type for theme editing operations.
#[derive(Debug)]
pub enum ThemeError {
    UnknownPreset(String),
    /// An update was attempted for a theme that was never loaded.
    UpdateWithoutLoad { id: String },
    /// Creating another active theme would exceed the cap.
    ActiveLimitExceeded { limit: usize },
    ThemeNotFound(String),
    Api(ApiError),
    Storage(StorageError),
}

impl fmt::Display for ThemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPreset(name) => write!(f, "unknown preset `{name}`"),
            Self::UpdateWithoutLoad { id } => write!(
                f,
                "theme {id} has not been loaded into the editor; load it before saving changes"
            ),
            Self::ActiveLimitExceeded { limit } => write!(
                f,
                "{limit} themes are already active; deactivate or delete one before creating another"
            ),
            Self::ThemeNotFound(id) => write!(f, "theme {id} not found"),
            Self::Api(e) => write!(f, "api: {e}"),
            Self::Storage(e) => write!(f, "storage: {e}"),
        }
    }
}

impl std::error::Error for ThemeError {}

impl From<ApiError> for ThemeError {
    fn from(e: ApiError) -> Self {
        Self::Api(e)
    }
}

impl From<StorageError> for ThemeError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let e = ConfigError::from(io_err);
        let s = e.to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        let e = ConfigError::from(toml_err);
        assert!(e.to_string().starts_with("toml:"));
    }

    #[test]
    fn api_status_exposes_code() {
        let e = ApiError::Status {
            code: 409,
            body: "conflict".into(),
        };
        assert_eq!(e.status_code(), Some(409));
        assert_eq!(e.to_string(), "status 409: conflict");
        assert_eq!(ApiError::Decode("x".into()).status_code(), None);
    }

    #[test]
    fn update_without_load_tells_user_to_load_first() {
        let e = ThemeError::UpdateWithoutLoad { id: "t1".into() };
        assert!(e.to_string().contains("load it before saving"), "got: {e}");
    }

    #[test]
    fn theme_error_wraps_storage() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let e = ThemeError::from(StorageError::from(io_err));
        assert!(e.to_string().starts_with("storage: io:"), "got: {e}");
    }
}
