//! reqwest-backed client for `/api/themes`.

mod transport;

use super::{Theme, ThemeApi, ThemePayload, ThemeSelection};
use crate::config::ApiConfig;
use crate::error::ApiError;
use async_trait::async_trait;

/// HTTP client for the persisted-theme endpoints.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Build a client from resolved API configuration.
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: transport::build_http_client(config.timeout()),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        }
    }

    /// `{base}/api/themes/{segments..}` with each segment percent-encoded,
    /// so an id can never address a different route.
    fn endpoint(&self, segments: &[&str]) -> Result<reqwest::Url, ApiError> {
        let mut url = reqwest::Url::parse(&self.base_url)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {e}", self.base_url)))?;
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{} cannot be a base url", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "themes"])
            .extend(segments);
        Ok(url)
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        transport::with_bearer(req, self.token.as_deref())
    }
}

const SELECTION_PATH: [&str; 2] = ["user", "selection"];

#[async_trait]
impl ThemeApi for ApiClient {
    async fn list(&self) -> Result<Vec<Theme>, ApiError> {
        tracing::debug!("listing themes");
        let url = self.endpoint(&[])?;
        transport::send_json(self.authorized(self.http.get(url))).await
    }

    async fn create(&self, payload: &ThemePayload) -> Result<Theme, ApiError> {
        tracing::debug!(name = ?payload.name, "creating theme");
        let url = self.endpoint(&[])?;
        transport::send_json(self.authorized(self.http.post(url).json(payload))).await
    }

    async fn update(&self, id: &str, payload: &ThemePayload) -> Result<Theme, ApiError> {
        tracing::debug!(id, "updating theme");
        let url = self.endpoint(&[id])?;
        transport::send_json(self.authorized(self.http.put(url).json(payload))).await
    }

    async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting theme");
        let url = self.endpoint(&[id])?;
        transport::send(self.authorized(self.http.delete(url))).await?;
        Ok(())
    }

    async fn selection(&self) -> Result<ThemeSelection, ApiError> {
        let url = self.endpoint(&SELECTION_PATH)?;
        transport::send_json(self.authorized(self.http.get(url))).await
    }

    async fn set_selection(&self, selection: &ThemeSelection) -> Result<ThemeSelection, ApiError> {
        let url = self.endpoint(&SELECTION_PATH)?;
        transport::send_json(self.authorized(self.http.post(url).json(selection))).await
    }
}
