//! HTTP helpers shared by the theme API client.

use crate::error::ApiError;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Build an HTTP client with timeout applied.
pub(super) fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Attach a bearer token when one is configured.
pub(super) fn with_bearer(req: reqwest::RequestBuilder, token: Option<&str>) -> reqwest::RequestBuilder {
    match token.map(str::trim).filter(|value| !value.is_empty()) {
        Some(token) => req.header("Authorization", format!("Bearer {token}")),
        None => req,
    }
}

/// Send once and map non-2xx responses to [`ApiError::Status`].
pub(super) async fn send(req: reqwest::RequestBuilder) -> Result<reqwest::Response, ApiError> {
    let response = req.send().await?;
    if !response.status().is_success() {
        let code = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status { code, body });
    }
    Ok(response)
}

/// Send once and parse a JSON body.
pub(super) async fn send_json<T: DeserializeOwned>(req: reqwest::RequestBuilder) -> Result<T, ApiError> {
    let bytes = send(req).await?.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}
