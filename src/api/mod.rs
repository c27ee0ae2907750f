//! Client side of the persisted-theme REST API.
//!
//! - `types`: wire shapes for themes and the per-user selection
//! - `client`: reqwest implementation of [`ThemeApi`]

use crate::error::ApiError;
use async_trait::async_trait;

mod client;
mod types;

pub use client::ApiClient;
pub use types::{Theme, ThemePayload, ThemeSelection};

/// Persisted-theme operations consumed by the editor.
///
/// Tests substitute an in-memory implementation; production uses
/// [`ApiClient`]. Every call is a single attempt with no retry.
#[async_trait]
pub trait ThemeApi: Send + Sync {
    /// `GET /api/themes`
    async fn list(&self) -> Result<Vec<Theme>, ApiError>;
    /// `POST /api/themes`
    async fn create(&self, payload: &ThemePayload) -> Result<Theme, ApiError>;
    /// `PUT /api/themes/:id`
    async fn update(&self, id: &str, payload: &ThemePayload) -> Result<Theme, ApiError>;
    /// `DELETE /api/themes/:id`
    async fn delete(&self, id: &str) -> Result<(), ApiError>;
    /// `GET /api/themes/user/selection`
    async fn selection(&self) -> Result<ThemeSelection, ApiError>;
    /// `POST /api/themes/user/selection`
    async fn set_selection(&self, selection: &ThemeSelection) -> Result<ThemeSelection, ApiError>;
}
