//! Error types for the wireframe cache service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::cache::ProviderError;

// == Repository Error Enum ==
/// Unified error type for the repository and its HTTP surface.
#[derive(Error, Debug)]
pub enum RepoError {
    /// Read found nothing, or the backing store failed. The original provider
    /// error is preserved as the source.
    #[error("no cached data for key {key} in namespace {namespace}")]
    Miss {
        key: String,
        namespace: &'static str,
        #[source]
        source: ProviderError,
    },

    /// Caller supplied a null value on write
    #[error("null value supplied for key {key}")]
    NullValue { key: String },

    /// Backing store failure on write
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

// == IntoResponse Implementation ==
impl IntoResponse for RepoError {
    fn into_response(self) -> Response {
        let status = match &self {
            RepoError::Miss { .. } => StatusCode::NOT_FOUND,
            RepoError::NullValue { .. } => StatusCode::BAD_REQUEST,
            RepoError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the wireframe cache service.
pub type Result<T> = std::result::Result<T, RepoError>;
