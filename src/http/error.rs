//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::providers::ProviderError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Missing or unverifiable bearer token
    Unauthorized(String),
    /// Invalid request (validation error)
    BadRequest(String),
    /// Upstream provider failure
    Provider(ProviderError),
    /// Internal server error
    Internal(String),
}

impl AppError {
    /// Status and body for this error.
    ///
    /// Provider failures deliberately map to a generic message:
    /// upstream error detail is logged, never returned to the caller.
    fn status_and_body(&self) -> (StatusCode, ApiError) {
        match self {
            AppError::Unauthorized(msg) => (
                StatusCode::UNAUTHORIZED,
                ApiError::new("UNAUTHORIZED", msg.clone()),
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("BAD_REQUEST", msg.clone()),
            ),
            AppError::Provider(_) => (
                StatusCode::BAD_GATEWAY,
                ApiError::new("PROVIDER_ERROR", "upstream provider request failed"),
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg.clone()),
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Provider(ref e) = self {
            error!(error = %e, "provider request failed");
        }
        let (status, body) = self.status_and_body();
        (status, Json(body)).into_response()
    }
}

impl From<ProviderError> for AppError {
    fn from(err: ProviderError) -> Self {
        AppError::Provider(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let (status, body) = AppError::Unauthorized("missing bearer token".into()).status_and_body();
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.code, "UNAUTHORIZED");

        let (status, _) = AppError::BadRequest("bad".into()).status_and_body();
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = AppError::Internal("boom".into()).status_and_body();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_provider_error_does_not_leak_detail() {
        let err = AppError::Provider(ProviderError::Status("REQUEST_DENIED".to_string()));
        let (status, body) = err.status_and_body();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(!body.message.contains("REQUEST_DENIED"));
    }
}
