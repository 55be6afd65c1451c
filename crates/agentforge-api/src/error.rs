//! API error types and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use agentforge_protocols::error::ProviderError;

/// Errors surfaced at the facade boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Bad request from the caller; the process keeps serving.
    #[error("{0}")]
    Validation(String),

    /// Provider call failed; not retried.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "validation_error",
            ApiError::Provider(_) => "provider_error",
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    /// Vendor HTTP status, when the provider reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_status: Option<u16>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code: code.into(),
            vendor_status: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = ErrorResponse::new(self.to_string(), self.code());
        if let ApiError::Provider(ref e) = self {
            body.vendor_status = e.status();
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_400() {
        let err = ApiError::Validation("prompt required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "prompt required");
    }

    #[test]
    fn test_provider_maps_to_500() {
        let err = ApiError::from(ProviderError::Network("refused".to_string()));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::Validation("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Provider(ProviderError::ApiError {
            status: 503,
            message: "overloaded".to_string(),
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_response_serialization() {
        let body = ErrorResponse::new("prompt required", "validation_error");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["error"], "prompt required");
        assert_eq!(json["code"], "validation_error");
        assert!(json.get("vendor_status").is_none());
    }
}
