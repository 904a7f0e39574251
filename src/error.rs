//! Error types for the DevSecOps platform service.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

/// Unified error type for platform operations.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error response body for API clients.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl From<JsonRejection> for PlatformError {
    fn from(rejection: JsonRejection) -> Self {
        PlatformError::MalformedInput(rejection.body_text())
    }
}

impl IntoResponse for PlatformError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match &self {
            PlatformError::MalformedInput(msg) => {
                tracing::warn!(reason = %msg, "Rejected malformed input");
                (
                    StatusCode::BAD_REQUEST,
                    "MALFORMED_INPUT",
                    msg.clone(),
                    None,
                )
            }
            PlatformError::Config(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                "Configuration error".to_string(),
                Some(msg.clone()),
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for platform operations.
pub type PlatformResult<T> = Result<T, PlatformError>;
