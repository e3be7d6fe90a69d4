//! API error handling
//!
//! Faults are logged server-side and translated into a generic, detail-free
//! JSON response at the handler boundary.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

/// Structured JSON error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// API error type that converts to JSON responses
#[derive(Debug)]
pub enum ApiError {
    /// Unexpected fault while building the version payload
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, response) = match self {
            ApiError::Internal(msg) => {
                error!("Error getting app version: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        message: "Error getting version information".to_string(),
                    },
                )
            }
        };

        (status, Json(response)).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
