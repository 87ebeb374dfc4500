//! Error types for md-cover-api
//!
//! Client-visible bodies are short fixed plain-text strings. Upstream detail
//! only goes to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::MBError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or empty required parameter (400)
    #[error("Invalid request: {0}")]
    BadRequest(&'static str),

    /// Upstream lookup failed (500)
    #[error("{operation} failed: {source}")]
    Upstream {
        /// Operation name for the server log
        operation: &'static str,
        /// Generic text sent to the client
        public_message: &'static str,
        source: MBError,
    },
}

impl ApiError {
    /// Adapter for `map_err` on upstream calls
    pub fn upstream(
        operation: &'static str,
        public_message: &'static str,
    ) -> impl FnOnce(MBError) -> Self {
        move |source| ApiError::Upstream {
            operation,
            public_message,
            source,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            ApiError::Upstream {
                operation,
                public_message,
                source,
            } => {
                tracing::error!(operation, error = %source, "Upstream request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, public_message).into_response()
            }
        }
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
