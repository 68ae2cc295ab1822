use std::net::SocketAddr;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::core::models::ErrorBody;

// Error codes
const ERROR_CLOCK_UNAVAILABLE: &str = "clock_unavailable";
const ERROR_INTERNAL: &str = "internal_error";

/// Custom error types for better error handling
#[derive(Debug, thiserror::Error)]
pub enum TimeApiError {
    #[error("Clock unavailable: {reason}")]
    ClockUnavailable { reason: String },
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },
    #[error("Failed to bind {address}: {source}")]
    Bind {
        address: SocketAddr,
        #[source]
        source: std::io::Error,
    },
    #[error("Server error: {0}")]
    Serve(#[from] std::io::Error),
    /// Logging initialization failed
    #[error("Logging initialization failed: {0}")]
    LoggingInitialization(String),
}

impl TimeApiError {
    fn code(&self) -> &'static str {
        match self {
            TimeApiError::ClockUnavailable { .. } => ERROR_CLOCK_UNAVAILABLE,
            _ => ERROR_INTERNAL,
        }
    }
}

impl IntoResponse for TimeApiError {
    fn into_response(self) -> Response {
        tracing::error!("Request failed: {}", self);

        let body = ErrorBody {
            error: self.code().to_string(),
            message: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

pub type TimeApiResult<T> = Result<T, TimeApiError>;
