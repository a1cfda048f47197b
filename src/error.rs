//! Common error types for the outfit gateway

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::backend::failure::{FailureKind, GenerationFailure};

/// Application-wide error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend API key is not configured")]
    MissingCredential,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("{0}")]
    Generation(#[from] GenerationFailure),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Wire error shape: a flat `{ "error": message }` object
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Only single-shot generation failures carry a caller-visible
            // status; batch failures are values inside a 200 response.
            AppError::Generation(failure) => match failure.kind {
                FailureKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
                FailureKind::QuotaExhausted => StatusCode::PAYMENT_REQUIRED,
                FailureKind::Generic => StatusCode::INTERNAL_SERVER_ERROR,
            },
            // Malformed input and missing configuration both surface as a
            // top-level 500, matching the batch endpoint's fatal contract.
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;
