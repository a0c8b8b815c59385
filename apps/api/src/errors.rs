use axum::extract::multipart::MultipartError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::extract::ExtractError;
use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// This is the only place errors become HTTP status codes. Components below
/// the handler layer propagate their own error types unmodified.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Multipart error: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// The provider could not be reached or returned no usable content.
    #[error("Provider error: {0}")]
    Provider(LlmError),

    /// The evaluator responded, but not in the agreed verdict structure.
    #[error("Schema error: {0}")]
    Schema(LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<LlmError> for AppError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::Schema(_) => AppError::Schema(err),
            _ => AppError::Provider(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Multipart(e) => (
                StatusCode::BAD_REQUEST,
                "MULTIPART_ERROR",
                format!("Could not read uploaded form data: {e}"),
            ),
            AppError::Extract(e @ ExtractError::Format { .. }) => {
                (StatusCode::BAD_REQUEST, "FORMAT_ERROR", e.to_string())
            }
            AppError::Extract(e @ ExtractError::Extraction { .. }) => {
                (StatusCode::BAD_REQUEST, "EXTRACTION_ERROR", e.to_string())
            }
            AppError::Provider(e) => {
                tracing::error!("Provider error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_ERROR",
                    "The AI provider could not complete the request".to_string(),
                )
            }
            AppError::Schema(e) => {
                tracing::error!("Schema error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "SCHEMA_ERROR",
                    "The evaluator returned an unexpected response format".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
