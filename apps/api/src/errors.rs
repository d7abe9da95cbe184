use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

pub const MISSING_FILE_MESSAGE: &str = "No file was uploaded.";
pub const NO_TEXT_MESSAGE: &str = "Could not extract text from the PDF.";
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate interview questions.";
pub const MALFORMED_UPLOAD_MESSAGE: &str = "The upload could not be read.";

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant maps to a fixed, generic message. Causes carried by a variant
/// are logged here and never serialized into the response body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("no file field in the submission")]
    MissingFile,

    #[error("no extractable text: {0}")]
    NoExtractableText(String),

    #[error("generation failed: {0}")]
    GenerationFailed(#[from] LlmError),

    #[error("malformed upload: {0}")]
    MalformedUpload(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MissingFile | AppError::NoExtractableText(_) | AppError::MalformedUpload(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The message shown to the user.
    pub fn public_message(&self) -> &'static str {
        match self {
            AppError::MissingFile => MISSING_FILE_MESSAGE,
            AppError::NoExtractableText(_) => NO_TEXT_MESSAGE,
            AppError::GenerationFailed(_) => GENERATION_FAILED_MESSAGE,
            AppError::MalformedUpload(_) => MALFORMED_UPLOAD_MESSAGE,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::MissingFile => tracing::warn!("Analyze request without a file"),
            AppError::NoExtractableText(reason) => {
                tracing::warn!("No extractable text: {reason}")
            }
            AppError::MalformedUpload(reason) => tracing::warn!("Malformed upload: {reason}"),
            AppError::GenerationFailed(e) => tracing::error!("Generation error: {e}"),
        }

        let body = Json(json!({ "error": self.public_message() }));

        (self.status(), body).into_response()
    }
}
