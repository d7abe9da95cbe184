//! Axum route handlers for the analyze API.

use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::debug;

use crate::errors::AppError;
use crate::models::upload::{Preferences, UploadRequest};
use crate::questions::analyzer::analyze_resume;
use crate::state::AppState;

/// Success body. `questions` is the raw, unparsed completion.
#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub success: bool,
    pub questions: String,
}

/// POST /api/analyze
///
/// Multipart fields: `file` (required), `role`, `experience`, `questionType`.
/// A body that is not multipart is answered with the JSON error shape too.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let multipart = multipart.map_err(|e| AppError::MalformedUpload(e.body_text()))?;
    let upload = read_upload(multipart).await?;

    let questions =
        analyze_resume(&upload, state.extractor.as_ref(), state.generator.as_ref()).await?;

    Ok(Json(AnalyzeResponse {
        success: true,
        questions,
    }))
}

async fn read_upload(mut multipart: Multipart) -> Result<UploadRequest, AppError> {
    let mut file = None;
    let mut role = None;
    let mut experience = None;
    let mut question_type = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedUpload(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().unwrap_or("upload.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::MalformedUpload(e.to_string()))?;
                debug!(file_name = %file_name, bytes = data.len(), "File received");
                file = Some((file_name, data));
            }
            "role" => role = Some(read_text(field).await?),
            "experience" => experience = Some(read_text(field).await?),
            "questionType" => question_type = Some(read_text(field).await?),
            other => debug!(field = %other, "Ignoring unknown multipart field"),
        }
    }

    let (file_name, document) = file.ok_or(AppError::MissingFile)?;

    Ok(UploadRequest {
        file_name,
        document,
        preferences: Preferences::from_form(role, experience, question_type),
    })
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::MalformedUpload(e.to_string()))
}
