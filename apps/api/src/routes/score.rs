use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, ResumeFileType};
use crate::scoring::Report;
use crate::state::AppState;

/// Multipart field name for the uploaded file.
const RESUME_FIELD: &str = "resume";

/// POST /api/v1/resumes/score
///
/// Accepts a multipart upload with a `resume` file field, extracts its text,
/// and returns the quality report.
pub async fn handle_score_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Report>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field
            .file_name()
            .ok_or_else(|| AppError::Validation("Resume file must have a filename.".to_string()))?
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;
        upload = Some((file_name, data));
        break;
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("Resume file is required.".to_string()))?;

    let file_type = ResumeFileType::from_file_name(&file_name)?;
    let text = extract_text(file_type, &data)?;

    info!(
        "Scoring uploaded resume '{file_name}' ({} bytes, backend: {})",
        data.len(),
        state.scorer.backend()
    );

    let report = state.scorer.evaluate(&text).await?;
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct ScoreTextRequest {
    pub resume_text: String,
}

/// POST /api/v1/resumes/score-text
///
/// Scores already-extracted plain text. The evaluator is total, so any
/// string (including empty) yields a well-formed report.
pub async fn handle_score_text(
    State(state): State<AppState>,
    Json(req): Json<ScoreTextRequest>,
) -> Result<Json<Report>, AppError> {
    let report = state.scorer.evaluate(&req.resume_text).await?;
    Ok(Json(report))
}
