use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{extract_text, ExtractionError, UploadedFile};
use crate::screening::candidate::{
    check_experience_threshold, experience_mismatch, validate_candidate, CandidateInfo,
};
use crate::screening::{analyze, AnalysisResult, ScreeningError};
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct ScreeningResponse {
    pub screening_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub position: String,
    pub analysis: AnalysisResult,
    /// Number of required skills configured for the position.
    pub required_skill_count: usize,
    /// Why the resume yielded no text, when extraction failed.
    pub extraction_warning: Option<String>,
    /// Set only when the candidate declared their experience.
    pub experience_mismatch: Option<bool>,
    pub experience_warning: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ValidateCandidateRequest {
    pub position: String,
    #[serde(flatten)]
    pub candidate: CandidateInfo,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ValidateCandidateResponse {
    pub valid: bool,
    pub errors: Vec<String>,
}

/// POST /api/v1/screenings
///
/// Multipart fields: `position` (text), `resume` (file), `experience` (optional, years).
pub async fn handle_screening(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScreeningResponse>, AppError> {
    let mut position_name: Option<String> = None;
    let mut declared_experience: Option<u32> = None;
    let mut upload: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&state, "Invalid multipart body", e))?
    {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            "position" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(&state, "Unreadable 'position'", e))?;
                position_name = Some(text.trim().to_string());
            }
            "experience" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(&state, "Unreadable 'experience'", e))?;
                let years = text.trim().parse::<u32>().map_err(|_| {
                    AppError::Validation(format!("'experience' must be a whole number, got '{text}'"))
                })?;
                declared_experience = Some(years);
            }
            "resume" => {
                let mime_type = field.content_type().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(&state, "Unreadable 'resume'", e))?;
                upload = Some(UploadedFile {
                    declared_size: bytes.len() as u64,
                    bytes,
                    mime_type,
                });
            }
            _ => {}
        }
    }

    let position_name =
        position_name.ok_or_else(|| AppError::Validation("Missing 'position' field".to_string()))?;
    let upload =
        upload.ok_or_else(|| AppError::Validation("Missing 'resume' file".to_string()))?;
    let position = state
        .positions
        .get(&position_name)
        .await
        .ok_or_else(|| ScreeningError::UnknownPosition(position_name.clone()))?;

    // PDF parsing is CPU-bound
    let max_size_bytes = state.config.max_file_size_bytes();
    let extraction = tokio::task::spawn_blocking(move || extract_text(&upload, max_size_bytes))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}")))?;

    let analysis = analyze(&extraction.text, &position)?;

    let extraction_warning = extraction.diagnostic.map(|d| match d {
        ExtractionError::FileTooLarge { .. } => format!(
            "File too large. Max size: {}MB",
            state.config.max_file_size_mb
        ),
        other => other.to_string(),
    });

    let experience_mismatch =
        declared_experience.map(|declared| experience_mismatch(declared, analysis.experience));
    let experience_warning = check_experience_threshold(
        declared_experience.unwrap_or(analysis.experience),
        &position,
    );

    info!(
        "Screened resume for '{}': score {} ({} required matches)",
        position_name,
        analysis.resume_score,
        analysis.required_matches.len()
    );

    Ok(Json(ScreeningResponse {
        screening_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        required_skill_count: position.required_skills.len(),
        position: position_name,
        analysis,
        extraction_warning,
        experience_mismatch,
        experience_warning,
    }))
}

/// Bodies over the route limit surface as a multipart read error.
fn multipart_error(state: &AppState, context: &str, e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(format!(
            "File too large. Max size: {}MB",
            state.config.max_file_size_mb
        ))
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

/// POST /api/v1/candidates/validate
pub async fn handle_validate_candidate(
    State(state): State<AppState>,
    Json(req): Json<ValidateCandidateRequest>,
) -> Result<Json<ValidateCandidateResponse>, AppError> {
    let position = state
        .positions
        .get(&req.position)
        .await
        .ok_or_else(|| ScreeningError::UnknownPosition(req.position.clone()))?;

    let mut errors = validate_candidate(&req.candidate, &state.config.validation_rules());
    // Threshold is only meaningful once the basic fields are valid
    if errors.is_empty() {
        errors.extend(check_experience_threshold(req.candidate.experience, &position));
    }

    Ok(Json(ValidateCandidateResponse {
        valid: errors.is_empty(),
        errors,
    }))
}
