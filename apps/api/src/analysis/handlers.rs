//! Axum route handlers for the Analysis API.

use axum::{
    extract::{multipart::MultipartRejection, rejection::JsonRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use serde_json::Value;

use crate::analysis::pipeline::{analyze_documents, assess, AnalysisReport, Assessment};
use crate::errors::AppError;
use crate::extraction::pdf::{extract_pdf_text, is_pdf_upload};
use crate::extraction::profile_parser::{extract_candidate_profile, extract_role_requirement};
use crate::extraction::validation::{candidate_from_value, role_from_value};
use crate::models::profile::{CandidateProfile, RoleRequirement};
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JD_FIELD: &str = "jd_text";

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

/// Pre-extracted records. Kept as raw JSON so shape errors surface as
/// `INVALID_INPUT_SHAPE` rather than a generic deserialization failure.
#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    #[serde(default)]
    pub candidate: Value,
    #[serde(default)]
    pub role: Value,
}

#[derive(Debug, Deserialize)]
pub struct ExtractJdRequest {
    pub jd_text: String,
}

/// Fields collected from an upload form. Unknown fields are ignored.
#[derive(Debug, Default)]
struct UploadForm {
    resume: Option<Bytes>,
    jd_text: Option<String>,
}

async fn read_upload_form(mut multipart: Multipart) -> Result<UploadForm, AppError> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                if !is_pdf_upload(field.content_type(), field.file_name()) {
                    return Err(AppError::Validation(
                        "Resume must be uploaded as a PDF file".to_string(),
                    ));
                }
                let data = field.bytes().await?;
                form.resume = (!data.is_empty()).then_some(data);
            }
            Some(JD_FIELD) => {
                let text = field.text().await?;
                form.jd_text = (!text.trim().is_empty()).then_some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analyze
///
/// Multipart form with a `resume` PDF and a `jd_text` field. Runs the full
/// pipeline and returns the verdict with its explanation.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    let form = read_upload_form(multipart?).await?;

    let (Some(resume), Some(jd_text)) = (form.resume, form.jd_text) else {
        return Err(AppError::Validation(
            "Please upload a resume and paste the job description.".to_string(),
        ));
    };

    let report = analyze_documents(resume, &jd_text, state.llm.as_ref()).await?;
    Ok(Json(report))
}

/// POST /api/v1/score
///
/// Scores two already-extracted records. Both are shape-checked first; the
/// scorer never sees a malformed record.
pub async fn handle_score(
    request: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<Assessment>, AppError> {
    let Json(request) = request?;
    let candidate = candidate_from_value(&request.candidate)?;
    let role = role_from_value(&request.role)?;
    Ok(Json(assess(&candidate, &role)))
}

/// POST /api/v1/extract/resume
///
/// Previews what the model extracts from a resume PDF.
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CandidateProfile>, AppError> {
    let resume = read_upload_form(multipart?)
        .await?
        .resume
        .ok_or_else(|| AppError::Validation("Please upload a resume.".to_string()))?;

    let resume_text = extract_pdf_text(resume).await?;
    let profile = extract_candidate_profile(&resume_text, state.llm.as_ref()).await?;
    Ok(Json(profile))
}

/// POST /api/v1/extract/jd
///
/// Previews what the model extracts from a job description.
pub async fn handle_extract_jd(
    State(state): State<AppState>,
    request: Result<Json<ExtractJdRequest>, JsonRejection>,
) -> Result<Json<RoleRequirement>, AppError> {
    let Json(request) = request?;
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }

    let role = extract_role_requirement(&request.jd_text, state.llm.as_ref()).await?;
    Ok(Json(role))
}
