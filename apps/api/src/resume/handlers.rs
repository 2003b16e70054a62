//! Axum route handlers for the Resume API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::resume::analyzer::{analyze_resume, ResumeAnalysis};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResumeRequest {
    #[serde(default)]
    pub resume_text: String,
}

/// POST /api/v1/resume/analyze
///
/// Returns a category-level review of the submitted resume. An unparseable
/// model completion yields the canned review with HTTP 200; a failed model
/// call yields HTTP 500.
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeResumeRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    let analysis = analyze_resume(state.model.as_ref(), &request.resume_text).await?;
    Ok(Json(analysis))
}
