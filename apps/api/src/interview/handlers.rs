//! Axum route handlers for the Interview API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::interview::interviewer::{
    process_answer, start_interview, HistoryMessage, InterviewTurn,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StartInterviewRequest {
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Serialize)]
pub struct StartInterviewResponse {
    pub question: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RespondRequest {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub answer: String,
    #[serde(default)]
    pub question_number: u32,
    #[serde(default)]
    pub conversation_history: Vec<HistoryMessage>,
}

/// POST /api/v1/interview/start
///
/// Opens a mock interview. The model's raw text is returned verbatim as the
/// opening question.
pub async fn handle_start_interview(
    State(state): State<AppState>,
    Json(request): Json<StartInterviewRequest>,
) -> Result<Json<StartInterviewResponse>, AppError> {
    let question = start_interview(state.model.as_ref(), &request.role).await?;
    Ok(Json(StartInterviewResponse { question }))
}

/// POST /api/v1/interview/respond
///
/// Processes one answered question. The client owns the question counter and
/// transcript; the server derives completion solely from the submitted
/// `questionNumber`.
pub async fn handle_respond(
    State(state): State<AppState>,
    Json(request): Json<RespondRequest>,
) -> Result<Json<InterviewTurn>, AppError> {
    let turn = process_answer(
        state.model.as_ref(),
        &request.role,
        &request.answer,
        request.question_number,
        &request.conversation_history,
    )
    .await?;

    Ok(Json(turn))
}
