use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The outbound model call itself failed (network, auth, provider error).
    /// This is the only error class that reaches the caller; a completion
    /// that merely fails to parse is absorbed by the task's fallback and
    /// never lands here.
    #[error("{message}: {source}")]
    ModelInvocation {
        /// Task-specific message surfaced to the caller, e.g.
        /// "Failed to analyze resume".
        message: &'static str,
        #[source]
        source: LlmError,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ModelInvocation { message, source } => {
                tracing::error!("{message}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": message })),
                )
                    .into_response()
            }
        }
    }
}
