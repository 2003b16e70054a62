//! Axum route handlers for the Profile API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::profile::analyzer::{analyze_profile, ProfileAnalysis};
use crate::state::AppState;

/// Free-form analysis input. Fields are accepted as-is: absent fields
/// interpolate into the prompt as empty text rather than being rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeProfileRequest {
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub interests: String,
}

/// POST /api/v1/profile/analyze
///
/// Returns structured career guidance for the submitted profile. A model
/// completion that fails to parse yields the canned analysis with HTTP 200;
/// only a failed model call yields HTTP 500.
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeProfileRequest>,
) -> Result<Json<ProfileAnalysis>, AppError> {
    let analysis = analyze_profile(
        state.model.as_ref(),
        &request.resume_text,
        &request.skills,
        &request.interests,
    )
    .await?;

    Ok(Json(analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_fields_default_to_empty_when_absent() {
        let request: AnalyzeProfileRequest =
            serde_json::from_str(r#"{"resumeText": "Experienced engineer"}"#).unwrap();
        assert_eq!(request.resume_text, "Experienced engineer");
        assert_eq!(request.skills, "");
        assert_eq!(request.interests, "");
    }

    #[test]
    fn test_request_accepts_camel_case_keys() {
        let request: AnalyzeProfileRequest = serde_json::from_str(
            r#"{"resumeText": "r", "skills": "s", "interests": "i"}"#,
        )
        .unwrap();
        assert_eq!(request.resume_text, "r");
        assert_eq!(request.skills, "s");
        assert_eq!(request.interests, "i");
    }
}
