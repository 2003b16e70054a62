//! Profile analyzer — structured career guidance from a candidate profile.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::gateway::complete_structured;
use crate::llm_client::CompletionModel;
use crate::profile::prompts::{PROFILE_ANALYSIS_PROMPT_TEMPLATE, PROFILE_ANALYSIS_SYSTEM};

/// A single career-path match with a 0-100 fit score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub role: String,
    pub score: u8,
    pub reasoning: String,
}

/// Full structured output of a profile analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileAnalysis {
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub career_matches: Vec<CareerMatch>,
    pub summary: String,
}

/// The canned analysis substituted when the model's output is not valid
/// JSON of the declared shape. Static: carries nothing from the failed
/// completion, and the caller cannot tell it apart from a real answer.
pub fn fallback_analysis() -> ProfileAnalysis {
    ProfileAnalysis {
        strengths: vec![
            "Technical Skills".to_string(),
            "Problem Solving".to_string(),
            "Communication".to_string(),
        ],
        improvements: vec![
            "Expand portfolio".to_string(),
            "Gain more experience".to_string(),
            "Learn new technologies".to_string(),
        ],
        career_matches: vec![
            CareerMatch {
                role: "Software Developer".to_string(),
                score: 75,
                reasoning: "Good technical foundation".to_string(),
            },
            CareerMatch {
                role: "Data Analyst".to_string(),
                score: 65,
                reasoning: "Analytical skills present".to_string(),
            },
        ],
        summary: "Strong technical foundation with room for growth".to_string(),
    }
}

/// Analyzes a candidate profile with the LLM. Request fields are
/// interpolated verbatim; empty text is acceptable input.
pub async fn analyze_profile(
    model: &dyn CompletionModel,
    resume_text: &str,
    skills: &str,
    interests: &str,
) -> Result<ProfileAnalysis, AppError> {
    let prompt = PROFILE_ANALYSIS_PROMPT_TEMPLATE
        .replace("{resume_text}", resume_text)
        .replace("{skills}", skills)
        .replace("{interests}", interests);

    complete_structured(model, PROFILE_ANALYSIS_SYSTEM, &prompt, fallback_analysis)
        .await
        .map_err(|e| AppError::ModelInvocation {
            message: "Failed to analyze profile",
            source: e,
        })
}
