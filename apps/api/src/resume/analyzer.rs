//! Resume analyzer — category-level review of a raw resume.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::gateway::complete_structured;
use crate::llm_client::CompletionModel;
use crate::resume::prompts::{RESUME_ANALYSIS_PROMPT_TEMPLATE, RESUME_ANALYSIS_SYSTEM};

/// One scored review category (e.g. "Content Quality").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub name: String,
    pub score: u8,
    pub feedback: String,
}

/// A concrete issue paired with its fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Improvement {
    pub issue: String,
    pub suggestion: String,
}

/// Keyword coverage for ATS screening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordReport {
    pub strong: Vec<String>,
    pub missing: Vec<String>,
}

/// Full structured output of a resume analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeAnalysis {
    pub overall_score: u8,
    pub summary: String,
    pub categories: Vec<CategoryScore>,
    pub strengths: Vec<String>,
    pub improvements: Vec<Improvement>,
    pub keywords: KeywordReport,
}

/// The canned review substituted when the model's output is not valid JSON
/// of the declared shape.
pub fn fallback_review() -> ResumeAnalysis {
    ResumeAnalysis {
        overall_score: 75,
        summary: "Your resume shows good potential with room for improvement in several key areas."
            .to_string(),
        categories: vec![
            CategoryScore {
                name: "Content Quality".to_string(),
                score: 80,
                feedback: "Good use of action verbs and quantified achievements".to_string(),
            },
            CategoryScore {
                name: "Formatting".to_string(),
                score: 70,
                feedback: "Structure is clear but could benefit from better organization"
                    .to_string(),
            },
            CategoryScore {
                name: "Keywords".to_string(),
                score: 65,
                feedback: "Missing some industry-specific keywords".to_string(),
            },
        ],
        strengths: vec![
            "Clear professional experience".to_string(),
            "Quantified achievements".to_string(),
            "Relevant technical skills".to_string(),
        ],
        improvements: vec![
            Improvement {
                issue: "Missing professional summary".to_string(),
                suggestion: "Add a compelling 2-3 line summary at the top highlighting your key value proposition".to_string(),
            },
            Improvement {
                issue: "Limited use of industry keywords".to_string(),
                suggestion: "Incorporate more role-specific keywords to improve ATS compatibility"
                    .to_string(),
            },
        ],
        keywords: KeywordReport {
            strong: vec![
                "JavaScript".to_string(),
                "React".to_string(),
                "Project Management".to_string(),
            ],
            missing: vec![
                "Agile".to_string(),
                "Scrum".to_string(),
                "API".to_string(),
                "Database".to_string(),
            ],
        },
    }
}

/// Reviews a resume with the LLM. The text is interpolated verbatim, with
/// no length cap and no emptiness check.
pub async fn analyze_resume(
    model: &dyn CompletionModel,
    resume_text: &str,
) -> Result<ResumeAnalysis, AppError> {
    let prompt = RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", resume_text);

    complete_structured(model, RESUME_ANALYSIS_SYSTEM, &prompt, fallback_review)
        .await
        .map_err(|e| AppError::ModelInvocation {
            message: "Failed to analyze resume",
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_analysis_deserializes_camel_case_wire_format() {
        let json = r#"{
            "overallScore": 91,
            "summary": "Strong senior resume",
            "categories": [
                {"name": "Content Quality", "score": 92, "feedback": "Dense, quantified"}
            ],
            "strengths": ["Impact metrics"],
            "improvements": [
                {"issue": "No summary", "suggestion": "Add one"}
            ],
            "keywords": {"strong": ["Rust"], "missing": ["Kubernetes"]}
        }"#;

        let analysis: ResumeAnalysis = serde_json::from_str(json).unwrap();
        assert_eq!(analysis.overall_score, 91);
        assert_eq!(analysis.categories[0].name, "Content Quality");
        assert_eq!(analysis.keywords.missing, vec!["Kubernetes"]);
    }

    #[test]
    fn test_resume_analysis_serializes_overall_score_key() {
        let value = serde_json::to_value(fallback_review()).unwrap();
        assert!(value.get("overallScore").is_some());
        assert!(value.get("overall_score").is_none());
    }

    #[test]
    fn test_fallback_review_literals() {
        let fallback = fallback_review();
        assert_eq!(fallback.overall_score, 75);
        assert_eq!(fallback.categories.len(), 3);
        assert_eq!(fallback.categories[0].score, 80);
        assert_eq!(fallback.categories[1].name, "Formatting");
        assert_eq!(fallback.categories[2].score, 65);
        assert_eq!(fallback.strengths.len(), 3);
        assert_eq!(fallback.improvements.len(), 2);
        assert_eq!(
            fallback.keywords.strong,
            vec!["JavaScript", "React", "Project Management"]
        );
        assert_eq!(
            fallback.keywords.missing,
            vec!["Agile", "Scrum", "API", "Database"]
        );
    }

    #[test]
    fn test_prompt_template_embeds_resume_text() {
        let prompt = RESUME_ANALYSIS_PROMPT_TEMPLATE.replace("{resume_text}", "Shipped 3 services");
        assert!(prompt.contains("Shipped 3 services"));
        assert!(prompt.contains("Keywords & ATS Optimization"));
    }
}
