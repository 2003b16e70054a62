//! Interviewer — opening question and per-turn feedback for a mock
//! interview.
//!
//! The interview is a fixed sequence of `TOTAL_QUESTIONS` questions. The
//! server never advances the counter itself: the client submits
//! `question_number` and the full transcript on every turn, and completion
//! occurs exactly when the answered question is the final one.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::gateway::complete_structured;
use crate::interview::prompts::{
    INTERVIEW_START_PROMPT_TEMPLATE, INTERVIEW_START_SYSTEM_TEMPLATE,
    INTERVIEW_TURN_PROMPT_TEMPLATE, INTERVIEW_TURN_SYSTEM_TEMPLATE,
};
use crate::llm_client::CompletionModel;

/// Number of questions in a mock interview. Answering the final one
/// completes the interview; there is no transition out of complete.
pub const TOTAL_QUESTIONS: u32 = 5;

/// Who spoke a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    User,
    Bot,
}

impl fmt::Display for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speaker::User => write!(f, "user"),
            Speaker::Bot => write!(f, "bot"),
        }
    }
}

/// One prior exchange, replayed by the client on every turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryMessage {
    #[serde(rename = "type")]
    pub speaker: Speaker,
    pub content: String,
}

/// Structured output of one interview turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewTurn {
    pub response: String,
    pub feedback: String,
    /// Absent on the final turn. Tolerates the model omitting the key
    /// entirely instead of sending an explicit null.
    #[serde(default)]
    pub next_question: Option<String>,
    pub is_complete: bool,
}

/// The canned turn substituted when the model's output is not valid JSON of
/// the declared shape. Unlike the analysis fallbacks this one is a function
/// of the request: the completion flag and follow-up question depend on
/// which question was just answered.
pub fn fallback_turn(question_number: u32) -> InterviewTurn {
    InterviewTurn {
        response: "Thank you for your answer. Let me provide some feedback.".to_string(),
        feedback:
            "Good response. Consider providing more specific examples to strengthen your answer."
                .to_string(),
        next_question: (question_number < TOTAL_QUESTIONS).then(|| {
            "Can you tell me about a challenging project you worked on and how you overcame the obstacles?"
                .to_string()
        }),
        is_complete: question_number >= TOTAL_QUESTIONS,
    }
}

/// Renders the client-held transcript into the `speaker: content` lines the
/// turn prompt expects.
pub fn format_history(history: &[HistoryMessage]) -> String {
    history
        .iter()
        .map(|msg| format!("{}: {}", msg.speaker, msg.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Opens a mock interview for the given role.
///
/// The model's raw text IS the opening question. It is never JSON-parsed,
/// so a completion containing literal braces comes back verbatim. There is
/// no fallback for this operation.
pub async fn start_interview(
    model: &dyn CompletionModel,
    role: &str,
) -> Result<String, AppError> {
    let system = INTERVIEW_START_SYSTEM_TEMPLATE.replace("{role}", role);
    let prompt = INTERVIEW_START_PROMPT_TEMPLATE.replace("{role}", role);

    model
        .complete(&system, &prompt)
        .await
        .map_err(|e| AppError::ModelInvocation {
            message: "Failed to start interview",
            source: e,
        })
}

/// Processes one answered question and produces feedback plus the next
/// question, or the closing assessment on the final turn.
pub async fn process_answer(
    model: &dyn CompletionModel,
    role: &str,
    answer: &str,
    question_number: u32,
    history: &[HistoryMessage],
) -> Result<InterviewTurn, AppError> {
    let question_number_text = question_number.to_string();

    let system = INTERVIEW_TURN_SYSTEM_TEMPLATE
        .replace("{role}", role)
        .replace("{question_number}", &question_number_text);

    let prompt = INTERVIEW_TURN_PROMPT_TEMPLATE
        .replace("{answer}", answer)
        .replace("{question_number}", &question_number_text)
        .replace("{role}", role)
        .replace("{history}", &format_history(history));

    complete_structured(model, &system, &prompt, || fallback_turn(question_number))
        .await
        .map_err(|e| AppError::ModelInvocation {
            message: "Failed to process interview response",
            source: e,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_history() -> Vec<HistoryMessage> {
        vec![
            HistoryMessage {
                speaker: Speaker::Bot,
                content: "Tell me about yourself.".to_string(),
            },
            HistoryMessage {
                speaker: Speaker::User,
                content: "I build backend services in Rust.".to_string(),
            },
        ]
    }

    #[test]
    fn test_fallback_turn_mid_interview_has_follow_up() {
        for question_number in 1..TOTAL_QUESTIONS {
            let turn = fallback_turn(question_number);
            assert!(!turn.is_complete, "question {question_number}");
            assert!(turn.next_question.is_some(), "question {question_number}");
        }
    }

    #[test]
    fn test_fallback_turn_final_question_completes() {
        let turn = fallback_turn(TOTAL_QUESTIONS);
        assert!(turn.is_complete);
        assert_eq!(turn.next_question, None);
    }

    #[test]
    fn test_fallback_turn_past_final_question_stays_complete() {
        let turn = fallback_turn(TOTAL_QUESTIONS + 1);
        assert!(turn.is_complete);
        assert_eq!(turn.next_question, None);
    }

    #[test]
    fn test_fallback_turn_fixed_texts() {
        let turn = fallback_turn(2);
        assert_eq!(
            turn.response,
            "Thank you for your answer. Let me provide some feedback."
        );
        assert_eq!(
            turn.feedback,
            "Good response. Consider providing more specific examples to strengthen your answer."
        );
        assert_eq!(
            turn.next_question.as_deref(),
            Some("Can you tell me about a challenging project you worked on and how you overcame the obstacles?")
        );
    }

    #[test]
    fn test_format_history_renders_speaker_prefixed_lines() {
        let rendered = format_history(&sample_history());
        assert_eq!(
            rendered,
            "bot: Tell me about yourself.\nuser: I build backend services in Rust."
        );
    }

    #[test]
    fn test_format_history_empty_transcript() {
        assert_eq!(format_history(&[]), "");
    }

    #[test]
    fn test_history_message_deserializes_type_tag() {
        let json = r#"{"type": "user", "content": "hello"}"#;
        let msg: HistoryMessage = serde_json::from_str(json).unwrap();
        assert_eq!(msg.speaker, Speaker::User);
        assert_eq!(msg.content, "hello");
    }

    #[test]
    fn test_interview_turn_deserializes_null_next_question() {
        let json = r#"{
            "response": "That wraps it up.",
            "feedback": "Strong finish.",
            "nextQuestion": null,
            "isComplete": true
        }"#;
        let turn: InterviewTurn = serde_json::from_str(json).unwrap();
        assert!(turn.is_complete);
        assert_eq!(turn.next_question, None);
    }

    #[test]
    fn test_interview_turn_tolerates_missing_next_question_key() {
        let json = r#"{
            "response": "Done.",
            "feedback": "Well handled.",
            "isComplete": true
        }"#;
        let turn: InterviewTurn = serde_json::from_str(json).unwrap();
        assert_eq!(turn.next_question, None);
    }

    #[test]
    fn test_interview_turn_serializes_camel_case_keys() {
        let value = serde_json::to_value(fallback_turn(5)).unwrap();
        assert!(value.get("nextQuestion").is_some());
        assert!(value.get("isComplete").is_some());
        assert_eq!(value["nextQuestion"], serde_json::Value::Null);
    }

    #[test]
    fn test_turn_prompt_interpolation() {
        let prompt = INTERVIEW_TURN_PROMPT_TEMPLATE
            .replace("{answer}", "I used the STAR method")
            .replace("{question_number}", "3")
            .replace("{role}", "Backend Engineer")
            .replace("{history}", &format_history(&sample_history()));

        assert!(prompt.contains(r#"The candidate just answered: "I used the STAR method""#));
        assert!(prompt.contains("This is question 3 of 5 for a Backend Engineer interview."));
        assert!(prompt.contains("bot: Tell me about yourself."));
    }

    #[test]
    fn test_turn_system_keeps_schema_braces_after_interpolation() {
        let system = INTERVIEW_TURN_SYSTEM_TEMPLATE
            .replace("{role}", "Data Analyst")
            .replace("{question_number}", "4");

        // The embedded JSON schema must survive placeholder substitution.
        assert!(system.contains(r#""isComplete": false/true"#));
        assert!(system.contains("question 4 of a 5-question mock interview"));
        assert!(system.contains("For Data Analyst interviews"));
    }
}
