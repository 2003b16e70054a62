//! Structured completion gateway — the contract shared by every
//! JSON-producing AI endpoint.
//!
//! A task supplies a system instruction, a user prompt, and a fallback
//! constructor. The gateway calls the model once, tries to read the raw
//! completion as JSON of the task's response type, and substitutes the
//! fallback when the model returned something else. The caller always gets
//! a well-shaped value; only a failure of the model call itself propagates.

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::llm_client::{CompletionModel, LlmError};

/// Outcome of parsing one raw model completion.
#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// The completion was valid JSON of the expected shape.
    Parsed(T),
    /// The completion was prose, fenced JSON, or JSON of the wrong shape.
    Unparseable(serde_json::Error),
}

/// Parses a raw completion as JSON of type `T`.
///
/// The text is parsed as-is. A model that wraps its JSON in code fences or
/// commentary has not honored the contract, and the task's canned response
/// takes over.
pub fn parse_structured<T: DeserializeOwned>(raw: &str) -> ParseOutcome<T> {
    match serde_json::from_str(raw) {
        Ok(value) => ParseOutcome::Parsed(value),
        Err(e) => ParseOutcome::Unparseable(e),
    }
}

/// Runs one structured completion: model call, parse, fallback.
///
/// The fallback carries no information from the failed parse: it is the
/// task's fixed stand-in answer, indistinguishable by shape from a real one.
pub async fn complete_structured<T, F>(
    model: &dyn CompletionModel,
    system: &str,
    prompt: &str,
    fallback: F,
) -> Result<T, LlmError>
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = model.complete(system, prompt).await?;

    match parse_structured(&raw) {
        ParseOutcome::Parsed(value) => Ok(value),
        ParseOutcome::Unparseable(e) => {
            warn!("Model returned unparseable JSON ({e}); using fallback response");
            Ok(fallback())
        }
    }
}
