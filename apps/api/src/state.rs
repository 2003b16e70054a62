use std::sync::Arc;

use crate::llm_client::CompletionModel;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Every member is immutable: requests share nothing mutable and never
/// coordinate with each other.
#[derive(Clone)]
pub struct AppState {
    /// The external completion model. Production wires in `LlmClient`;
    /// tests substitute a stub.
    pub model: Arc<dyn CompletionModel>,
}
