// Mock interview service.
// Five questions per interview; the counter and transcript live on the
// client and are replayed with every turn. The server holds no session.
// All LLM calls go through llm_client — no direct provider calls here.

pub mod handlers;
pub mod interviewer;
pub mod prompts;
