pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interview;
use crate::profile::handlers as profile;
use crate::resume::handlers as resume;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/profile/analyze",
            post(profile::handle_analyze_profile),
        )
        .route(
            "/api/v1/resume/analyze",
            post(resume::handle_analyze_resume),
        )
        .route(
            "/api/v1/interview/start",
            post(interview::handle_start_interview),
        )
        .route(
            "/api/v1/interview/respond",
            post(interview::handle_respond),
        )
        .with_state(state)
}
