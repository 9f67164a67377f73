pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::matching::handlers as matching;
use crate::profile::handlers as profile;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // Profiles
        .route(
            "/api/v1/profile",
            get(profile::handle_get_profile).put(profile::handle_replace_profile),
        )
        .route(
            "/api/v1/profile/analyze",
            post(profile::handle_analyze_profile),
        )
        .route(
            "/api/v1/profile/upload",
            post(profile::handle_upload_profile).layer(upload_limit),
        )
        .route("/api/v1/skills/extract", post(profile::handle_extract_skills))
        // Jobs
        .route("/api/v1/jobs/score", post(matching::handle_score_job))
        .route("/api/v1/jobs/matches", get(matching::handle_job_matches))
        .with_state(state)
}
