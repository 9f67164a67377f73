use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::ranking::{rank_catalog, JobMatch};
use crate::matching::scorer::PreparedSkills;
use crate::matching::title_adjust::adjust_for_title;
use crate::profile::ExperienceLevel;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ScoreJobRequest {
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub title: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ScoreJobResponse {
    pub base_percentage: u32,
    pub match_percentage: u32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// POST /api/v1/jobs/score
/// Scores one ad-hoc posting without touching storage.
pub async fn handle_score_job(
    State(state): State<AppState>,
    Json(req): Json<ScoreJobRequest>,
) -> Result<Json<ScoreJobResponse>, AppError> {
    let result = PreparedSkills::new(state.aliases, &req.user_skills).score(&req.skills);
    let adjusted = adjust_for_title(result.match_percentage, req.experience_level, &req.title);

    Ok(Json(ScoreJobResponse {
        base_percentage: result.match_percentage,
        match_percentage: adjusted,
        matching_skills: result.matching_skills,
        missing_skills: result.missing_skills,
    }))
}

#[derive(Debug, Deserialize)]
pub struct JobMatchesQuery {
    pub user_id: Uuid,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct JobMatchesResponse {
    pub user_id: Uuid,
    pub experience_level: ExperienceLevel,
    pub total_scored: usize,
    pub matches: Vec<JobMatch>,
}

/// GET /api/v1/jobs/matches
pub async fn handle_job_matches(
    State(state): State<AppState>,
    Query(params): Query<JobMatchesQuery>,
) -> Result<Json<JobMatchesResponse>, AppError> {
    let max = state.config.max_match_results;
    let limit = match params.limit {
        None => max,
        Some(l) if (1..=max).contains(&l) => l,
        Some(l) => {
            return Err(AppError::Validation(format!(
                "limit must be between 1 and {max}, got {l}"
            )))
        }
    };

    let profile = state
        .profiles
        .get_profile(params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", params.user_id)))?;

    let outcome = rank_catalog(
        state.jobs.as_ref(),
        state.aliases,
        &profile,
        limit,
        state.config.match_batch_size,
    )
    .await?;

    info!(
        user_id = %profile.user_id,
        scored = outcome.scored,
        returned = outcome.matches.len(),
        "ranked job matches"
    );

    Ok(Json(JobMatchesResponse {
        user_id: profile.user_id,
        experience_level: profile.experience_level,
        total_scored: outcome.scored,
        matches: outcome.matches,
    }))
}
