use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::upload::read_upload;
use crate::profile::{
    analyze_resume, ExperienceLevel, ProfileSource, ResumeAnalysis, SkillProfile,
};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct ReplaceProfileRequest {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub experience_level: Option<ExperienceLevel>,
}

#[derive(Debug, Deserialize)]
pub struct AnalyzeProfileRequest {
    pub user_id: Uuid,
    pub resume_text: String,
    /// Skills entered in the resume builder. When non-empty they replace the
    /// extracted set.
    #[serde(default)]
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
pub struct ExtractSkillsRequest {
    pub text: String,
}

#[derive(Serialize)]
pub struct AnalyzedProfileResponse {
    pub profile: SkillProfile,
    pub analysis: ResumeAnalysis,
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<SkillProfile>, AppError> {
    let profile = state
        .profiles
        .get_profile(params.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Profile for user {} not found", params.user_id)))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profile
/// Full replace: a request without `experience_level` stores `unknown`.
pub async fn handle_replace_profile(
    State(state): State<AppState>,
    Json(req): Json<ReplaceProfileRequest>,
) -> Result<Json<SkillProfile>, AppError> {
    let profile = SkillProfile::replacement(
        req.user_id,
        &req.skills,
        req.experience_level.unwrap_or_default(),
        ProfileSource::Manual,
    );
    state.profiles.replace_profile(&profile).await?;

    info!(
        user_id = %profile.user_id,
        skills = profile.skills.len(),
        "profile replaced manually"
    );
    Ok(Json(profile))
}

/// POST /api/v1/profile/analyze
pub async fn handle_analyze_profile(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeProfileRequest>,
) -> Result<Json<AnalyzedProfileResponse>, AppError> {
    require_text("resume_text", &req.resume_text)?;

    let analysis = analyze_resume(&req.resume_text);
    let skills = match req.skills {
        Some(explicit) if explicit.iter().any(|s| !s.trim().is_empty()) => explicit,
        _ => analysis.skills.clone(),
    };
    let profile = SkillProfile::replacement(
        req.user_id,
        &skills,
        analysis.experience_level,
        ProfileSource::Builder,
    );
    state.profiles.replace_profile(&profile).await?;

    info!(
        user_id = %profile.user_id,
        level = %profile.experience_level,
        rule = analysis.rule,
        "profile synced from resume builder"
    );
    Ok(Json(AnalyzedProfileResponse { profile, analysis }))
}

/// POST /api/v1/profile/upload
pub async fn handle_upload_profile(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalyzedProfileResponse>, AppError> {
    let upload = read_upload(multipart).await?;

    let analysis = analyze_resume(&upload.text);
    let profile = SkillProfile::replacement(
        upload.user_id,
        &analysis.skills,
        analysis.experience_level,
        ProfileSource::Upload,
    );
    state.profiles.replace_profile(&profile).await?;

    info!(
        user_id = %profile.user_id,
        file = upload.file_name.as_deref().unwrap_or("<unnamed>"),
        skills = profile.skills.len(),
        level = %profile.experience_level,
        "profile replaced from uploaded resume"
    );
    Ok(Json(AnalyzedProfileResponse { profile, analysis }))
}

/// POST /api/v1/skills/extract
/// Stateless: nothing is stored.
pub async fn handle_extract_skills(
    Json(req): Json<ExtractSkillsRequest>,
) -> Result<Json<ResumeAnalysis>, AppError> {
    require_text("text", &req.text)?;
    Ok(Json(analyze_resume(&req.text)))
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}
