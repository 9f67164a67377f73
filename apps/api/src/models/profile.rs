use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::errors::AppError;
use crate::profile::{ExperienceLevel, ProfileSource, SkillProfile};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SkillProfileRow {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub source: String,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<SkillProfileRow> for SkillProfile {
    type Error = AppError;

    fn try_from(row: SkillProfileRow) -> Result<Self, Self::Error> {
        let experience_level: ExperienceLevel = row
            .experience_level
            .parse()
            .map_err(|e: String| AppError::Internal(anyhow::anyhow!(e)))?;
        let source: ProfileSource = row
            .source
            .parse()
            .map_err(|e: String| AppError::Internal(anyhow::anyhow!(e)))?;

        Ok(SkillProfile {
            user_id: row.user_id,
            skills: row.skills,
            experience_level,
            source,
            updated_at: row.updated_at,
        })
    }
}
