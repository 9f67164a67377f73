use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPostingRow;
use crate::models::profile::SkillProfileRow;
use crate::profile::SkillProfile;
use crate::store::{JobCatalog, ProfileStore};

#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<SkillProfile>, AppError> {
        let row: Option<SkillProfileRow> = sqlx::query_as(
            "SELECT user_id, skills, experience_level, source, updated_at \
             FROM skill_profiles WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(SkillProfile::try_from).transpose()
    }

    async fn replace_profile(&self, profile: &SkillProfile) -> Result<(), AppError> {
        sqlx::query(
            r#"
            INSERT INTO skill_profiles (user_id, skills, experience_level, source, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id) DO UPDATE SET
                skills = EXCLUDED.skills,
                experience_level = EXCLUDED.experience_level,
                source = EXCLUDED.source,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(profile.user_id)
        .bind(&profile.skills)
        .bind(profile.experience_level.as_str())
        .bind(profile.source.as_str())
        .bind(profile.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[derive(Clone)]
pub struct PgJobCatalog {
    pool: PgPool,
}

impl PgJobCatalog {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobCatalog for PgJobCatalog {
    async fn active_batch(
        &self,
        after: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<JobPostingRow>, AppError> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = sqlx::query_as(
            r#"
            SELECT id, title, company, location, skills, is_active, created_at
            FROM job_postings
            WHERE is_active AND ($1::uuid IS NULL OR id > $1)
            ORDER BY id
            LIMIT $2
            "#,
        )
        .bind(after)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
