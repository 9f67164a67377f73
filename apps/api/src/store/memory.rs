use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPostingRow;
use crate::profile::SkillProfile;
use crate::store::{JobCatalog, ProfileStore};

#[derive(Default)]
pub struct MemoryProfileStore {
    profiles: RwLock<HashMap<Uuid, SkillProfile>>,
}

#[async_trait]
impl ProfileStore for MemoryProfileStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<SkillProfile>, AppError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn replace_profile(&self, profile: &SkillProfile) -> Result<(), AppError> {
        self.profiles
            .write()
            .await
            .insert(profile.user_id, profile.clone());
        Ok(())
    }
}

/// Catalog over a fixed list, paged the same way as the SQL query.
#[derive(Default)]
pub struct MemoryJobCatalog {
    postings: Vec<JobPostingRow>,
}

impl MemoryJobCatalog {
    pub fn new(mut postings: Vec<JobPostingRow>) -> Self {
        postings.sort_by_key(|p| p.id);
        Self { postings }
    }
}

#[async_trait]
impl JobCatalog for MemoryJobCatalog {
    async fn active_batch(
        &self,
        after: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<JobPostingRow>, AppError> {
        Ok(self
            .postings
            .iter()
            .filter(|p| p.is_active && after.map_or(true, |a| p.id > a))
            .take(limit)
            .cloned()
            .collect())
    }
}

pub fn posting(id: u128, title: &str, skills: &[&str]) -> JobPostingRow {
    JobPostingRow {
        id: Uuid::from_u128(id),
        title: title.to_string(),
        company: Some("Acme".to_string()),
        location: None,
        skills: skills.iter().map(|s| s.to_string()).collect(),
        is_active: true,
        created_at: Utc::now(),
    }
}
