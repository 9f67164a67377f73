//! Persistence seams. Handlers depend on these traits so routing can be
//! exercised against in-memory stores.

pub mod postgres;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::JobPostingRow;
use crate::profile::SkillProfile;

#[async_trait]
pub trait ProfileStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<SkillProfile>, AppError>;

    /// Overwrites every field of the user's profile, creating it if absent.
    async fn replace_profile(&self, profile: &SkillProfile) -> Result<(), AppError>;
}

#[async_trait]
pub trait JobCatalog: Send + Sync {
    /// Active postings ordered by id, strictly after `after`, at most `limit`.
    async fn active_batch(
        &self,
        after: Option<Uuid>,
        limit: usize,
    ) -> Result<Vec<JobPostingRow>, AppError>;
}
