//! Job ranking: scores every active posting for one profile and keeps the best.
//!
//! The catalog is streamed in id-ordered batches, so memory is bounded by the
//! batch size plus the result limit rather than by the catalog size.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::aliases::AliasTable;
use crate::matching::scorer::PreparedSkills;
use crate::matching::title_adjust::adjust_for_title;
use crate::models::job::JobPostingRow;
use crate::profile::{ExperienceLevel, SkillProfile};
use crate::store::JobCatalog;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// One ranked posting. `match_percentage` is the title-adjusted score used for
/// ordering; `base_percentage` is the raw skill coverage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobMatch {
    pub job_id: Uuid,
    pub title: String,
    pub company: Option<String>,
    pub location: Option<String>,
    pub match_percentage: u32,
    pub base_percentage: u32,
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingOutcome {
    /// Active postings scored, including those that did not make the cut.
    pub scored: usize,
    pub matches: Vec<JobMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Bounded top-K
// ────────────────────────────────────────────────────────────────────────────

/// Heap entry ordered so that "greater" means "ranks higher": a better score,
/// then earlier catalog position.
#[derive(Debug)]
struct Ranked {
    seq: usize,
    job: JobMatch,
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        self.job
            .match_percentage
            .cmp(&other.job.match_percentage)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Ranked {}

/// Keeps the `limit` highest-scoring postings seen so far.
pub struct JobRanker<'t> {
    skills: PreparedSkills<'t>,
    level: ExperienceLevel,
    limit: usize,
    seen: usize,
    // min-heap: the root is the weakest kept entry
    heap: BinaryHeap<Reverse<Ranked>>,
}

impl<'t> JobRanker<'t> {
    pub fn new(
        table: &'t AliasTable,
        user_skills: &[String],
        level: ExperienceLevel,
        limit: usize,
    ) -> Self {
        Self {
            skills: PreparedSkills::new(table, user_skills),
            level,
            limit,
            seen: 0,
            heap: BinaryHeap::with_capacity(limit.saturating_add(1)),
        }
    }

    /// Scores a posting and keeps it if it ranks within the limit.
    pub fn push(&mut self, posting: &JobPostingRow) {
        let seq = self.seen;
        self.seen += 1;
        if self.limit == 0 {
            return;
        }

        let result = self.skills.score(&posting.skills);
        let adjusted = adjust_for_title(result.match_percentage, self.level, &posting.title);
        let candidate = Ranked {
            seq,
            job: JobMatch {
                job_id: posting.id,
                title: posting.title.clone(),
                company: posting.company.clone(),
                location: posting.location.clone(),
                match_percentage: adjusted,
                base_percentage: result.match_percentage,
                matching_skills: result.matching_skills,
                missing_skills: result.missing_skills,
            },
        };

        if self.heap.len() < self.limit {
            self.heap.push(Reverse(candidate));
        } else if let Some(mut weakest) = self.heap.peek_mut() {
            if candidate > weakest.0 {
                *weakest = Reverse(candidate);
            }
        }
    }

    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Kept postings, best first; equal scores keep catalog order.
    pub fn finish(self) -> RankingOutcome {
        let mut kept: Vec<Ranked> = self.heap.into_iter().map(|Reverse(r)| r).collect();
        kept.sort_by(|a, b| b.cmp(a));
        RankingOutcome {
            scored: self.seen,
            matches: kept.into_iter().map(|r| r.job).collect(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Catalog streaming
// ────────────────────────────────────────────────────────────────────────────

/// Ranks every active posting in the catalog for `profile`.
pub async fn rank_catalog(
    catalog: &dyn JobCatalog,
    table: &AliasTable,
    profile: &SkillProfile,
    limit: usize,
    batch_size: usize,
) -> Result<RankingOutcome, AppError> {
    let batch_size = batch_size.max(1);
    let mut ranker = JobRanker::new(table, &profile.skills, profile.experience_level, limit);
    let mut cursor: Option<Uuid> = None;

    loop {
        let batch = catalog.active_batch(cursor, batch_size).await?;
        debug!(
            user_id = %profile.user_id,
            batch_len = batch.len(),
            scored = ranker.seen(),
            "scoring job batch"
        );
        for posting in &batch {
            ranker.push(posting);
        }
        match batch.last() {
            Some(last) if batch.len() == batch_size => cursor = Some(last.id),
            _ => break,
        }
    }

    Ok(ranker.finish())
}
