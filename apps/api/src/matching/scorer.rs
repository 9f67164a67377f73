//! Job match scorer: how much of a posting's required skill list a user covers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::matching::aliases::{self, AliasTable};
use crate::matching::normalize::normalize;

/// Per-posting match outcome. `matching_skills` and `missing_skills` partition the
/// posting's skill list and keep its order and original spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub match_percentage: u32, // 0 – 100
    pub matching_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

impl MatchResult {
    fn empty() -> Self {
        Self {
            match_percentage: 0,
            matching_skills: vec![],
            missing_skills: vec![],
        }
    }
}

/// A user's skills, normalized once and resolved to alias families so a single
/// profile can be scored against many postings without re-normalizing.
#[derive(Debug, Clone)]
pub struct PreparedSkills<'t> {
    table: &'t AliasTable,
    normalized: HashSet<String>,
    families: HashSet<usize>,
}

impl<'t> PreparedSkills<'t> {
    pub fn new<I, S>(table: &'t AliasTable, user_skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let normalized: HashSet<String> = user_skills
            .into_iter()
            .map(|s| normalize(s.as_ref()))
            .collect();
        let families = normalized
            .iter()
            .filter_map(|s| table.family_id(s))
            .collect();
        Self {
            table,
            normalized,
            families,
        }
    }

    /// Equivalent to `user_skills.any(|u| table.matches(u, job_skill))`.
    pub fn covers(&self, job_skill: &str) -> bool {
        let job = normalize(job_skill);
        if self.normalized.contains(&job) {
            return true;
        }
        self.table
            .family_id(&job)
            .is_some_and(|id| self.families.contains(&id))
    }

    pub fn score<S: AsRef<str>>(&self, job_skills: &[S]) -> MatchResult {
        if job_skills.is_empty() {
            return MatchResult::empty();
        }

        let mut matching_skills = Vec::new();
        let mut missing_skills = Vec::new();
        for skill in job_skills {
            let skill = skill.as_ref();
            if self.covers(skill) {
                matching_skills.push(skill.to_string());
            } else {
                missing_skills.push(skill.to_string());
            }
        }

        MatchResult {
            match_percentage: rounded_percentage(matching_skills.len(), job_skills.len()),
            matching_skills,
            missing_skills,
        }
    }
}

/// `round(100 * part / whole)` with halves rounded up, in integer arithmetic.
fn rounded_percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let pct = (200 * part + whole) / (2 * whole);
    pct.min(100) as u32
}

/// Scores one posting against the built-in alias table.
pub fn score_job<U, S>(user_skills: &[U], job_skills: &[S]) -> MatchResult
where
    U: AsRef<str>,
    S: AsRef<str>,
{
    PreparedSkills::new(aliases::builtin(), user_skills).score(job_skills)
}
