//! User skill profiles: resume analysis (skill extraction + experience tier)
//! and the full-replace profile lifecycle.

pub mod experience;
pub mod extractor;
pub mod handlers;
pub mod upload;
pub mod whitelist;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::profile::experience::{analyze_experience, ExperienceSignals};
use crate::profile::extractor::extract_skills;

pub const MAX_PROFILE_SKILLS: usize = 100;
pub const MAX_SKILL_CHARS: usize = 50;

/// Heuristic seniority tier. `Unknown` sits outside the ordering:
/// `Fresher < Junior < Mid < Senior`, and `Unknown` compares only to itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceLevel {
    Fresher,
    Junior,
    Mid,
    Senior,
    #[default]
    Unknown,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Fresher => "fresher",
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Mid => "mid",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Unknown => "unknown",
        }
    }

    fn rank(&self) -> Option<u8> {
        match self {
            ExperienceLevel::Fresher => Some(0),
            ExperienceLevel::Junior => Some(1),
            ExperienceLevel::Mid => Some(2),
            ExperienceLevel::Senior => Some(3),
            ExperienceLevel::Unknown => None,
        }
    }
}

impl PartialOrd for ExperienceLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.rank(), other.rank()) {
            (Some(a), Some(b)) => Some(a.cmp(&b)),
            (None, None) => Some(Ordering::Equal),
            _ => None,
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fresher" => Ok(ExperienceLevel::Fresher),
            "junior" => Ok(ExperienceLevel::Junior),
            "mid" => Ok(ExperienceLevel::Mid),
            "senior" => Ok(ExperienceLevel::Senior),
            "unknown" => Ok(ExperienceLevel::Unknown),
            other => Err(format!("unknown experience level '{other}'")),
        }
    }
}

/// Where the current skill set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileSource {
    Manual,
    Upload,
    Builder,
}

impl ProfileSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileSource::Manual => "manual",
            ProfileSource::Upload => "upload",
            ProfileSource::Builder => "builder",
        }
    }
}

impl FromStr for ProfileSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manual" => Ok(ProfileSource::Manual),
            "upload" => Ok(ProfileSource::Upload),
            "builder" => Ok(ProfileSource::Builder),
            other => Err(format!("unknown profile source '{other}'")),
        }
    }
}

/// A user's skill profile. Every write replaces the whole profile; there is no
/// partial update or merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub user_id: Uuid,
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub source: ProfileSource,
    pub updated_at: DateTime<Utc>,
}

impl SkillProfile {
    /// Builds a replacement profile, sanitizing the skill list.
    pub fn replacement<I, S>(
        user_id: Uuid,
        skills: I,
        experience_level: ExperienceLevel,
        source: ProfileSource,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            user_id,
            skills: sanitize_skills(skills),
            experience_level,
            source,
            updated_at: Utc::now(),
        }
    }
}

/// Lowercases, trims and truncates each skill to 50 characters, drops empties and
/// duplicates (first occurrence wins), and keeps at most 100 entries.
pub fn sanitize_skills<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut skills = Vec::new();

    for skill in raw {
        if skills.len() == MAX_PROFILE_SKILLS {
            break;
        }
        let lowered = skill.as_ref().trim().to_lowercase();
        let truncated: String = lowered.chars().take(MAX_SKILL_CHARS).collect();
        let cleaned = truncated.trim_end().to_string();
        if cleaned.is_empty() || !seen.insert(cleaned.clone()) {
            continue;
        }
        skills.push(cleaned);
    }

    skills
}

/// Skills and experience tier derived from one resume text.
#[derive(Debug, Clone, Serialize)]
pub struct ResumeAnalysis {
    pub skills: Vec<String>,
    pub experience_level: ExperienceLevel,
    pub signals: ExperienceSignals,
    /// Name of the classifier rule that produced `experience_level`.
    pub rule: &'static str,
}

/// Runs the skill extractor and the experience classifier over the same text.
pub fn analyze_resume(text: &str) -> ResumeAnalysis {
    let skills = extract_skills(text).into_iter().collect();
    let experience = analyze_experience(text);
    ResumeAnalysis {
        skills,
        experience_level: experience.level,
        signals: experience.signals,
        rule: experience.rule,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered_by_seniority() {
        assert!(ExperienceLevel::Fresher < ExperienceLevel::Junior);
        assert!(ExperienceLevel::Junior < ExperienceLevel::Mid);
        assert!(ExperienceLevel::Mid < ExperienceLevel::Senior);
    }

    #[test]
    fn test_unknown_is_out_of_band() {
        assert_eq!(
            ExperienceLevel::Unknown.partial_cmp(&ExperienceLevel::Senior),
            None
        );
        assert_eq!(
            ExperienceLevel::Fresher.partial_cmp(&ExperienceLevel::Unknown),
            None
        );
        assert_eq!(
            ExperienceLevel::Unknown.partial_cmp(&ExperienceLevel::Unknown),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_level_round_trips_through_text() {
        for level in [
            ExperienceLevel::Fresher,
            ExperienceLevel::Junior,
            ExperienceLevel::Mid,
            ExperienceLevel::Senior,
            ExperienceLevel::Unknown,
        ] {
            assert_eq!(level.to_string().parse::<ExperienceLevel>(), Ok(level));
        }
        assert!("expert".parse::<ExperienceLevel>().is_err());
    }

    #[test]
    fn test_level_serde_is_snake_case() {
        let json = serde_json::to_string(&ExperienceLevel::Mid).unwrap();
        assert_eq!(json, r#""mid""#);
        let level: ExperienceLevel = serde_json::from_str(r#""fresher""#).unwrap();
        assert_eq!(level, ExperienceLevel::Fresher);
    }

    #[test]
    fn test_sanitize_lowercases_trims_and_dedups() {
        let skills = sanitize_skills(["  Python ", "python", "SQL", "", "   ", "Sql"]);
        assert_eq!(skills, vec!["python", "sql"]);
    }

    #[test]
    fn test_sanitize_truncates_long_skills() {
        let long = "x".repeat(80);
        let skills = sanitize_skills([long.as_str()]);
        assert_eq!(skills[0].chars().count(), MAX_SKILL_CHARS);
    }

    #[test]
    fn test_sanitize_caps_entry_count() {
        let raw: Vec<String> = (0..150).map(|i| format!("skill-{i}")).collect();
        let skills = sanitize_skills(&raw);
        assert_eq!(skills.len(), MAX_PROFILE_SKILLS);
        assert_eq!(skills[0], "skill-0");
        assert_eq!(skills[99], "skill-99");
    }

    #[test]
    fn test_replacement_sanitizes() {
        let user_id = Uuid::new_v4();
        let profile = SkillProfile::replacement(
            user_id,
            ["React", "react"],
            ExperienceLevel::Junior,
            ProfileSource::Manual,
        );
        assert_eq!(profile.user_id, user_id);
        assert_eq!(profile.skills, vec!["react"]);
        assert_eq!(profile.source, ProfileSource::Manual);
    }

    #[test]
    fn test_analyze_resume_combines_extractor_and_classifier() {
        let text = "Senior Software Engineer with 8+ years of experience leading teams.\n\
                    Skills: Python, Kubernetes, AWS\n\nEDUCATION\nB.Sc Computer Science";
        let analysis = analyze_resume(text);
        assert_eq!(analysis.experience_level, ExperienceLevel::Senior);
        assert_eq!(analysis.skills, vec!["aws", "kubernetes", "python"]);
        assert_eq!(analysis.signals.max_years, 8);
    }
}
