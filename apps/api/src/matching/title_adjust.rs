//! Title-based score adjustment: corrects a match score for an apparent
//! seniority mismatch between the candidate and the posting's title.

use crate::profile::extractor::contains_word;
use crate::profile::ExperienceLevel;

/// Title words implying a senior role.
pub const SENIOR_TITLE_KEYWORDS: &[&str] = &[
    "senior",
    "sr.",
    "lead",
    "principal",
    "staff",
    "architect",
    "director",
    "vp",
    "head of",
    "manager",
];

/// Title words implying an entry-level role.
pub const FRESHER_TITLE_KEYWORDS: &[&str] = &[
    "intern",
    "internship",
    "trainee",
    "junior",
    "jr.",
    "entry level",
    "entry-level",
    "associate",
    "fresher",
    "graduate",
];

const FRESHER_SENIOR_TITLE_PENALTY: i64 = 40;
const FRESHER_ENTRY_TITLE_BOOST: i64 = 15;
const SENIOR_ENTRY_TITLE_PENALTY: i64 = 20;

/// Applies at most one fixed delta per rule, then clamps to `0..=100`.
///
/// - fresher: −40 for a senior-sounding title, +15 for an entry-level title
/// - senior: −20 for an entry-level title
/// - anyone else: unchanged
pub fn adjust_for_title(base_score: u32, level: ExperienceLevel, job_title: &str) -> u32 {
    let title = job_title.to_lowercase();
    let senior_title = contains_any(&title, SENIOR_TITLE_KEYWORDS);
    let entry_title = contains_any(&title, FRESHER_TITLE_KEYWORDS);

    let mut score = i64::from(base_score);
    match level {
        ExperienceLevel::Fresher => {
            if senior_title {
                score -= FRESHER_SENIOR_TITLE_PENALTY;
            }
            if entry_title {
                score += FRESHER_ENTRY_TITLE_BOOST;
            }
        }
        ExperienceLevel::Senior => {
            if entry_title {
                score -= SENIOR_ENTRY_TITLE_PENALTY;
            }
        }
        ExperienceLevel::Junior | ExperienceLevel::Mid | ExperienceLevel::Unknown => {}
    }

    score.clamp(0, 100) as u32
}

/// Keywords count as whole words: "intern" does not hit "internal".
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| contains_word(haystack, n))
}
