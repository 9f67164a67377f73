//! Experience-level classifier: heuristic seniority tier from resume free text.
//!
//! Signals are computed once per call, then an ordered rule table is evaluated
//! top to bottom; the first rule whose predicate holds decides the tier.
//! False positives are expected. The contract is that the same text always walks
//! the same rules to the same tier.

use std::sync::LazyLock;

use chrono::{Datelike, Utc};
use regex::Regex;
use serde::Serialize;

use crate::profile::ExperienceLevel;

/// Texts shorter than this (after trimming) carry too little signal to classify.
const MIN_TEXT_CHARS: usize = 20;

/// Graduation within this many years of the current year counts as recent.
const RECENT_GRAD_WINDOW: i32 = 2;

pub const FRESHER_KEYWORDS: &[&str] = &[
    "fresher",
    "recent graduate",
    "fresh graduate",
    "new grad",
    "entry level",
    "entry-level",
    "final year",
    "0 years",
    "no experience",
    "no prior experience",
    "first job",
    "just graduated",
    "campus placement",
    "seeking an internship",
    "looking for my first",
];

pub const SENIOR_KEYWORDS: &[&str] = &[
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
    "team lead",
];

pub const WORK_SECTION_HEADERS: &[&str] = &[
    "work experience",
    "professional experience",
    "employment history",
    "work history",
    "career history",
    "relevant experience",
];

static YEARS_OF_EXPERIENCE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{1,2})\s*\+?\s*(?:years?|yrs?)'?\s*(?:of\s+)?(?:experience|exp)")
        .expect("years-of-experience regex")
});

static GRADUATION_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:graduated|graduation|batch|class of|passing year)[^\d\n]{0,40}\b((?:19|20)\d{2})\b")
        .expect("graduation-year regex")
});

static INTERNSHIP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bintern(?:s|ships?)?\b").expect("internship regex"));

/// Intermediate values the rule table decides on. Exposed for explainability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceSignals {
    pub has_fresher_keyword: bool,
    /// Largest "N years of experience" figure, or -1 if none was stated.
    pub max_years: i32,
    pub graduation_years: Vec<i32>,
    pub recent_grad: bool,
    pub has_work_section: bool,
    pub internship_mentions: usize,
    pub has_senior_keyword: bool,
}

impl Default for ExperienceSignals {
    fn default() -> Self {
        Self {
            has_fresher_keyword: false,
            max_years: -1,
            graduation_years: vec![],
            recent_grad: false,
            has_work_section: false,
            internship_mentions: 0,
            has_senior_keyword: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceAnalysis {
    pub level: ExperienceLevel,
    pub signals: ExperienceSignals,
    pub rule: &'static str,
}

/// One row of the decision table.
pub struct Rule {
    pub name: &'static str,
    pub level: ExperienceLevel,
    pub applies: fn(&ExperienceSignals) -> bool,
}

/// Decision table, highest priority first.
pub const RULES: &[Rule] = &[
    Rule {
        name: "senior_tenure",
        level: ExperienceLevel::Senior,
        applies: senior_tenure,
    },
    Rule {
        name: "mid_tenure",
        level: ExperienceLevel::Mid,
        applies: mid_tenure,
    },
    Rule {
        name: "fresher_signal",
        level: ExperienceLevel::Fresher,
        applies: fresher_signal,
    },
    Rule {
        name: "junior_tenure",
        level: ExperienceLevel::Junior,
        applies: junior_tenure,
    },
    Rule {
        name: "no_work_history",
        level: ExperienceLevel::Fresher,
        applies: no_work_history,
    },
];

pub const INSUFFICIENT_TEXT_RULE: &str = "insufficient_text";
pub const FALLBACK_RULE: &str = "fallback";

fn senior_tenure(s: &ExperienceSignals) -> bool {
    s.max_years >= 6 || (s.has_senior_keyword && s.max_years >= 4)
}

fn mid_tenure(s: &ExperienceSignals) -> bool {
    (3..6).contains(&s.max_years)
}

fn fresher_signal(s: &ExperienceSignals) -> bool {
    s.has_fresher_keyword || s.recent_grad
}

fn junior_tenure(s: &ExperienceSignals) -> bool {
    (0..3).contains(&s.max_years)
}

// Internship mentions without a work section also land here; with a work
// section present they do not change the outcome.
fn no_work_history(s: &ExperienceSignals) -> bool {
    !s.has_work_section
}

/// Classifies against the current UTC year.
pub fn classify(text: &str) -> ExperienceLevel {
    analyze_experience(text).level
}

pub fn analyze_experience(text: &str) -> ExperienceAnalysis {
    analyze_experience_at(text, Utc::now().year())
}

/// Pure form of [`classify`] with the reference year supplied by the caller.
pub fn classify_at(text: &str, current_year: i32) -> ExperienceLevel {
    analyze_experience_at(text, current_year).level
}

pub fn analyze_experience_at(text: &str, current_year: i32) -> ExperienceAnalysis {
    if text.trim().chars().count() < MIN_TEXT_CHARS {
        return ExperienceAnalysis {
            level: ExperienceLevel::Unknown,
            signals: ExperienceSignals::default(),
            rule: INSUFFICIENT_TEXT_RULE,
        };
    }

    let signals = collect_signals(&text.to_lowercase(), current_year);
    let (level, rule) = RULES
        .iter()
        .find(|rule| (rule.applies)(&signals))
        .map(|rule| (rule.level, rule.name))
        .unwrap_or((ExperienceLevel::Unknown, FALLBACK_RULE));

    ExperienceAnalysis {
        level,
        signals,
        rule,
    }
}

/// Computes every signal from already-lowercased text.
pub fn collect_signals(lower: &str, current_year: i32) -> ExperienceSignals {
    let max_years = YEARS_OF_EXPERIENCE_RE
        .captures_iter(lower)
        .filter_map(|c| c[1].parse::<i32>().ok())
        .max()
        .unwrap_or(-1);

    let graduation_years: Vec<i32> = GRADUATION_YEAR_RE
        .captures_iter(lower)
        .filter_map(|c| c[1].parse::<i32>().ok())
        .collect();
    let recent_grad = graduation_years
        .iter()
        .any(|y| (current_year - RECENT_GRAD_WINDOW..=current_year).contains(y));

    ExperienceSignals {
        has_fresher_keyword: contains_any_phrase(lower, FRESHER_KEYWORDS),
        max_years,
        graduation_years,
        recent_grad,
        has_work_section: contains_any_phrase(lower, WORK_SECTION_HEADERS),
        internship_mentions: INTERNSHIP_RE.find_iter(lower).count(),
        has_senior_keyword: contains_any_phrase(lower, SENIOR_KEYWORDS),
    }
}

fn contains_any_phrase(text: &str, phrases: &[&str]) -> bool {
    phrases.iter().any(|p| contains_phrase(text, p))
}

/// Substring match that must begin at a word start, so "refresher" is not
/// "fresher" and "10 years" is not "0 years".
fn contains_phrase(text: &str, phrase: &str) -> bool {
    text.match_indices(phrase).any(|(start, _)| {
        text[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric())
    })
}
