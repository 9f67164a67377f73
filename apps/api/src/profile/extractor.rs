//! Free-text skill extractor: builds a skill set from raw resume text when the
//! user has not entered skills explicitly.
//!
//! With a skills-style section header present, only that section is scanned and
//! short ambiguous skills are accepted as standalone list items. Without one the
//! whole text is scanned, but only for whitelist entries of 4+ characters.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::profile::whitelist::{AMBIGUOUS_SKILLS, SKILL_WHITELIST};

/// Section body length when no following section header bounds it.
const MAX_SECTION_CHARS: usize = 2000;

/// Minimum whitelist entry length used when scanning the whole text.
const FALLBACK_MIN_CHARS: usize = 4;

const LIST_DELIMITERS: &[char] = &[
    ',', ';', '|', '•', '·', '▪', '●', '◦', '\n', '\r', ':', '/',
];

/// Generic section titles that close a skills section even when not all-caps.
const SECTION_TITLES: &[&str] = &[
    "education",
    "experience",
    "work experience",
    "professional experience",
    "employment history",
    "projects",
    "certifications",
    "certificates",
    "achievements",
    "awards",
    "publications",
    "interests",
    "hobbies",
    "references",
    "summary",
    "objective",
    "volunteering",
    "activities",
    "extracurricular activities",
];

static SKILLS_HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*(?:[#*•\-][ \t]*)?(?:technical[ \t]+skills|key[ \t]+skills|core[ \t]+skills|skill[ \t]+set|skillset|skills|core[ \t]+competencies|competencies|tech[ \t]+stack|technology[ \t]+stack|tools[ \t]+(?:and|&)[ \t]+technologies|proficiencies|areas[ \t]+of[ \t]+expertise)\b[ \t]*:?",
    )
    .expect("skills header regex")
});

/// Extracts a lowercase, deduplicated skill set from resume text.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let mut skills = BTreeSet::new();

    match skills_section(text) {
        Some(body) => {
            let body = body.to_lowercase();
            collect_whitelist_hits(&body, 0, &mut skills);
            collect_list_items(&body, &mut skills);
        }
        None => {
            collect_whitelist_hits(&text.to_lowercase(), FALLBACK_MIN_CHARS, &mut skills);
        }
    }

    skills
}

/// Returns the body of the first skills-style section, if any.
///
/// The body runs from just after the header to the next section header line,
/// or to `MAX_SECTION_CHARS` characters when no later header exists.
pub fn skills_section(text: &str) -> Option<&str> {
    let header = SKILLS_HEADER_RE.find(text)?;
    let rest = &text[header.end()..];

    // The remainder of the header line is body ("Skills: SQL, AWS").
    let first_line_len = rest.find('\n').map_or(rest.len(), |i| i + 1);
    let mut offset = first_line_len;
    for line in rest[first_line_len..].split_inclusive('\n') {
        if is_section_header(line) {
            return Some(&rest[..offset]);
        }
        offset += line.len();
    }

    Some(truncate_chars(rest, MAX_SECTION_CHARS))
}

fn is_section_header(line: &str) -> bool {
    let title = line.trim().trim_end_matches(':').trim_end();
    if title.is_empty() {
        return false;
    }

    let lower = title.to_lowercase();
    if SECTION_TITLES.contains(&lower.as_str()) {
        return true;
    }

    let letters = title.chars().filter(|c| c.is_alphabetic()).count();
    let all_caps = title
        .chars()
        .all(|c| c.is_uppercase() || matches!(c, ' ' | '&' | '/'));
    letters >= 4 && all_caps && !names_a_skill(&lower)
}

/// An all-caps line listing skills ("PYTHON SQL", "SQL / AWS") is body, not a header.
fn names_a_skill(lower: &str) -> bool {
    SKILL_WHITELIST
        .iter()
        .any(|skill| contains_word(lower, skill))
        || lower
            .split(|c: char| c.is_whitespace() || LIST_DELIMITERS.contains(&c))
            .any(|token| AMBIGUOUS_SKILLS.contains(&token))
}

fn collect_whitelist_hits(lower: &str, min_chars: usize, out: &mut BTreeSet<String>) {
    for skill in SKILL_WHITELIST {
        if skill.chars().count() >= min_chars && contains_word(lower, skill) {
            out.insert(skill.to_string());
        }
    }
}

/// Ambiguous skills count only as a whole delimited list item ("Go, Rust").
fn collect_list_items(lower: &str, out: &mut BTreeSet<String>) {
    for item in lower.split(LIST_DELIMITERS) {
        let item = item.trim().trim_start_matches(|c: char| c == '-' || c == '*').trim();
        if let Some(skill) = AMBIGUOUS_SKILLS.iter().find(|s| **s == item) {
            out.insert(skill.to_string());
        }
    }
}

/// Occurrence of `word` not flanked by alphanumerics on either side.
pub(crate) fn contains_word(haystack: &str, word: &str) -> bool {
    haystack.match_indices(word).any(|(start, matched)| {
        let before = haystack[..start].chars().next_back();
        let after = haystack[start + matched.len()..].chars().next();
        before.map_or(true, |c| !c.is_alphanumeric()) && after.map_or(true, |c| !c.is_alphanumeric())
    })
}

fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_inline_skills_section() {
        let skills = extract_skills("Skills: Python, React, AWS\n\nEDUCATION\n...");
        assert_eq!(skills, set(&["python", "react", "aws"]));
    }

    #[test]
    fn test_section_stops_at_next_all_caps_header() {
        let text = "TECHNICAL SKILLS\nDocker, Kubernetes\nWORK EXPERIENCE\nUsed Terraform daily";
        assert_eq!(extract_skills(text), set(&["docker", "kubernetes"]));
    }

    #[test]
    fn test_section_stops_at_title_case_header() {
        let text = "Core Competencies:\nLeadership | Agile\nProjects\nBuilt a Flutter app";
        assert_eq!(extract_skills(text), set(&["leadership", "agile"]));
    }

    #[test]
    fn test_whitelisted_all_caps_line_does_not_close_section() {
        let text = "Skills\nHTML\nJAVA\nEDUCATION\nLinux lab assistant";
        assert_eq!(extract_skills(text), set(&["html", "java"]));
    }

    #[test]
    fn test_all_caps_skill_lines_stay_in_section() {
        let text = "TECHNICAL SKILLS\nPYTHON SQL\nDOCKER\n\nEDUCATION\nB.Tech";
        assert_eq!(extract_skills(text), set(&["python", "sql", "docker"]));

        let text = "Skills\nSQL / AWS\nDocker\nEDUCATION\n";
        assert_eq!(extract_skills(text), set(&["sql", "aws", "docker"]));
    }

    #[test]
    fn test_all_caps_ambiguous_skill_line_stays_in_section() {
        let text = "Skills\nGO / RUBY\nKafka\nPROJECTS\nTerraform";
        assert_eq!(extract_skills(text), set(&["go", "ruby", "kafka"]));
    }

    #[test]
    fn test_ambiguous_skills_as_list_items() {
        let text = "Tech Stack: Go, R; C++ | PHP\n• Ruby\n- C#\nEXPERIENCE";
        assert_eq!(
            extract_skills(text),
            set(&["go", "r", "c++", "php", "ruby", "c#"])
        );
    }

    #[test]
    fn test_ambiguous_skills_not_matched_inside_words() {
        let text = "Skills: Project management for the director of a rugby club\nSUMMARY";
        assert_eq!(extract_skills(text), set(&["project management"]));
    }

    #[test]
    fn test_sub_labels_and_slashes_split_items() {
        let text = "Skills\nLanguages: Go, C/C++\nTools: Git, Jira\n\nPROJECTS";
        assert_eq!(
            extract_skills(text),
            set(&["go", "c++", "git", "jira"])
        );
    }

    #[test]
    fn test_whole_word_matching() {
        let text = "Skills: JavaScript, MySQL, Reactive streams\nAWARDS";
        assert_eq!(extract_skills(text), set(&["javascript", "mysql"]));
    }

    #[test]
    fn test_multi_word_and_punctuated_entries() {
        let text = "Areas of Expertise: Machine Learning, Node.js, CI/CD, Spring Boot\nEDUCATION";
        assert_eq!(
            extract_skills(text),
            set(&["machine learning", "node.js", "ci/cd", "spring boot"])
        );
    }

    #[test]
    fn test_fallback_scans_whole_text_for_long_entries_only() {
        let text = "Built dashboards in Tableau and Python on AWS with SQL and Git. Knows Go.";
        assert_eq!(extract_skills(text), set(&["tableau", "python"]));
    }

    #[test]
    fn test_no_header_no_skills() {
        assert!(extract_skills("I enjoy hiking and cooking.").is_empty());
        assert!(extract_skills("").is_empty());
    }

    #[test]
    fn test_unbounded_section_capped_at_2000_chars() {
        let filler = "x ".repeat(1100);
        let text = format!("Skills: Python, {filler} Kubernetes");
        let body = skills_section(&text).unwrap();
        assert_eq!(body.chars().count(), MAX_SECTION_CHARS);
        assert_eq!(extract_skills(&text), set(&["python"]));
    }

    #[test]
    fn test_bounded_section_not_capped() {
        let filler = "x ".repeat(1100);
        let text = format!("Skills:\n{filler} Kubernetes\nEDUCATION\nDocker");
        assert_eq!(extract_skills(&text), set(&["kubernetes"]));
    }

    #[test]
    fn test_header_must_start_a_line() {
        let text = "I have great communication skills: Python and more";
        // no section header, falls back to whole-text scan
        assert_eq!(extract_skills(text), set(&["communication", "python"]));
    }

    #[test]
    fn test_multibyte_text_is_safe() {
        let text = "Skills: Café ☕, Python — naïve résumé\nÉDUCATION";
        assert_eq!(extract_skills(text), set(&["python"]));
    }
}
