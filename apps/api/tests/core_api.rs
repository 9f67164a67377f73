//! Drives the matching and profile core through the public library surface.

use skillboard_api::matching::aliases::{self, AliasTable};
use skillboard_api::matching::matcher::skills_match;
use skillboard_api::matching::scorer::score_job;
use skillboard_api::matching::title_adjust::adjust_for_title;
use skillboard_api::profile::experience::{classify, classify_at};
use skillboard_api::profile::extractor::extract_skills;
use skillboard_api::profile::ExperienceLevel;

#[test]
fn test_builtin_table_exposes_families() {
    let table = aliases::builtin();
    assert!(!table.is_empty());

    let family = table.family_of("Node.js").expect("nodejs family");
    assert_eq!(family.key, "nodejs");
    assert!(family.members.contains("node"));
    assert!(table.family_of("cobol").is_none());
}

#[test]
fn test_custom_table_matches() {
    let table = AliasTable::from_families(&[("golang", &["go", "go lang"][..])]).unwrap();
    assert!(table.matches("Go", "golang"));
    assert!(!table.matches("Go", "rust"));
}

#[test]
fn test_match_then_score_then_adjust() {
    assert!(skills_match("Node.js", "nodejs"));
    assert!(!skills_match("Python", "Java"));

    let result = score_job(&["python", "sql"], &["Python", "SQL", "Excel"]);
    assert_eq!(result.match_percentage, 67);
    assert_eq!(result.matching_skills, vec!["Python", "SQL"]);
    assert_eq!(result.missing_skills, vec!["Excel"]);

    assert_eq!(
        adjust_for_title(80, ExperienceLevel::Fresher, "Senior Backend Engineer"),
        40
    );
}

#[test]
fn test_classify_and_extract() {
    let fresher = "Fresher seeking entry level position, final year B.Tech student";
    assert_eq!(classify(fresher), ExperienceLevel::Fresher);
    assert_eq!(classify_at(fresher, 2026), ExperienceLevel::Fresher);
    assert_eq!(
        classify("Senior Software Engineer with 8+ years of experience leading teams"),
        ExperienceLevel::Senior
    );

    let skills: Vec<String> = extract_skills("Skills: Python, React, AWS\n\nEDUCATION\n...")
        .into_iter()
        .collect();
    assert_eq!(skills, vec!["aws", "python", "react"]);
}
