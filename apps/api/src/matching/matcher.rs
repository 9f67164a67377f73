//! Skill matcher: decides whether two skill strings denote the same competency.

use crate::matching::aliases::{self, AliasTable};
use crate::matching::normalize::normalize;

impl AliasTable {
    /// True if both skills normalize to the same string or share an alias family.
    /// Symmetric, and reflexive for every input.
    pub fn matches(&self, user_skill: &str, job_skill: &str) -> bool {
        let user = normalize(user_skill);
        let job = normalize(job_skill);
        self.normalized_match(&user, &job)
    }

    /// Same as [`AliasTable::matches`] for inputs already passed through `normalize`.
    pub(crate) fn normalized_match(&self, user: &str, job: &str) -> bool {
        if user == job {
            return true;
        }
        match (self.family_id(user), self.family_id(job)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Matches against the built-in alias table.
pub fn skills_match(user_skill: &str, job_skill: &str) -> bool {
    aliases::builtin().matches(user_skill, job_skill)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nodejs_alias_matches() {
        assert!(skills_match("Node.js", "nodejs"));
        assert!(skills_match("node js", "Node"));
    }

    #[test]
    fn test_unrelated_skills_do_not_match() {
        assert!(!skills_match("Python", "Java"));
        assert!(!skills_match("javascript", "java"));
    }

    #[test]
    fn test_exact_after_normalization() {
        assert!(skills_match("  PYTHON ", "python"));
        assert!(skills_match("Machine-Learning", "machine learning"));
    }

    #[test]
    fn test_alias_families() {
        let pairs = [
            ("JavaScript", "ES6"),
            ("TypeScript", "ts"),
            ("React", "ReactJS"),
            ("React Native", "rn"),
            ("Postgres", "PostgreSQL"),
            ("pg", "psql"),
            ("k8s", "Kubernetes"),
            ("C#", ".NET"),
            ("dotnet", "csharp"),
            ("golang", "Go"),
            ("cpp", "C++"),
            ("CI/CD", "continuous-integration"),
            ("ML", "Machine Learning"),
            ("AI", "artificial-intelligence"),
            ("Amazon Web Services", "AWS"),
            ("Tailwind CSS", "tailwindcss"),
            ("SCSS", "Sass"),
            ("MariaDB", "MySQL"),
            ("Structured-Query-Language", "SQL"),
        ];
        for (a, b) in pairs {
            assert!(skills_match(a, b), "{a} should match {b}");
        }
    }

    #[test]
    fn test_different_families_do_not_match() {
        assert!(!skills_match("React", "React Native"));
        assert!(!skills_match("SQL", "MySQL"));
        assert!(!skills_match("Go", "C++"));
    }

    #[test]
    fn test_unknown_skills_only_match_themselves() {
        assert!(skills_match("Fortran", "fortran"));
        assert!(!skills_match("Fortran", "COBOL"));
    }

    #[test]
    fn test_symmetric() {
        let skills = [
            "Node.js", "nodejs", "Python", "py", "Java", "", " ", "C#", ".net", "rest api",
            "REST", "Excel",
        ];
        for a in skills {
            for b in skills {
                assert_eq!(skills_match(a, b), skills_match(b, a), "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_reflexive() {
        for s in ["Rust", "Node.js", "-", " ", "c++", "Über-Skill"] {
            assert!(skills_match(s, s), "{s:?} should match itself");
        }
    }

    #[test]
    fn test_custom_table() {
        let raw: &[(&str, &[&str])] = &[("terraform", &["tf"])];
        let table = AliasTable::from_families(raw).unwrap();
        assert!(table.matches("TF", "Terraform"));
        assert!(!table.matches("k8s", "kubernetes"));
    }
}
