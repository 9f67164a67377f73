//! Skill alias table: families of interchangeable skill spellings.
//!
//! The built-in table is constructed once, validated, and shared read-only for the
//! life of the process. Members are stored in normalized form so lookups never
//! depend on how an alias happened to be cased or punctuated in the source table.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use thiserror::Error;

use crate::matching::normalize::normalize;

/// Raw family definitions: canonical key + alternate spellings.
/// The key is always a member of its own family.
pub const BUILTIN_FAMILIES: &[(&str, &[&str])] = &[
    // JavaScript ecosystem
    ("nodejs", &["node.js", "node", "node js"]),
    ("javascript", &["js", "ecmascript", "es6", "es2015"]),
    ("typescript", &["ts"]),
    ("react", &["reactjs", "react.js"]),
    ("react native", &["reactnative", "react-native", "rn"]),
    ("vue", &["vuejs", "vue.js"]),
    ("angular", &["angularjs", "angular.js"]),
    ("next", &["nextjs", "next.js"]),
    ("nuxt", &["nuxtjs", "nuxt.js"]),
    ("express", &["expressjs", "express.js"]),
    // Styling
    ("tailwind", &["tailwindcss", "tailwind css"]),
    ("css", &["css3"]),
    ("html", &["html5"]),
    ("sass", &["scss"]),
    // Data stores
    ("postgresql", &["postgres", "psql", "pg"]),
    ("mongodb", &["mongo"]),
    ("mysql", &["mariadb"]),
    ("sql", &["structured query language", "structured-query-language"]),
    ("elasticsearch", &["elastic search"]),
    ("dynamodb", &["dynamo"]),
    // Cloud and infrastructure
    ("aws", &["amazon web services"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("azure", &["microsoft azure"]),
    ("kubernetes", &["k8s"]),
    ("docker", &["containerization"]),
    (
        "ci cd",
        &[
            "ci/cd",
            "cicd",
            "ci-cd",
            "continuous integration",
            "continuous deployment",
        ],
    ),
    // Languages
    ("python", &["py", "python3"]),
    ("c#", &["csharp", "dotnet", "net", ".net"]),
    ("go", &["golang"]),
    ("c++", &["cpp"]),
    ("objective c", &["objective-c", "objc"]),
    // Frameworks and APIs
    ("graphql", &["gql"]),
    ("rest", &["restful", "rest api"]),
    ("spring boot", &["springboot", "spring-boot"]),
    ("ruby on rails", &["rails", "ror"]),
    ("scikit learn", &["scikit-learn", "sklearn"]),
    // Data and AI
    ("machine learning", &["ml", "machine-learning"]),
    ("deep learning", &["dl"]),
    ("artificial intelligence", &["ai"]),
    ("natural language processing", &["nlp"]),
    ("power bi", &["powerbi"]),
    ("excel", &["microsoft excel", "ms excel"]),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AliasTableError {
    #[error("alias '{member}' appears in both '{first}' and '{second}'")]
    OverlappingMember {
        member: String,
        first: String,
        second: String,
    },

    #[error("alias family with key '{key}' normalizes to an empty member")]
    EmptyMember { key: String },
}

/// One family of interchangeable spellings.
#[derive(Debug, Clone)]
pub struct AliasFamily {
    pub key: String,
    /// Normalized member strings, including the normalized key.
    pub members: BTreeSet<String>,
}

/// Immutable lookup from normalized member → owning family.
#[derive(Debug, Clone)]
pub struct AliasTable {
    families: Vec<AliasFamily>,
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Builds a table from raw `(key, aliases)` pairs.
    ///
    /// Rejects any table where two families share a normalized member, since
    /// membership lookups would otherwise depend on iteration order.
    pub fn from_families(raw: &[(&str, &[&str])]) -> Result<Self, AliasTableError> {
        let mut families = Vec::with_capacity(raw.len());
        let mut index: HashMap<String, usize> = HashMap::new();

        for (family_id, (key, aliases)) in raw.iter().enumerate() {
            let mut members = BTreeSet::new();
            for spelling in std::iter::once(key).chain(aliases.iter()) {
                let member = normalize(spelling);
                if member.is_empty() {
                    return Err(AliasTableError::EmptyMember {
                        key: key.to_string(),
                    });
                }
                members.insert(member);
            }

            for member in &members {
                if let Some(&owner) = index.get(member) {
                    let first: &AliasFamily = &families[owner];
                    return Err(AliasTableError::OverlappingMember {
                        member: member.clone(),
                        first: first.key.clone(),
                        second: key.to_string(),
                    });
                }
                index.insert(member.clone(), family_id);
            }

            families.push(AliasFamily {
                key: key.to_string(),
                members,
            });
        }

        Ok(Self { families, index })
    }

    /// Returns the family owning `raw`, normalizing it first.
    pub fn family_of(&self, raw: &str) -> Option<&AliasFamily> {
        self.family_id(&normalize(raw)).map(|id| &self.families[id])
    }

    /// Family position for an already-normalized skill.
    pub(crate) fn family_id(&self, normalized: &str) -> Option<usize> {
        self.index.get(normalized).copied()
    }

    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }
}

static BUILTIN: LazyLock<AliasTable> = LazyLock::new(|| {
    AliasTable::from_families(BUILTIN_FAMILIES)
        .unwrap_or_else(|e| panic!("built-in skill alias table is invalid: {e}"))
});

/// The process-wide alias table. Touched once in `main` so an invalid table
/// aborts startup instead of the first request.
pub fn builtin() -> &'static AliasTable {
    &BUILTIN
}
