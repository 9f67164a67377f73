//! Curated skill vocabulary used by the free-text extractor. All entries lowercase.

pub const SKILL_WHITELIST: &[&str] = &[
    // Data and analytics
    "excel",
    "power bi",
    "tableau",
    "looker",
    "sql",
    "pandas",
    "numpy",
    "statistics",
    "data analysis",
    "data visualization",
    "data engineering",
    "etl",
    "machine learning",
    "deep learning",
    "natural language processing",
    "computer vision",
    "tensorflow",
    "pytorch",
    "keras",
    "scikit-learn",
    "spark",
    "hadoop",
    "airflow",
    "a/b testing",
    // Web
    "html",
    "css",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue",
    "next.js",
    "node.js",
    "express",
    "tailwind",
    "bootstrap",
    "jquery",
    "sass",
    "redux",
    "graphql",
    "rest",
    "webpack",
    "wordpress",
    // Backend and infrastructure
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "terraform",
    "ansible",
    "jenkins",
    "linux",
    "nginx",
    "redis",
    "kafka",
    "rabbitmq",
    "postgresql",
    "mysql",
    "mongodb",
    "firebase",
    "supabase",
    "django",
    "flask",
    "fastapi",
    "spring boot",
    "microservices",
    "ci/cd",
    "git",
    "github",
    "gitlab",
    // Languages
    "python",
    "java",
    "kotlin",
    "swift",
    "rust",
    "scala",
    "golang",
    "perl",
    "matlab",
    "dart",
    "bash",
    // Mobile
    "android",
    "ios",
    "flutter",
    "react native",
    "xamarin",
    // Tools
    "jira",
    "confluence",
    "figma",
    "postman",
    "photoshop",
    "selenium",
    "jest",
    "cypress",
    // Soft skills and practices
    "communication",
    "leadership",
    "teamwork",
    "problem solving",
    "project management",
    "time management",
    "critical thinking",
    "public speaking",
    "agile",
    "scrum",
];

/// Short or ambiguous skills that only count when they stand alone as a list item.
pub const AMBIGUOUS_SKILLS: &[&str] = &["c++", "c#", "r", "go", "php", "ruby"];
