//! Static vocabularies for query enhancement. Order matters: matches are
//! reported in table order, and for experience level and job type the first
//! entry found wins.

pub const JOB_TITLES: &[&str] = &[
    "developer",
    "engineer",
    "designer",
    "manager",
    "analyst",
    "architect",
    "consultant",
    "specialist",
    "administrator",
    "coordinator",
    "director",
    "lead",
    "senior",
    "junior",
    "staff",
    "principal",
    "chief",
    "frontend",
    "backend",
    "full stack",
    "fullstack",
    "devops",
    "data scientist",
    "product manager",
    "project manager",
    "scrum master",
    "qa",
    "tester",
    "ui/ux",
    "graphic designer",
    "mobile developer",
    "software engineer",
];

pub const SKILLS: &[&str] = &[
    "react",
    "vue",
    "angular",
    "node",
    "python",
    "java",
    "javascript",
    "typescript",
    "aws",
    "azure",
    "gcp",
    "docker",
    "kubernetes",
    "sql",
    "nosql",
    "mongodb",
    "postgresql",
    "mysql",
    "redis",
    "graphql",
    "rest",
    "api",
    "microservices",
    "machine learning",
    "ml",
    "ai",
    "data analysis",
    "tensorflow",
    "pytorch",
    "django",
    "flask",
    "spring",
    "express",
    "next.js",
    "nextjs",
    "nest.js",
    "git",
    "ci/cd",
    "jenkins",
    "terraform",
    "ansible",
    "linux",
    "agile",
    "scrum",
];

pub const EXPERIENCE_LEVELS: &[&str] = &[
    "entry",
    "junior",
    "mid",
    "senior",
    "lead",
    "principal",
    "executive",
];

pub const JOB_TYPES: &[&str] = &[
    "full time",
    "full-time",
    "part time",
    "part-time",
    "contract",
    "freelance",
    "internship",
];

pub const STOP_WORDS: &[&str] = &[
    "looking",
    "for",
    "job",
    "jobs",
    "position",
    "positions",
    "role",
    "roles",
    "in",
    "at",
    "with",
    "and",
    "or",
    "the",
    "a",
    "an",
    "find",
    "search",
];
