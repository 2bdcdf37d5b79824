//! Static skill taxonomy for normalizing free-text skill mentions

use crate::error::{Result, ResumeRadarError};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use unicode_segmentation::UnicodeSegmentation;

/// Category a skill term resolves to after lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Tools,
    Soft,
    Other,
}

impl std::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillCategory::Technical => write!(f, "technical"),
            SkillCategory::Tools => write!(f, "tools"),
            SkillCategory::Soft => write!(f, "soft"),
            SkillCategory::Other => write!(f, "other"),
        }
    }
}

const TECHNICAL_SKILLS: &[&str] = &[
    // Languages
    "python", "java", "javascript", "typescript", "rust", "go", "c", "c++", "c#",
    "ruby", "php", "swift", "kotlin", "scala", "r", "sql", "html", "css", "bash",
    // Frameworks and runtimes
    "react", "vue", "angular", "svelte", "node.js", "express", "django", "flask",
    "fastapi", "spring", "rails", "next.js", "asp.net",
    // Data and ML
    "machine learning", "deep learning", "tensorflow", "pytorch", "scikit-learn",
    "pandas", "numpy", "statistics", "data visualization", "nlp",
    // Architecture and web
    "rest api", "graphql", "grpc", "microservices", "responsive design",
    "web performance", "ci/cd", "tdd",
];

const TOOL_SKILLS: &[&str] = &[
    // Version control and workflow
    "git", "github", "gitlab", "jira", "confluence", "slack", "postman",
    // Infrastructure and platforms
    "docker", "kubernetes", "jenkins", "terraform", "ansible", "aws", "azure",
    "gcp", "heroku", "linux", "nginx", "prometheus", "grafana", "kafka", "airflow",
    // Databases
    "postgresql", "mysql", "mongodb", "redis", "elasticsearch", "sqlite",
    "dynamodb", "cassandra",
    // Desktop tooling
    "excel", "tableau", "power bi", "figma", "vscode", "intellij",
];

const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "collaboration", "problem solving",
    "critical thinking", "creativity", "adaptability", "time management",
    "project management", "mentoring", "presentation", "negotiation",
    "attention to detail", "customer service", "analytical thinking",
];

/// Categorized vocabulary of canonical skill terms.
///
/// Built once at startup from the static tables above (plus any caller
/// additions) and shared read-only afterwards. Lookup is exact first, then
/// case-insensitive substring containment for terms long enough to be
/// unambiguous.
pub struct SkillTaxonomy {
    exact: HashMap<String, SkillCategory>,
    matcher: AhoCorasick,
    patterns: Vec<String>,
    pattern_categories: Vec<SkillCategory>,
}

impl SkillTaxonomy {
    /// Create a taxonomy from the built-in tables
    pub fn new() -> Result<Self> {
        Self::with_additional(&[])
    }

    /// Create a taxonomy with extra canonical terms merged in
    pub fn with_additional(extra: &[(SkillCategory, Vec<String>)]) -> Result<Self> {
        let mut exact = HashMap::new();
        let mut insert_all = |terms: Vec<String>, category: SkillCategory| {
            for term in terms {
                let normalized = normalize_skill(&term);
                if !normalized.is_empty() {
                    exact.entry(normalized).or_insert(category);
                }
            }
        };

        insert_all(TECHNICAL_SKILLS.iter().map(|s| s.to_string()).collect(), SkillCategory::Technical);
        insert_all(TOOL_SKILLS.iter().map(|s| s.to_string()).collect(), SkillCategory::Tools);
        insert_all(SOFT_SKILLS.iter().map(|s| s.to_string()).collect(), SkillCategory::Soft);
        for (category, terms) in extra {
            insert_all(terms.clone(), *category);
        }

        // Substring matching only considers terms of 3+ characters; shorter
        // ones ("r", "go", "c#") would match inside unrelated words and are
        // handled by the exact path.
        let mut entries: Vec<(String, SkillCategory)> = exact
            .iter()
            .filter(|(term, _)| term.len() >= 3)
            .map(|(term, category)| (term.clone(), *category))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));

        let patterns: Vec<String> = entries.iter().map(|(term, _)| term.clone()).collect();
        let pattern_categories: Vec<SkillCategory> =
            entries.iter().map(|(_, category)| *category).collect();

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .match_kind(aho_corasick::MatchKind::LeftmostLongest)
            .build(&patterns)
            .map_err(|e| {
                ResumeRadarError::Processing(format!("failed to build skill matcher: {}", e))
            })?;

        Ok(Self {
            exact,
            matcher,
            patterns,
            pattern_categories,
        })
    }

    /// Resolve a raw skill mention to its category
    pub fn categorize(&self, raw: &str) -> SkillCategory {
        let normalized = normalize_skill(raw);
        if normalized.is_empty() {
            return SkillCategory::Other;
        }
        if let Some(category) = self.exact.get(&normalized) {
            return *category;
        }

        // Substring containment: "python 3" or "advanced sql" still resolve.
        self.matcher
            .find_iter(&normalized)
            .find(|m| is_word_bounded(&normalized, m.start(), m.end()))
            .map(|m| self.pattern_categories[m.pattern().as_usize()])
            .unwrap_or(SkillCategory::Other)
    }

    /// Scan arbitrary text and collect every canonical term it mentions
    pub fn known_skills_in(&self, text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        let mut found: BTreeSet<String> = self
            .matcher
            .find_iter(&lowered)
            .filter(|m| is_word_bounded(&lowered, m.start(), m.end()))
            .map(|m| self.patterns[m.pattern().as_usize()].clone())
            .collect();

        // Short canonical terms are only found as standalone tokens.
        for word in lowered.unicode_words() {
            if word.len() < 3 && self.exact.contains_key(word) {
                found.insert(word.to_string());
            }
        }

        found
    }

    /// Number of canonical terms known to the taxonomy
    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }
}

/// Canonical form used for all skill comparisons: lowercase, trimmed,
/// inner whitespace collapsed.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(|c| c.is_alphanumeric()) && !after.is_some_and(|c| c.is_alphanumeric())
}
