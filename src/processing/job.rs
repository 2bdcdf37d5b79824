//! Job requirement records: free-text parsing and built-in samples

use crate::processing::taxonomy::SkillTaxonomy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Normalized target-role description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub title: String,
    pub required_skills: BTreeSet<String>,
    pub preferred_skills: BTreeSet<String>,
    pub min_experience_years: Option<u32>,
    pub education_requirement: Option<String>,
}

/// Ordinal degree ranking used for education alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DegreeLevel {
    Diploma,
    Bachelor,
    Master,
    Doctorate,
}

const DEGREE_KEYWORDS: &[(&str, DegreeLevel)] = &[
    ("phd", DegreeLevel::Doctorate),
    ("ph.d", DegreeLevel::Doctorate),
    ("doctorate", DegreeLevel::Doctorate),
    ("doctoral", DegreeLevel::Doctorate),
    ("master", DegreeLevel::Master),
    ("msc", DegreeLevel::Master),
    ("m.sc", DegreeLevel::Master),
    ("m.tech", DegreeLevel::Master),
    ("mba", DegreeLevel::Master),
    ("bachelor", DegreeLevel::Bachelor),
    ("bsc", DegreeLevel::Bachelor),
    ("b.sc", DegreeLevel::Bachelor),
    ("b.tech", DegreeLevel::Bachelor),
    ("b.e", DegreeLevel::Bachelor),
    ("undergraduate", DegreeLevel::Bachelor),
    ("diploma", DegreeLevel::Diploma),
    ("associate", DegreeLevel::Diploma),
];

impl DegreeLevel {
    /// Best-effort parse of a degree mention ("B.Tech in CS", "Master's")
    pub fn from_text(text: &str) -> Option<Self> {
        let lowered = text.to_lowercase();
        DEGREE_KEYWORDS
            .iter()
            .filter(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, level)| *level)
            .max()
    }
}

impl std::fmt::Display for DegreeLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegreeLevel::Diploma => write!(f, "Diploma"),
            DegreeLevel::Bachelor => write!(f, "Bachelor"),
            DegreeLevel::Master => write!(f, "Master"),
            DegreeLevel::Doctorate => write!(f, "Doctorate"),
        }
    }
}

/// Lines that introduce nice-to-have rather than required skills
fn is_preferred_line(line: &str) -> bool {
    let lowered = line.to_lowercase();
    lowered.contains("preferred")
        || lowered.contains("nice to have")
        || lowered.contains("a plus")
        || lowered.contains("bonus")
}

impl JobRequirement {
    /// Parse a free-text job description. Returns None when the text is
    /// empty or nothing recognizable can be extracted from it.
    pub fn from_text(text: &str, taxonomy: &SkillTaxonomy) -> Option<Self> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }

        let title = trimmed
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty() && !line.contains('@'))
            .unwrap_or("")
            .to_string();

        let mut required_skills = BTreeSet::new();
        let mut preferred_skills = BTreeSet::new();
        for line in trimmed.lines() {
            let found = taxonomy.known_skills_in(line);
            if is_preferred_line(line) {
                preferred_skills.extend(found);
            } else {
                required_skills.extend(found);
            }
        }
        // A skill named in both contexts counts as required.
        preferred_skills.retain(|s| !required_skills.contains(s));

        let years_re = Regex::new(r"(\d+)\s*\+?\s*years?").unwrap();
        let min_experience_years = years_re
            .captures(&trimmed.to_lowercase())
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok());

        let education_requirement = trimmed
            .lines()
            .filter_map(DegreeLevel::from_text)
            .max()
            .map(|level| level.to_string());

        if title.is_empty() && required_skills.is_empty() && preferred_skills.is_empty() {
            return None;
        }

        Some(Self {
            title,
            required_skills,
            preferred_skills,
            min_experience_years,
            education_requirement,
        })
    }

    /// Built-in sample roles selectable by name
    pub fn sample(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase().replace([' ', '_'], "-");
        Self::samples()
            .into_iter()
            .find(|job| job.title.to_lowercase().replace(' ', "-") == normalized)
    }

    pub fn sample_names() -> Vec<String> {
        Self::samples().into_iter().map(|job| job.title).collect()
    }

    pub fn samples() -> Vec<JobRequirement> {
        samples()
    }
}

fn skill_set(terms: &[&str]) -> BTreeSet<String> {
    terms.iter().map(|s| s.to_string()).collect()
}

fn samples() -> Vec<JobRequirement> {
    vec![
        JobRequirement {
            title: "Software Engineer".to_string(),
            required_skills: skill_set(&["python", "javascript", "rest api", "sql", "git", "ci/cd"]),
            preferred_skills: skill_set(&["docker", "aws"]),
            min_experience_years: Some(2),
            education_requirement: Some("Bachelor".to_string()),
        },
        JobRequirement {
            title: "Data Scientist".to_string(),
            required_skills: skill_set(&[
                "python",
                "machine learning",
                "statistics",
                "sql",
                "data visualization",
                "tensorflow",
            ]),
            preferred_skills: skill_set(&["pytorch", "airflow"]),
            min_experience_years: Some(2),
            education_requirement: Some("Master".to_string()),
        },
        JobRequirement {
            title: "Frontend Developer".to_string(),
            required_skills: skill_set(&[
                "react",
                "javascript",
                "html",
                "css",
                "responsive design",
                "git",
            ]),
            preferred_skills: skill_set(&["typescript", "web performance"]),
            min_experience_years: Some(2),
            education_requirement: Some("Bachelor".to_string()),
        },
    ]
}
