//! Candidate record structures

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Canonical parsed resume, immutable once produced by the validator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub contact: ContactInfo,
    pub summary: Option<String>,
    pub skills: SkillProfile,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub certifications: Vec<String>,
    pub projects: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// Skills partitioned by taxonomy category. Unknown terms are kept under
/// `other` rather than dropped. Sets are ordered so serialized reports are
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillProfile {
    pub technical: BTreeSet<String>,
    pub tools: BTreeSet<String>,
    pub soft: BTreeSet<String>,
    pub other: BTreeSet<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub institution: String,
    pub year: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub organization: String,
    pub start: Option<String>,
    pub end: Option<String>,
    pub bullets: Vec<String>,
}

/// The seven canonical resume sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Section {
    Contact,
    Summary,
    Skills,
    Education,
    Experience,
    Certifications,
    Projects,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Contact,
        Section::Summary,
        Section::Skills,
        Section::Education,
        Section::Experience,
        Section::Certifications,
        Section::Projects,
    ];
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Section::Contact => write!(f, "contact"),
            Section::Summary => write!(f, "summary"),
            Section::Skills => write!(f, "skills"),
            Section::Education => write!(f, "education"),
            Section::Experience => write!(f, "experience"),
            Section::Certifications => write!(f, "certifications"),
            Section::Projects => write!(f, "projects"),
        }
    }
}

impl SkillProfile {
    /// Union of every skill regardless of category
    pub fn all(&self) -> BTreeSet<String> {
        self.technical
            .iter()
            .chain(self.tools.iter())
            .chain(self.soft.iter())
            .chain(self.other.iter())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.technical.len() + self.tools.len() + self.soft.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl CandidateRecord {
    /// Sections with non-empty content. Computed from the fields on every
    /// call so the view can never go stale.
    pub fn sections_present(&self) -> BTreeSet<Section> {
        let mut present = BTreeSet::new();
        if self.contact.email.is_some() || self.contact.phone.is_some() {
            present.insert(Section::Contact);
        }
        if self.summary.as_ref().is_some_and(|s| !s.trim().is_empty()) {
            present.insert(Section::Summary);
        }
        if !self.skills.is_empty() {
            present.insert(Section::Skills);
        }
        if !self.education.is_empty() {
            present.insert(Section::Education);
        }
        if !self.experience.is_empty() {
            present.insert(Section::Experience);
        }
        if !self.certifications.is_empty() {
            present.insert(Section::Certifications);
        }
        if !self.projects.is_empty() {
            present.insert(Section::Projects);
        }
        present
    }

    pub fn missing_sections(&self) -> Vec<Section> {
        let present = self.sections_present();
        Section::ALL
            .iter()
            .copied()
            .filter(|s| !present.contains(s))
            .collect()
    }

    /// Fraction of the seven canonical sections present, scaled 0-100
    pub fn completeness_score(&self) -> u8 {
        let present = self.sections_present().len();
        ((present as f64 / Section::ALL.len() as f64) * 100.0).round() as u8
    }

    /// Every bullet point across all experience entries
    pub fn experience_bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullets.iter())
            .map(|b| b.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_summary_and_skills() -> CandidateRecord {
        let mut skills = SkillProfile::default();
        skills.technical.insert("python".to_string());
        CandidateRecord {
            summary: Some("Backend engineer".to_string()),
            skills,
            ..Default::default()
        }
    }

    #[test]
    fn test_sections_present_derived_from_fields() {
        let record = record_with_summary_and_skills();
        let present = record.sections_present();
        assert!(present.contains(&Section::Summary));
        assert!(present.contains(&Section::Skills));
        assert!(!present.contains(&Section::Contact));
        assert!(!present.contains(&Section::Experience));
    }

    #[test]
    fn test_whitespace_summary_counts_as_absent() {
        let record = CandidateRecord {
            summary: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!record.sections_present().contains(&Section::Summary));
    }

    #[test]
    fn test_completeness_score() {
        let empty = CandidateRecord::default();
        assert_eq!(empty.completeness_score(), 0);

        let record = record_with_summary_and_skills();
        // 2 of 7 sections
        assert_eq!(record.completeness_score(), 29);
    }

    #[test]
    fn test_missing_sections() {
        let record = record_with_summary_and_skills();
        let missing = record.missing_sections();
        assert_eq!(missing.len(), 5);
        assert!(missing.contains(&Section::Contact));
        assert!(!missing.contains(&Section::Skills));
    }
}
