//! Score report value objects consumed by the presentation layer

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportKind {
    Ats,
    JobMatch,
}

/// One weighted sub-score. Weights across a report sum to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentScore {
    pub name: String,
    pub score: u8,
    pub weight: f32,
}

/// Output of either scorer: pure data, no timestamps, deterministic field
/// ordering, so identical inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub kind: ReportKind,
    pub overall_score: u8,
    pub component_scores: Vec<ComponentScore>,
    pub tips: Vec<String>,
    pub strengths: Vec<String>,
    pub matching_items: BTreeSet<String>,
    pub missing_items: BTreeSet<String>,
    pub suitability: Option<Suitability>,
    /// Set when the job input was empty or unparseable; distinguishes the
    /// all-zero report from a genuine zero-overlap match.
    pub insufficient_input: bool,
}

impl ScoreReport {
    pub fn component(&self, name: &str) -> Option<u8> {
        self.component_scores
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.score)
    }
}

/// Discretized band of a job-match overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Suitability {
    Strong,
    Good,
    Moderate,
    Weak,
}

impl Suitability {
    /// Cutpoints: >= 80 Strong, 60-79 Good, 40-59 Moderate, < 40 Weak
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => Suitability::Strong,
            60..=79 => Suitability::Good,
            40..=59 => Suitability::Moderate,
            _ => Suitability::Weak,
        }
    }

    pub fn guidance(&self) -> &'static str {
        match self {
            Suitability::Strong => "strong candidate for this role",
            Suitability::Good => "worth applying; address the listed gaps",
            Suitability::Moderate => "significant gaps to close before applying",
            Suitability::Weak => "this role likely needs a different profile",
        }
    }
}

impl std::fmt::Display for Suitability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Suitability::Strong => write!(f, "Strong Match"),
            Suitability::Good => write!(f, "Good Match"),
            Suitability::Moderate => write!(f, "Moderate Match"),
            Suitability::Weak => write!(f, "Weak Match"),
        }
    }
}

/// Rank a batch for display: overall score descending, stable so ties keep
/// their input order.
pub fn rank_by_score<T>(items: &mut [(T, ScoreReport)]) {
    items.sort_by(|a, b| b.1.overall_score.cmp(&a.1.overall_score));
}
