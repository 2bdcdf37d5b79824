//! ATS readiness scoring over a candidate record alone
//!
//! Four weighted components: Structure 40%, Contact 20%, Action Verbs 20%,
//! Quantified Impact 20%. No job description involved.

use crate::error::{Result, ResumeRadarError};
use crate::processing::candidate::CandidateRecord;
use crate::processing::feedback::{self, ComponentSignal};
use crate::output::report::{ComponentScore, ReportKind, ScoreReport};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use unicode_segmentation::UnicodeSegmentation;

/// Verbs that read as strong openers for experience bullets
const ACTION_VERBS: &[&str] = &[
    "developed", "implemented", "created", "designed", "built", "achieved",
    "improved", "optimized", "led", "managed", "spearheaded", "directed",
    "launched", "automated", "increased", "reduced", "analyzed", "delivered",
    "deployed", "configured", "debugged", "architected", "scaled",
];

pub struct AtsScorer {
    action_verbs: HashSet<&'static str>,
    metric_re: Regex,
    tip_threshold: u8,
    strength_threshold: u8,
}

impl AtsScorer {
    pub fn new(tip_threshold: u8, strength_threshold: u8) -> Result<Self> {
        // A digit sequence, optionally decorated as money or a percentage.
        let metric_re = Regex::new(r"\$?\d+(\.\d+)?%?").map_err(|e| {
            ResumeRadarError::Processing(format!("failed to compile metric pattern: {}", e))
        })?;

        Ok(Self {
            action_verbs: ACTION_VERBS.iter().copied().collect(),
            metric_re,
            tip_threshold,
            strength_threshold,
        })
    }

    pub fn score(&self, candidate: &CandidateRecord) -> ScoreReport {
        let bullets: Vec<&str> = candidate.experience_bullets().collect();

        let structure = candidate.completeness_score();
        let contact = contact_score(candidate);
        let action_verbs = fraction_score(&bullets, |b| self.starts_with_action_verb(b));
        let metrics = fraction_score(&bullets, |b| self.metric_re.is_match(b));

        let overall = weighted_overall(structure, contact, action_verbs, metrics);

        let signals = [
            ComponentSignal::new("Structure", structure, missing_section_list(candidate)),
            ComponentSignal::new("Contact", contact, missing_contact_list(candidate)),
            ComponentSignal::new("Action Verbs", action_verbs, "Led, Built, Optimized"),
            ComponentSignal::new("Quantified Impact", metrics, ""),
        ];
        let feedback = feedback::compose(&signals, self.tip_threshold, self.strength_threshold);

        let missing_items: BTreeSet<String> = candidate
            .missing_sections()
            .iter()
            .map(|s| s.to_string())
            .collect();

        ScoreReport {
            kind: ReportKind::Ats,
            overall_score: overall,
            component_scores: vec![
                ComponentScore { name: "Structure".to_string(), score: structure, weight: 0.4 },
                ComponentScore { name: "Contact".to_string(), score: contact, weight: 0.2 },
                ComponentScore { name: "Action Verbs".to_string(), score: action_verbs, weight: 0.2 },
                ComponentScore { name: "Quantified Impact".to_string(), score: metrics, weight: 0.2 },
            ],
            tips: feedback.tips,
            strengths: feedback.strengths,
            matching_items: BTreeSet::new(),
            missing_items,
            suitability: None,
            insufficient_input: false,
        }
    }

    fn starts_with_action_verb(&self, bullet: &str) -> bool {
        bullet
            .unicode_words()
            .next()
            .map(|word| self.action_verbs.contains(word.to_lowercase().as_str()))
            .unwrap_or(false)
    }
}

fn contact_score(candidate: &CandidateRecord) -> u8 {
    match (&candidate.contact.email, &candidate.contact.phone) {
        (Some(_), Some(_)) => 100,
        (Some(_), None) | (None, Some(_)) => 50,
        (None, None) => 0,
    }
}

/// Fraction of bullets satisfying the predicate, scaled 0-100. Zero bullets
/// score zero, never NaN: an empty experience section is itself the signal.
fn fraction_score(bullets: &[&str], predicate: impl Fn(&str) -> bool) -> u8 {
    if bullets.is_empty() {
        return 0;
    }
    let hits = bullets.iter().filter(|b| predicate(b)).count();
    ((hits as f64 / bullets.len() as f64) * 100.0).round() as u8
}

pub(crate) fn weighted_overall(structure: u8, contact: u8, verbs: u8, metrics: u8) -> u8 {
    let weighted = 0.4 * structure as f64
        + 0.2 * contact as f64
        + 0.2 * verbs as f64
        + 0.2 * metrics as f64;
    (weighted.round() as i64).clamp(0, 100) as u8
}

fn missing_section_list(candidate: &CandidateRecord) -> String {
    candidate
        .missing_sections()
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn missing_contact_list(candidate: &CandidateRecord) -> String {
    match (&candidate.contact.email, &candidate.contact.phone) {
        (None, None) => "an email address and a phone number".to_string(),
        (None, Some(_)) => "an email address".to_string(),
        (Some(_), None) => "a phone number".to_string(),
        (Some(_), Some(_)) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::candidate::{
        ContactInfo, EducationEntry, ExperienceEntry, SkillProfile,
    };

    fn scorer() -> AtsScorer {
        AtsScorer::new(70, 90).unwrap()
    }

    fn complete_candidate() -> CandidateRecord {
        let mut skills = SkillProfile::default();
        skills.technical.insert("python".to_string());
        CandidateRecord {
            contact: ContactInfo {
                email: Some("jane@example.com".to_string()),
                phone: Some("555-123-4567".to_string()),
            },
            summary: Some("Backend engineer focused on data platforms".to_string()),
            skills,
            education: vec![EducationEntry {
                degree: "B.Sc. Computer Science".to_string(),
                institution: "State University".to_string(),
                year: Some("2018".to_string()),
            }],
            experience: vec![ExperienceEntry {
                title: "Software Engineer".to_string(),
                organization: "Acme".to_string(),
                start: Some("2020".to_string()),
                end: Some("Present".to_string()),
                bullets: vec![
                    "Built a billing pipeline processing 2M events per day".to_string(),
                    "Reduced infrastructure spend by 30%".to_string(),
                ],
            }],
            certifications: vec!["AWS Solutions Architect".to_string()],
            projects: vec!["Open source contributor".to_string()],
        }
    }

    #[test]
    fn test_perfect_resume_scores_100_everywhere() {
        let report = scorer().score(&complete_candidate());
        assert_eq!(report.component("Structure"), Some(100));
        assert_eq!(report.component("Contact"), Some(100));
        assert_eq!(report.component("Action Verbs"), Some(100));
        assert_eq!(report.component("Quantified Impact"), Some(100));
        assert_eq!(report.overall_score, 100);
        assert!(report.tips.is_empty());
        assert_eq!(report.strengths.len(), 4);
    }

    #[test]
    fn test_empty_record_scores_zero_without_panicking() {
        let report = scorer().score(&CandidateRecord::default());
        assert_eq!(report.overall_score, 0);
        assert_eq!(report.component("Action Verbs"), Some(0));
        assert_eq!(report.component("Quantified Impact"), Some(0));
        assert_eq!(report.missing_items.len(), 7);
    }

    #[test]
    fn test_overall_is_exact_weighted_sum() {
        let mut candidate = complete_candidate();
        candidate.contact.phone = None; // contact drops to 50
        candidate.experience[0].bullets = vec![
            "Built the ingestion service".to_string(),      // verb, no metric
            "Responsible for deployments since 2019".to_string(), // metric, no verb
        ];
        let report = scorer().score(&candidate);

        let structure = report.component("Structure").unwrap();
        let contact = report.component("Contact").unwrap();
        let verbs = report.component("Action Verbs").unwrap();
        let metrics = report.component("Quantified Impact").unwrap();
        assert_eq!(contact, 50);
        assert_eq!(verbs, 50);
        assert_eq!(metrics, 50);
        assert_eq!(
            report.overall_score,
            weighted_overall(structure, contact, verbs, metrics)
        );
    }

    #[test]
    fn test_metric_detection_variants() {
        let s = scorer();
        for bullet in ["Cut latency 40%", "Saved $2.5M", "Shipped 3 services"] {
            assert!(s.metric_re.is_match(bullet), "no metric found in {:?}", bullet);
        }
        assert!(!s.metric_re.is_match("Improved reliability substantially"));
    }

    #[test]
    fn test_tips_ordered_by_worst_component() {
        let candidate = CandidateRecord {
            contact: ContactInfo {
                email: Some("jane@example.com".to_string()),
                phone: None,
            },
            ..Default::default()
        };
        let report = scorer().score(&candidate);
        // Structure (14) is worse than Contact (50); verbs/metrics are 0 and lead.
        assert!(report.tips[0].starts_with("Start bullet points"));
        assert!(report.tips[1].starts_with("Quantify"));
        assert!(report.tips[2].starts_with("Add or expand"));
        assert!(report.tips[3].starts_with("Include a phone number"));
    }

    #[test]
    fn test_single_contact_field_scores_50() {
        let mut candidate = complete_candidate();
        candidate.contact.email = None;
        let report = scorer().score(&candidate);
        assert_eq!(report.component("Contact"), Some(50));
    }
}
