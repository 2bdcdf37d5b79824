//! Candidate-versus-job fit scoring
//!
//! Four weighted components: Skill Overlap 40%, Experience Relevance 25%,
//! Education Alignment 15%, Title Fit 20%.

use crate::output::report::{ComponentScore, ReportKind, ScoreReport, Suitability};
use crate::processing::candidate::CandidateRecord;
use crate::processing::experience;
use crate::processing::feedback::{self, ComponentSignal};
use crate::processing::job::{DegreeLevel, JobRequirement};
use chrono::NaiveDate;
use std::collections::BTreeSet;
use strsim::jaro_winkler;
use unicode_segmentation::UnicodeSegmentation;

const TITLE_STOPWORDS: &[&str] = &[
    "and", "or", "of", "the", "a", "an", "for", "with", "in", "at", "to",
];

pub struct JobMatcher {
    today: NaiveDate,
    tip_threshold: u8,
    strength_threshold: u8,
    near_miss_threshold: f64,
}

impl JobMatcher {
    pub fn new(
        today: NaiveDate,
        tip_threshold: u8,
        strength_threshold: u8,
        near_miss_threshold: f64,
    ) -> Self {
        Self {
            today,
            tip_threshold,
            strength_threshold,
            near_miss_threshold,
        }
    }

    pub fn score(&self, candidate: &CandidateRecord, job: &JobRequirement) -> ScoreReport {
        let candidate_skills = candidate.skills.all();

        let skill_overlap = skill_overlap_score(&candidate_skills, job);
        let years = experience::total_years(&candidate.experience, self.today);
        let experience_relevance = experience_score(years, job.min_experience_years);
        let education_alignment = education_score(candidate, job);
        let title_fit = title_fit_score(candidate, &job.title);

        let overall = weighted_overall(
            skill_overlap,
            experience_relevance,
            education_alignment,
            title_fit,
        );

        let matching_items: BTreeSet<String> = candidate_skills
            .iter()
            .filter(|s| job.required_skills.contains(*s) || job.preferred_skills.contains(*s))
            .cloned()
            .collect();
        let missing_items: BTreeSet<String> = job
            .required_skills
            .difference(&candidate_skills)
            .cloned()
            .collect();

        let signals = [
            ComponentSignal::new(
                "Skill Overlap",
                skill_overlap,
                missing_items.iter().cloned().collect::<Vec<_>>().join(", "),
            ),
            ComponentSignal::new(
                "Experience Relevance",
                experience_relevance,
                experience_context(years, job.min_experience_years),
            ),
            ComponentSignal::new(
                "Education Alignment",
                education_alignment,
                job.education_requirement.clone().unwrap_or_default(),
            ),
            ComponentSignal::new("Title Fit", title_fit, job.title.clone()),
        ];
        let mut feedback = feedback::compose(&signals, self.tip_threshold, self.strength_threshold);
        feedback
            .tips
            .extend(self.near_miss_tips(&candidate_skills, &missing_items));

        ScoreReport {
            kind: ReportKind::JobMatch,
            overall_score: overall,
            component_scores: component_scores(
                skill_overlap,
                experience_relevance,
                education_alignment,
                title_fit,
            ),
            tips: feedback.tips,
            strengths: feedback.strengths,
            matching_items,
            missing_items,
            suitability: Some(Suitability::from_score(overall)),
            insufficient_input: false,
        }
    }

    /// Sentinel report for an empty or unparseable job description
    pub fn insufficient(&self) -> ScoreReport {
        ScoreReport {
            kind: ReportKind::JobMatch,
            overall_score: 0,
            component_scores: component_scores(0, 0, 0, 0),
            tips: vec!["Provide a job description to evaluate fit against".to_string()],
            strengths: Vec::new(),
            matching_items: BTreeSet::new(),
            missing_items: BTreeSet::new(),
            suitability: None,
            insufficient_input: true,
        }
    }

    /// Missing required skills the resume almost spells out already
    fn near_miss_tips(
        &self,
        candidate_skills: &BTreeSet<String>,
        missing: &BTreeSet<String>,
    ) -> Vec<String> {
        missing
            .iter()
            .filter_map(|wanted| {
                candidate_skills
                    .iter()
                    .filter(|have| jaro_winkler(have, wanted) >= self.near_miss_threshold)
                    .max_by(|a, b| {
                        jaro_winkler(a, wanted)
                            .partial_cmp(&jaro_winkler(b, wanted))
                            .unwrap_or(std::cmp::Ordering::Equal)
                    })
                    .map(|have| {
                        format!(
                            "'{}' on the resume is close to the required '{}'; use the job's exact wording",
                            have, wanted
                        )
                    })
            })
            .collect()
    }
}

fn component_scores(
    skill_overlap: u8,
    experience_relevance: u8,
    education_alignment: u8,
    title_fit: u8,
) -> Vec<ComponentScore> {
    vec![
        ComponentScore { name: "Skill Overlap".to_string(), score: skill_overlap, weight: 0.4 },
        ComponentScore {
            name: "Experience Relevance".to_string(),
            score: experience_relevance,
            weight: 0.25,
        },
        ComponentScore {
            name: "Education Alignment".to_string(),
            score: education_alignment,
            weight: 0.15,
        },
        ComponentScore { name: "Title Fit".to_string(), score: title_fit, weight: 0.2 },
    ]
}

/// Required-skill coverage plus a small preferred-skill bonus. The bonus is
/// capped so the component never exceeds 100.
fn skill_overlap_score(candidate_skills: &BTreeSet<String>, job: &JobRequirement) -> u8 {
    let required_hits = job
        .required_skills
        .intersection(candidate_skills)
        .count();
    let base = (required_hits as f64 / job.required_skills.len().max(1) as f64) * 100.0;

    let bonus = if job.preferred_skills.is_empty() {
        0.0
    } else {
        let preferred_hits = job.preferred_skills.intersection(candidate_skills).count();
        (preferred_hits as f64 / job.preferred_skills.len() as f64) * 15.0
    };

    ((base + bonus).round() as i64).clamp(0, 100) as u8
}

/// 100 when the requirement is met, linear down to 0 at zero years
fn experience_score(years: u32, required: Option<u32>) -> u8 {
    match required {
        None | Some(0) => 100,
        Some(required) if years >= required => 100,
        Some(required) => ((years as f64 / required as f64) * 100.0).round() as u8,
    }
}

fn experience_context(years: u32, required: Option<u32>) -> String {
    match required {
        Some(required) => format!("{} of {} required years", years, required),
        None => String::new(),
    }
}

/// Meets-or-exceeds scores full, one ordinal level below scores half
fn education_score(candidate: &CandidateRecord, job: &JobRequirement) -> u8 {
    let Some(required) = job
        .education_requirement
        .as_deref()
        .and_then(DegreeLevel::from_text)
    else {
        // Nothing rankable to hold the candidate against.
        return 100;
    };

    let best = candidate
        .education
        .iter()
        .filter_map(|entry| DegreeLevel::from_text(&entry.degree))
        .max();

    match best {
        Some(level) if level >= required => 100,
        Some(level) if required as u8 - level as u8 == 1 => 50,
        _ => 0,
    }
}

/// Token overlap between the most recent role title and the job title
fn title_fit_score(candidate: &CandidateRecord, job_title: &str) -> u8 {
    let Some(recent) = candidate.experience.first() else {
        return 0;
    };
    let job_tokens = title_tokens(job_title);
    if job_tokens.is_empty() {
        return 0;
    }
    let candidate_tokens = title_tokens(&recent.title);
    let hits = job_tokens.intersection(&candidate_tokens).count();
    ((hits as f64 / job_tokens.len() as f64) * 100.0).round() as u8
}

fn title_tokens(title: &str) -> BTreeSet<String> {
    title
        .unicode_words()
        .map(|w| w.to_lowercase())
        .filter(|w| !TITLE_STOPWORDS.contains(&w.as_str()))
        .collect()
}

fn weighted_overall(skills: u8, experience: u8, education: u8, title: u8) -> u8 {
    let weighted = 0.4 * skills as f64
        + 0.25 * experience as f64
        + 0.15 * education as f64
        + 0.2 * title as f64;
    (weighted.round() as i64).clamp(0, 100) as u8
}
