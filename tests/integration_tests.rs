//! Integration tests for resume radar

use chrono::NaiveDate;
use resume_radar::extraction::{CandidateExtractor, StubExtractor};
use resume_radar::input::InputManager;
use resume_radar::output::report::{self, Suitability};
use resume_radar::processing::ats_scorer::AtsScorer;
use resume_radar::processing::job::JobRequirement;
use resume_radar::processing::job_matcher::JobMatcher;
use resume_radar::processing::taxonomy::SkillTaxonomy;
use resume_radar::processing::{outline, validator};
use serde_json::json;
use std::path::Path;

fn pinned_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Python"));
    assert!(text.contains("Software Engineer"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let manager = InputManager::new();
    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.md"))
        .await
        .unwrap();

    assert!(text.contains("Jane Doe"));
    assert!(text.contains("Software Engineer"));
    // Markdown syntax must not leak through
    assert!(!text.contains("##"));
    assert!(!text.contains("**"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.xyz");
    std::fs::write(&path, "some text").unwrap();

    let manager = InputManager::new();
    assert!(manager.extract_text(&path).await.is_err());
}

#[tokio::test]
async fn test_nonexistent_file() {
    let manager = InputManager::new();
    let result = manager
        .extract_text(Path::new("tests/fixtures/nonexistent.txt"))
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_offline_pipeline_end_to_end() {
    let taxonomy = SkillTaxonomy::new().unwrap();
    let manager = InputManager::new();

    let text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let payload = outline::parse_to_payload(&text);
    let candidate = validator::validate(&payload, &taxonomy);

    assert_eq!(candidate.contact.email.as_deref(), Some("jane.doe@example.com"));
    assert!(candidate.skills.technical.contains("python"));
    assert!(candidate.skills.tools.contains("docker"));
    assert_eq!(candidate.experience.len(), 2);

    // 6 of 7 sections present (no projects)
    let scorer = AtsScorer::new(70, 90).unwrap();
    let ats = scorer.score(&candidate);
    assert_eq!(ats.component("Structure"), Some(86));
    assert_eq!(ats.component("Contact"), Some(100));
    // Every bullet opens with an action verb and carries a metric
    assert_eq!(ats.component("Action Verbs"), Some(100));
    assert_eq!(ats.component("Quantified Impact"), Some(100));
    assert_eq!(ats.overall_score, 94);
}

#[tokio::test]
async fn test_match_against_job_file() {
    let taxonomy = SkillTaxonomy::new().unwrap();
    let manager = InputManager::new();

    let resume_text = manager
        .extract_text(Path::new("tests/fixtures/sample_resume.txt"))
        .await
        .unwrap();
    let candidate = validator::validate(&outline::parse_to_payload(&resume_text), &taxonomy);

    let job_text = manager
        .extract_text(Path::new("tests/fixtures/sample_job.txt"))
        .await
        .unwrap();
    let job = JobRequirement::from_text(&job_text, &taxonomy).unwrap();
    assert_eq!(job.title, "Backend Engineer");
    assert_eq!(job.min_experience_years, Some(3));

    let matcher = JobMatcher::new(pinned_today(), 70, 90, 0.88);
    let report = matcher.score(&candidate, &job);

    // Candidate has python, sql, docker of the required set
    assert!(report.matching_items.contains("python"));
    assert!(report.missing_items.contains("postgresql"));
    assert!(report.matching_items.is_disjoint(&report.missing_items));
    // 8 total years against a 3 year requirement
    assert_eq!(report.component("Experience Relevance"), Some(100));
    assert_eq!(report.component("Education Alignment"), Some(100));
    assert!(!report.insufficient_input);
}

#[tokio::test]
async fn test_stub_extraction_feeds_validator_repair() {
    let taxonomy = SkillTaxonomy::new().unwrap();
    let stub = StubExtractor::new(json!({
        "contact": {"email": "jane@site.io", "phone": "5551234567"},
        "skills": ["Python", "PYTHON ", {"name": "Docker"}, null],
        "experience": [{
            "title": "Engineer",
            "company": "Initech",
            "duration": "2019 - Present",
            "description": "Led rollout of 3 internal services"
        }],
        "education": "not-a-list"
    }));

    let payload = stub.extract("raw resume text").await.unwrap();
    let candidate = validator::validate(&payload, &taxonomy);

    assert_eq!(candidate.skills.len(), 2);
    assert!(candidate.skills.technical.contains("python"));
    assert!(candidate.education.is_empty());

    let entry = &candidate.experience[0];
    assert_eq!(entry.start.as_deref(), Some("2019"));
    assert_eq!(entry.bullets, vec!["Led rollout of 3 internal services"]);

    // The repaired record scores without errors
    let scorer = AtsScorer::new(70, 90).unwrap();
    let ats = scorer.score(&candidate);
    assert_eq!(ats.component("Action Verbs"), Some(100));
    assert_eq!(ats.component("Quantified Impact"), Some(100));
}

#[test]
fn test_extraction_failure_degrades_to_empty_record() {
    let taxonomy = SkillTaxonomy::new().unwrap();
    // The fallback path validates a null payload
    let candidate = validator::validate(&serde_json::Value::Null, &taxonomy);
    assert_eq!(candidate.completeness_score(), 0);

    let scorer = AtsScorer::new(70, 90).unwrap();
    let ats = scorer.score(&candidate);
    assert_eq!(ats.overall_score, 0);
    assert!(!ats.tips.is_empty());
}

#[test]
fn test_batch_ranking_is_stable_by_input_order() {
    let taxonomy = SkillTaxonomy::new().unwrap();
    let matcher = JobMatcher::new(pinned_today(), 70, 90, 0.88);
    let job = JobRequirement::sample("software-engineer").unwrap();

    let candidate_for = |skills: &[&str]| {
        validator::validate(&json!({ "skills": skills }), &taxonomy)
    };

    let mut results = vec![
        ("weak.txt".to_string(), matcher.score(&candidate_for(&[]), &job)),
        (
            "strong.txt".to_string(),
            matcher.score(
                &candidate_for(&["python", "javascript", "rest api", "sql", "git", "ci/cd"]),
                &job,
            ),
        ),
        ("tie-a.txt".to_string(), matcher.score(&candidate_for(&["python"]), &job)),
        ("tie-b.txt".to_string(), matcher.score(&candidate_for(&["sql"]), &job)),
    ];

    report::rank_by_score(&mut results);
    let order: Vec<&str> = results.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(order, vec!["strong.txt", "tie-a.txt", "tie-b.txt", "weak.txt"]);
}

#[test]
fn test_empty_job_text_yields_insufficient_report() {
    let taxonomy = SkillTaxonomy::new().unwrap();
    assert!(JobRequirement::from_text("", &taxonomy).is_none());

    let matcher = JobMatcher::new(pinned_today(), 70, 90, 0.88);
    let report = matcher.insufficient();
    assert_eq!(report.overall_score, 0);
    assert!(report.insufficient_input);
    assert_eq!(report.tips.len(), 1);
    assert_eq!(report.suitability, None);
}

#[test]
fn test_suitability_band_for_strong_profile() {
    let taxonomy = SkillTaxonomy::new().unwrap();
    let matcher = JobMatcher::new(pinned_today(), 70, 90, 0.88);
    let job = JobRequirement::sample("software-engineer").unwrap();

    let candidate = validator::validate(
        &json!({
            "skills": ["python", "javascript", "rest api", "sql", "git", "ci/cd", "docker", "aws"],
            "experience": [{
                "title": "Software Engineer",
                "company": "Acme",
                "start": "2019",
                "end": "Present",
                "bullets": ["Built services"]
            }],
            "education": [{"degree": "Bachelor of Science", "institution": "State"}]
        }),
        &taxonomy,
    );

    let report = matcher.score(&candidate, &job);
    assert_eq!(report.component("Skill Overlap"), Some(100));
    assert_eq!(report.component("Title Fit"), Some(100));
    assert_eq!(report.suitability, Some(Suitability::Strong));
}
