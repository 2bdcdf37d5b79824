//! Resume radar: ATS readiness scoring and job-fit matching for resumes

use chrono::Utc;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, warn};
use resume_radar::cli::{self, Cli, Commands, ConfigAction};
use resume_radar::config::Config;
use resume_radar::error::{Result, ResumeRadarError};
use resume_radar::extraction::{CandidateExtractor, HostedExtractor};
use resume_radar::input::InputManager;
use resume_radar::output::report::{self, ScoreReport};
use resume_radar::output::ReportFormatter;
use resume_radar::processing::ats_scorer::AtsScorer;
use resume_radar::processing::candidate::CandidateRecord;
use resume_radar::processing::experience;
use resume_radar::processing::job::JobRequirement;
use resume_radar::processing::job_matcher::JobMatcher;
use resume_radar::processing::taxonomy::SkillTaxonomy;
use resume_radar::processing::{outline, validator};
use serde_json::Value;
use std::path::Path;
use std::process;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Ats {
            resume,
            offline,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(ResumeRadarError::InvalidInput)?;
            let format = cli::parse_output_format(&output).map_err(ResumeRadarError::InvalidInput)?;

            let taxonomy = SkillTaxonomy::new()?;
            // The extractor is constructed first so a missing API key fails
            // before any resume content is read.
            let extractor = build_extractor(offline, &config)?;
            let candidate = load_candidate(&resume, extractor.as_ref(), &taxonomy).await?;

            let scorer = AtsScorer::new(
                config.scoring.tip_threshold,
                config.scoring.strength_threshold,
            )?;
            let report = scorer.score(&candidate);

            let formatter = ReportFormatter::new(format, detailed || config.output.detailed);
            emit(&formatter.render_ats(&report)?, save.as_deref())?;
        }

        Commands::Match {
            resume,
            job,
            sample,
            offline,
            output,
            save,
            detailed,
        } => {
            cli::validate_file_extension(&resume, &["pdf", "txt", "md"])
                .map_err(ResumeRadarError::InvalidInput)?;
            let format = cli::parse_output_format(&output).map_err(ResumeRadarError::InvalidInput)?;

            let taxonomy = SkillTaxonomy::new()?;
            let extractor = build_extractor(offline, &config)?;
            let job_requirement = resolve_job(job.as_deref(), sample.as_deref(), &taxonomy).await?;
            let candidate = load_candidate(&resume, extractor.as_ref(), &taxonomy).await?;

            let today = Utc::now().date_naive();
            let matcher = JobMatcher::new(
                today,
                config.scoring.tip_threshold,
                config.scoring.strength_threshold,
                config.scoring.near_miss_threshold,
            );
            let report = match &job_requirement {
                Some(job) => matcher.score(&candidate, job),
                None => matcher.insufficient(),
            };

            let years = experience::total_years(&candidate.experience, today);
            let title = candidate
                .experience
                .first()
                .map(|e| e.title.as_str())
                .unwrap_or("");
            let seniority = experience::estimate_seniority(title, years);

            let formatter = ReportFormatter::new(format, detailed || config.output.detailed);
            emit(&formatter.render_match(&report, years, seniority)?, save.as_deref())?;
        }

        Commands::Batch {
            job,
            resumes,
            offline,
            output,
        } => {
            cli::validate_file_extension(&job, &["txt", "md"])
                .map_err(ResumeRadarError::InvalidInput)?;
            let format = cli::parse_output_format(&output).map_err(ResumeRadarError::InvalidInput)?;

            let taxonomy = SkillTaxonomy::new()?;
            let extractor = build_extractor(offline, &config)?;

            let job_text = InputManager::new().extract_text(&job).await?;
            let Some(job_requirement) = JobRequirement::from_text(&job_text, &taxonomy) else {
                return Err(ResumeRadarError::InvalidInput(
                    "job description is empty or unparseable".to_string(),
                ));
            };

            let today = Utc::now().date_naive();
            let matcher = JobMatcher::new(
                today,
                config.scoring.tip_threshold,
                config.scoring.strength_threshold,
                config.scoring.near_miss_threshold,
            );

            let progress = ProgressBar::new(resumes.len() as u64);
            progress.set_style(
                ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                    .unwrap_or_else(|_| ProgressStyle::default_bar()),
            );

            let mut results: Vec<(String, ScoreReport)> = Vec::new();
            for path in &resumes {
                let label = path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.display().to_string());
                progress.set_message(label.clone());

                match load_candidate(path, extractor.as_ref(), &taxonomy).await {
                    Ok(candidate) => {
                        results.push((label, matcher.score(&candidate, &job_requirement)));
                    }
                    Err(e) => warn!("Skipping {}: {}", path.display(), e),
                }
                progress.inc(1);
            }
            progress.finish_and_clear();

            report::rank_by_score(&mut results);

            let formatter = ReportFormatter::new(format, false);
            emit(&formatter.render_batch(&results)?, None)?;
        }

        Commands::Samples => {
            println!("Available sample jobs:\n");
            for job in JobRequirement::samples() {
                let required: Vec<String> = job.required_skills.iter().cloned().collect();
                println!("  {} (required: {})", job.title, required.join(", "));
            }
            println!("\nUse with: resume-radar match --resume <file> --sample <name>");
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Current configuration\n");
                println!("Extraction endpoint: {}", config.extraction.endpoint);
                println!("Extraction model: {}", config.extraction.model);
                println!("API key variable: {}", config.extraction.api_key_env);
                println!("Request timeout: {}s", config.extraction.timeout_secs);
                println!("\nScoring thresholds:");
                println!("  Tips below: {}", config.scoring.tip_threshold);
                println!("  Strengths at: {}", config.scoring.strength_threshold);
            }
            Some(ConfigAction::Reset) => {
                let default_config = Config::default();
                default_config.save()?;
                println!("Configuration reset to defaults");
            }
        },
    }

    Ok(())
}

fn build_extractor(offline: bool, config: &Config) -> Result<Option<HostedExtractor>> {
    if offline {
        Ok(None)
    } else {
        HostedExtractor::new(&config.extraction).map(Some)
    }
}

/// Extract text from the resume file and run it through the extraction
/// service or the offline outline parser, then the validator. Extraction
/// failures degrade to an empty payload rather than aborting the analysis.
async fn load_candidate(
    path: &Path,
    extractor: Option<&HostedExtractor>,
    taxonomy: &SkillTaxonomy,
) -> Result<CandidateRecord> {
    let text = InputManager::new().extract_text(path).await?;

    let payload = match extractor {
        Some(extractor) => match extractor.extract(&text).await {
            Ok(payload) => payload,
            Err(e) => {
                warn!(
                    "Extraction failed for {} ({}); continuing with an empty record",
                    path.display(),
                    e
                );
                Value::Null
            }
        },
        None => outline::parse_to_payload(&text),
    };

    Ok(validator::validate(&payload, taxonomy))
}

async fn resolve_job(
    job: Option<&Path>,
    sample: Option<&str>,
    taxonomy: &SkillTaxonomy,
) -> Result<Option<JobRequirement>> {
    match (job, sample) {
        (Some(path), _) => {
            cli::validate_file_extension(path, &["txt", "md"])
                .map_err(ResumeRadarError::InvalidInput)?;
            let text = match InputManager::new().extract_text(path).await {
                Ok(text) => text,
                // An empty job file is insufficient input, not a hard failure.
                Err(ResumeRadarError::InvalidInput(_)) if path.exists() => String::new(),
                Err(e) => return Err(e),
            };
            // None here means the matcher reports insufficient input.
            Ok(JobRequirement::from_text(&text, taxonomy))
        }
        (None, Some(name)) => JobRequirement::sample(name).map(Some).ok_or_else(|| {
            ResumeRadarError::InvalidInput(format!(
                "unknown sample job '{}'; available: {}",
                name,
                JobRequirement::sample_names().join(", ")
            ))
        }),
        (None, None) => Err(ResumeRadarError::InvalidInput(
            "provide --job <file> or --sample <name>".to_string(),
        )),
    }
}

fn emit(rendered: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            std::fs::write(path, rendered)?;
            println!("Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }
    Ok(())
}
