//! Rendering of score reports for the console and file outputs
//!
//! The core hands over pure report data; everything presentation-related
//! lives here.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScoreReport;
use crate::processing::experience::Seniority;
use colored::Colorize;

pub struct ReportFormatter {
    format: OutputFormat,
    detailed: bool,
}

impl ReportFormatter {
    pub fn new(format: OutputFormat, detailed: bool) -> Self {
        Self { format, detailed }
    }

    /// Render an ATS readiness report
    pub fn render_ats(&self, report: &ScoreReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Markdown => Ok(self.markdown(report, "ATS Readiness")),
            OutputFormat::Console => {
                let mut out = String::new();
                out.push_str(&format!(
                    "ATS Readiness: {} ({})\n",
                    paint_score(report.overall_score),
                    assessment(report.overall_score)
                ));
                self.push_components(&mut out, report);
                self.push_feedback(&mut out, report);
                if self.detailed && !report.missing_items.is_empty() {
                    out.push_str(&format!(
                        "\nMissing sections: {}\n",
                        join(&report.missing_items)
                    ));
                }
                Ok(out)
            }
        }
    }

    /// Render a job-match report, with the candidate's estimated seniority
    pub fn render_match(
        &self,
        report: &ScoreReport,
        years: u32,
        seniority: Seniority,
    ) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
            OutputFormat::Markdown => Ok(self.markdown(report, "Job Match")),
            OutputFormat::Console => {
                let mut out = String::new();
                if report.insufficient_input {
                    out.push_str(&format!("{}\n", "No usable job description provided.".red()));
                    self.push_feedback(&mut out, report);
                    return Ok(out);
                }

                out.push_str(&format!("Job Match: {}", paint_score(report.overall_score)));
                if let Some(band) = report.suitability {
                    out.push_str(&format!(" ({} - {})", band, band.guidance()));
                }
                out.push('\n');
                out.push_str(&format!(
                    "Estimated profile: {} ({} years of experience)\n",
                    seniority, years
                ));
                self.push_components(&mut out, report);

                if !report.matching_items.is_empty() {
                    out.push_str(&format!(
                        "\nMatching skills: {}\n",
                        join(&report.matching_items).green()
                    ));
                }
                if !report.missing_items.is_empty() {
                    out.push_str(&format!(
                        "Missing skills: {}\n",
                        join(&report.missing_items).red()
                    ));
                }
                self.push_feedback(&mut out, report);
                Ok(out)
            }
        }
    }

    /// Render a ranked recruiter batch
    pub fn render_batch(&self, ranked: &[(String, ScoreReport)]) -> Result<String> {
        match self.format {
            OutputFormat::Json => {
                let entries: Vec<serde_json::Value> = ranked
                    .iter()
                    .map(|(name, report)| {
                        serde_json::json!({"resume": name, "report": report})
                    })
                    .collect();
                Ok(serde_json::to_string_pretty(&entries)?)
            }
            OutputFormat::Markdown => {
                let mut out = String::from("| Rank | Resume | Score | Suitability |\n|---|---|---|---|\n");
                for (rank, (name, report)) in ranked.iter().enumerate() {
                    out.push_str(&format!(
                        "| {} | {} | {} | {} |\n",
                        rank + 1,
                        name,
                        report.overall_score,
                        suitability_label(report)
                    ));
                }
                Ok(out)
            }
            OutputFormat::Console => {
                let mut out = String::new();
                out.push_str(&format!(
                    "{:<5} {:<40} {:<7} {}\n",
                    "Rank", "Resume", "Score", "Suitability"
                ));
                out.push_str(&"-".repeat(72));
                out.push('\n');
                for (rank, (name, report)) in ranked.iter().enumerate() {
                    out.push_str(&format!(
                        "{:<5} {:<40} {:<7} {}\n",
                        rank + 1,
                        truncate(name, 40),
                        paint_score(report.overall_score),
                        suitability_label(report)
                    ));
                }
                Ok(out)
            }
        }
    }

    fn push_components(&self, out: &mut String, report: &ScoreReport) {
        out.push_str("\nComponents:\n");
        for component in &report.component_scores {
            out.push_str(&format!(
                "  {:<22} {:>3}/100  (weight {:.0}%)\n",
                component.name,
                component.score,
                component.weight * 100.0
            ));
        }
    }

    fn push_feedback(&self, out: &mut String, report: &ScoreReport) {
        if !report.strengths.is_empty() {
            out.push_str(&format!("\n{}\n", "Strengths:".green().bold()));
            for strength in &report.strengths {
                out.push_str(&format!("  + {}\n", strength));
            }
        }
        if !report.tips.is_empty() {
            out.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for (i, tip) in report.tips.iter().enumerate() {
                out.push_str(&format!("  {}. {}\n", i + 1, tip));
            }
        }
    }

    fn markdown(&self, report: &ScoreReport, heading: &str) -> String {
        let mut out = format!("# {}: {}/100\n\n", heading, report.overall_score);
        if let Some(band) = report.suitability {
            out.push_str(&format!("**{}** - {}\n\n", band, band.guidance()));
        }
        out.push_str("| Component | Score | Weight |\n|---|---|---|\n");
        for component in &report.component_scores {
            out.push_str(&format!(
                "| {} | {} | {:.0}% |\n",
                component.name,
                component.score,
                component.weight * 100.0
            ));
        }
        if !report.matching_items.is_empty() {
            out.push_str(&format!("\nMatching: {}\n", join(&report.matching_items)));
        }
        if !report.missing_items.is_empty() {
            out.push_str(&format!("\nMissing: {}\n", join(&report.missing_items)));
        }
        if !report.tips.is_empty() {
            out.push_str("\n## Suggestions\n\n");
            for tip in &report.tips {
                out.push_str(&format!("- {}\n", tip));
            }
        }
        if !report.strengths.is_empty() {
            out.push_str("\n## Strengths\n\n");
            for strength in &report.strengths {
                out.push_str(&format!("- {}\n", strength));
            }
        }
        out
    }
}

fn suitability_label(report: &ScoreReport) -> String {
    match report.suitability {
        Some(band) => band.to_string(),
        None if report.insufficient_input => "Insufficient input".to_string(),
        None => String::new(),
    }
}

fn assessment(score: u8) -> &'static str {
    match score {
        80..=100 => "Excellent",
        60..=79 => "Good",
        40..=59 => "Fair",
        _ => "Needs Improvement",
    }
}

fn paint_score(score: u8) -> String {
    let text = format!("{}/100", score);
    match score {
        80..=100 => text.green().bold().to_string(),
        60..=79 => text.yellow().to_string(),
        40..=59 => text.yellow().to_string(),
        _ => text.red().to_string(),
    }
}

fn join(items: &std::collections::BTreeSet<String>) -> String {
    items.iter().cloned().collect::<Vec<_>>().join(", ")
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{}...", cut)
    }
}
