//! Candidate record validation and repair
//!
//! The extraction service returns a best-effort payload: fields may be
//! missing, null, mistyped, or carry extra keys. Everything here degrades to
//! a type-appropriate default instead of failing, so downstream scoring is
//! always callable.

use crate::processing::candidate::{
    CandidateRecord, ContactInfo, EducationEntry, ExperienceEntry, SkillProfile,
};
use crate::processing::taxonomy::{normalize_skill, SkillCategory, SkillTaxonomy};
use serde_json::Value;
use std::collections::BTreeSet;

/// Build a well-formed candidate record from a loosely-typed payload
pub fn validate(payload: &Value, taxonomy: &SkillTaxonomy) -> CandidateRecord {
    let Some(obj) = payload.as_object() else {
        // Not a structured object at all: maximally-empty record.
        return CandidateRecord::default();
    };

    let contact_obj = obj.get("contact").and_then(Value::as_object);
    let field = |name: &str| {
        contact_obj
            .and_then(|c| c.get(name))
            .or_else(|| obj.get(name))
    };

    let contact = ContactInfo {
        email: field("email").and_then(coerce_string).filter(|e| is_valid_email(e)),
        phone: field("phone").and_then(coerce_string).filter(|p| is_valid_phone(p)),
    };

    CandidateRecord {
        contact,
        summary: obj.get("summary").and_then(coerce_string),
        skills: collect_skills(obj.get("skills"), taxonomy),
        education: collect_education(obj.get("education")),
        experience: collect_experience(obj.get("experience")),
        certifications: coerce_string_list(obj.get("certifications")),
        projects: coerce_string_list(obj.get("projects")),
    }
}

fn is_valid_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && !domain.is_empty() && !domain.contains(char::is_whitespace)
        }
        None => false,
    }
}

fn is_valid_phone(phone: &str) -> bool {
    phone.chars().filter(|c| c.is_ascii_digit()).count() >= 7
}

/// Trimmed non-empty string, or None. Numbers are stringified so a year
/// emitted as `2024` survives.
fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        }
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn coerce_string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(o) => o.get("name").and_then(coerce_string),
                other => coerce_string(other),
            })
            .collect(),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Vec::new()
            } else {
                vec![trimmed.to_string()]
            }
        }
        _ => Vec::new(),
    }
}

fn collect_skills(value: Option<&Value>, taxonomy: &SkillTaxonomy) -> SkillProfile {
    let raw_terms: Vec<String> = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(o) => o.get("name").and_then(coerce_string),
                other => coerce_string(other),
            })
            .collect(),
        // A single comma-separated string is a common extractor shortcut.
        Some(Value::String(s)) => s.split(',').map(|part| part.to_string()).collect(),
        _ => Vec::new(),
    };

    let mut seen: BTreeSet<String> = BTreeSet::new();
    let mut profile = SkillProfile::default();
    for term in raw_terms {
        let normalized = normalize_skill(&term);
        if normalized.is_empty() || !seen.insert(normalized.clone()) {
            continue;
        }
        let bucket = match taxonomy.categorize(&normalized) {
            SkillCategory::Technical => &mut profile.technical,
            SkillCategory::Tools => &mut profile.tools,
            SkillCategory::Soft => &mut profile.soft,
            SkillCategory::Other => &mut profile.other,
        };
        bucket.insert(normalized);
    }
    profile
}

fn collect_education(value: Option<&Value>) -> Vec<EducationEntry> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let entry = match item {
                Value::Object(o) => EducationEntry {
                    degree: o.get("degree").and_then(coerce_string).unwrap_or_default(),
                    institution: o
                        .get("institution")
                        .or_else(|| o.get("school"))
                        .and_then(coerce_string)
                        .unwrap_or_default(),
                    year: o
                        .get("year")
                        .or_else(|| o.get("graduation_year"))
                        .and_then(coerce_string),
                },
                // A bare string reads as a degree line.
                other => EducationEntry {
                    degree: coerce_string(other)?,
                    institution: String::new(),
                    year: None,
                },
            };
            (!entry.degree.is_empty() || !entry.institution.is_empty()).then_some(entry)
        })
        .collect()
}

fn collect_experience(value: Option<&Value>) -> Vec<ExperienceEntry> {
    let Some(Value::Array(items)) = value else {
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let o = item.as_object()?;
            let (start, end) = match (
                o.get("start").and_then(coerce_string),
                o.get("end").and_then(coerce_string),
            ) {
                (None, None) => split_duration(o.get("duration").and_then(coerce_string)),
                explicit => explicit,
            };

            let bullets = match o.get("bullets") {
                Some(Value::Array(_)) => coerce_string_list(o.get("bullets")),
                _ => split_description(o.get("description").and_then(coerce_string)),
            };

            let entry = ExperienceEntry {
                title: o.get("title").and_then(coerce_string).unwrap_or_default(),
                organization: o
                    .get("organization")
                    .or_else(|| o.get("company"))
                    .and_then(coerce_string)
                    .unwrap_or_default(),
                start,
                end,
                bullets,
            };
            (!entry.title.is_empty() || !entry.organization.is_empty() || !entry.bullets.is_empty())
                .then_some(entry)
        })
        .collect()
}

/// "Jan 2020 - Present" style duration strings become start/end endpoints
fn split_duration(duration: Option<String>) -> (Option<String>, Option<String>) {
    let Some(duration) = duration else {
        return (None, None);
    };
    for separator in [" - ", " to ", "-"] {
        if let Some((start, end)) = duration.split_once(separator) {
            let start = start.trim();
            let end = end.trim();
            // Bare "2020-2023" splits on '-' only when both halves look like dates.
            if !start.is_empty() && !end.is_empty() {
                return (Some(start.to_string()), Some(end.to_string()));
            }
        }
    }
    (Some(duration), None)
}

/// Prose descriptions become bullet points, one per line, markers stripped
fn split_description(description: Option<String>) -> Vec<String> {
    let Some(description) = description else {
        return Vec::new();
    };
    description
        .lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}
