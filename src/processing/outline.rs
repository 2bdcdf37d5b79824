//! Heuristic resume outlining for offline analysis
//!
//! Splits raw resume text on section headers and emits the same loose
//! payload shape the hosted extractor returns, so both paths feed the
//! validator identically. Used by `--offline` runs and as the shape of the
//! extraction fallback.

use regex::Regex;
use serde_json::{json, Value};

const SECTION_PATTERNS: &[(&str, &[&str])] = &[
    ("summary", &["summary", "profile", "objective", "about"]),
    ("skills", &["skills", "technical skills", "core competencies", "expertise"]),
    (
        "experience",
        &["experience", "work experience", "professional experience", "employment"],
    ),
    ("education", &["education", "academic background", "qualifications"]),
    ("projects", &["projects", "portfolio", "notable projects"]),
    ("certifications", &["certifications", "certificates", "licenses"]),
];

/// Parse raw resume text into a loose payload for the validator
pub fn parse_to_payload(text: &str) -> Value {
    let sections = split_sections(text);
    let section = |name: &str| -> &str {
        sections
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, body)| body.as_str())
            .unwrap_or("")
    };

    json!({
        "email": find_email(text),
        "phone": find_phone(text),
        "summary": non_empty(section("summary").trim()),
        "skills": split_skill_terms(section("skills")),
        "education": line_list(section("education")),
        "experience": split_experience(section("experience")),
        "certifications": line_list(section("certifications")),
        "projects": line_list(section("projects")),
    })
}

fn find_email(text: &str) -> Option<String> {
    let re = Regex::new(r"[A-Za-z0-9._%+\-]+@[A-Za-z0-9.\-]+\.[A-Za-z]{2,}").unwrap();
    re.find(text).map(|m| m.as_str().to_string())
}

/// Phone numbers live in the header; scanning the whole document would trip
/// over year ranges and figures.
fn find_phone(text: &str) -> Option<String> {
    let header: String = text.lines().take(10).collect::<Vec<_>>().join("\n");
    let re = Regex::new(r"\+?\(?\d[\d().\-\s]{5,}\d").unwrap();
    let phone = re
        .find_iter(&header)
        .map(|m| m.as_str().trim().to_string())
        .find(|m| {
            let digits = m.chars().filter(|c| c.is_ascii_digit()).count();
            digits >= 7 && !looks_like_year_range(m)
        });
    phone
}

fn looks_like_year_range(text: &str) -> bool {
    Regex::new(r"(19|20)\d{2}\s*[-–]\s*(19|20)\d{2}")
        .unwrap()
        .is_match(text)
}

/// Split the document into (section name, body) pairs in document order
fn split_sections(text: &str) -> Vec<(String, String)> {
    let lines: Vec<&str> = text.lines().collect();
    let mut sections: Vec<(String, String)> = Vec::new();
    let mut current: Option<(String, Vec<&str>)> = None;

    for line in &lines {
        if let Some(name) = header_name(line) {
            if let Some((done_name, body)) = current.take() {
                sections.push((done_name, body.join("\n")));
            }
            current = Some((name.to_string(), Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line);
        }
    }
    if let Some((name, body)) = current.take() {
        sections.push((name, body.join("\n")));
    }

    sections
}

/// A line is a section header when it is essentially just the section word
fn header_name(line: &str) -> Option<&'static str> {
    let trimmed = line.trim().trim_end_matches(':').trim();
    if trimmed.is_empty() || trimmed.len() > 40 {
        return None;
    }
    let lowered = trimmed.to_lowercase();
    for (name, patterns) in SECTION_PATTERNS {
        if patterns.iter().any(|p| lowered == *p) {
            return Some(name);
        }
    }
    None
}

fn non_empty(text: &str) -> Option<String> {
    (!text.is_empty()).then(|| text.to_string())
}

fn split_skill_terms(body: &str) -> Vec<String> {
    body.split(['\n', ',', ';', '|', '/', '•'])
        .map(|term| term.trim().trim_start_matches(['-', '*']).trim())
        .filter(|term| !term.is_empty())
        .map(|term| term.to_string())
        .collect()
}

fn line_list(body: &str) -> Vec<String> {
    body.lines()
        .map(|line| line.trim().trim_start_matches(['-', '*', '•']).trim())
        .filter(|line| !line.is_empty())
        .map(|line| line.to_string())
        .collect()
}

/// Blank-line-separated blocks become experience entries. The first line of
/// a block carries title/organization, bulleted lines become bullets.
fn split_experience(body: &str) -> Vec<Value> {
    let duration_re = Regex::new(
        r"(?i)((?:19|20)\d{2})\s*(?:[-–]|to)\s*((?:19|20)\d{2}|present|current|now)",
    )
    .unwrap();

    body.split("\n\n")
        .filter_map(|block| {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();
            let (&first, rest) = lines.split_first()?;

            let (title, organization) = split_title_line(first);
            let (start, end) = block
                .lines()
                .take(2)
                .find_map(|line| duration_re.captures(line))
                .map(|c| (Some(c[1].to_string()), Some(c[2].to_string())))
                .unwrap_or((None, None));

            let bullets: Vec<String> = rest
                .iter()
                .filter(|line| !duration_re.is_match(line) || line.len() > 30)
                .map(|line| line.trim_start_matches(['-', '*', '•']).trim().to_string())
                .filter(|line| !line.is_empty())
                .collect();

            Some(json!({
                "title": title,
                "company": organization,
                "start": start,
                "end": end,
                "bullets": bullets,
            }))
        })
        .collect()
}

fn split_title_line(line: &str) -> (String, String) {
    for separator in [" | ", " at ", " @ ", ", "] {
        if let Some((title, organization)) = line.split_once(separator) {
            return (title.trim().to_string(), organization.trim().to_string());
        }
    }
    (line.trim().to_string(), String::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Jane Doe
jane.doe@example.com | (555) 123-4567

Summary:
Backend engineer with a data platform focus.

Skills:
Python, SQL, Docker, Communication

Experience:
Software Engineer | Acme Corp
2020 - Present
- Built a billing pipeline processing 2M events per day
- Reduced infrastructure spend by 30%

Education:
B.Sc. Computer Science, State University, 2018

Certifications:
- AWS Solutions Architect
";

    #[test]
    fn test_contact_extraction() {
        let payload = parse_to_payload(SAMPLE);
        assert_eq!(payload["email"], "jane.doe@example.com");
        assert_eq!(payload["phone"], "(555) 123-4567");
    }

    #[test]
    fn test_year_ranges_are_not_phones() {
        let text = "Jane Doe\n2019 - 2023 consultant work\n";
        let payload = parse_to_payload(text);
        assert_eq!(payload["phone"], Value::Null);
    }

    #[test]
    fn test_sections_split() {
        let payload = parse_to_payload(SAMPLE);
        assert!(payload["summary"].as_str().unwrap().contains("Backend engineer"));
        assert_eq!(payload["skills"].as_array().unwrap().len(), 4);
        assert_eq!(payload["certifications"][0], "AWS Solutions Architect");
    }

    #[test]
    fn test_experience_block() {
        let payload = parse_to_payload(SAMPLE);
        let entry = &payload["experience"][0];
        assert_eq!(entry["title"], "Software Engineer");
        assert_eq!(entry["company"], "Acme Corp");
        assert_eq!(entry["start"], "2020");
        assert_eq!(entry["end"], "Present");
        assert_eq!(entry["bullets"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_unstructured_text_degrades_gracefully() {
        let payload = parse_to_payload("just a wall of text without any headers");
        assert_eq!(payload["skills"].as_array().unwrap().len(), 0);
        assert_eq!(payload["experience"].as_array().unwrap().len(), 0);
    }
}
