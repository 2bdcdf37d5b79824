//! Prompt construction for the extraction service

/// Target payload shape the extractor is asked to produce. Field names line
/// up with what the validator repairs, not with any wire format guarantee:
/// the service is best-effort and the validator owns the contract.
pub const TARGET_SCHEMA: &str = r#"{
    "email": string|null,
    "phone": string|null,
    "summary": string|null,
    "skills": [{"name": string, "category": "technical"|"tools"|"soft"}],
    "education": [{"degree": string|null, "institution": string|null, "year": string|null}],
    "experience": [{"title": string|null, "company": string|null, "start": string|null, "end": string|null, "bullets": [string]}],
    "certifications": [string],
    "projects": [string]
}"#;

/// Build the full extraction prompt for one resume
pub fn extraction_prompt(resume_text: &str) -> String {
    format!(
        "You are an expert resume parser. Analyze the resume below and extract:\n\
         1. Email and phone\n\
         2. Professional summary\n\
         3. Skills (categorize as technical, tools, or soft)\n\
         4. Education (degree, institution, graduation year)\n\
         5. Work experience (title, company, start, end, bullet points)\n\
         6. Certifications and courses\n\
         7. Notable projects\n\
         \n\
         Return ONLY valid JSON matching this schema (no markdown, no explanations):\n\
         {schema}\n\
         If a field is not present, use null. Do not include triple backticks or any extra text.\n\
         \n\
         RESUME:\n\
         {resume}",
        schema = TARGET_SCHEMA,
        resume = resume_text,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_schema_and_resume() {
        let prompt = extraction_prompt("Jane Doe, backend engineer");
        assert!(prompt.contains("\"skills\""));
        assert!(prompt.contains("Jane Doe, backend engineer"));
        assert!(prompt.contains("ONLY valid JSON"));
    }
}
