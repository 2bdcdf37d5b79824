//! Extraction service clients
//!
//! The service returns a best-effort structured payload for a resume; the
//! validator repairs whatever comes back. Everything here is behind the
//! `CandidateExtractor` capability so tests swap in a deterministic stub.

use crate::config::ExtractionConfig;
use crate::error::{Result, ResumeRadarError};
use crate::extraction::prompts;
use serde_json::{json, Value};
use std::time::Duration;

pub trait CandidateExtractor {
    fn extract(&self, resume_text: &str)
        -> impl std::future::Future<Output = Result<Value>> + Send;
}

/// Client for a hosted generateContent-style extraction endpoint
pub struct HostedExtractor {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl HostedExtractor {
    pub fn new(config: &ExtractionConfig) -> Result<Self> {
        let api_key = config.api_key()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key,
        })
    }
}

impl CandidateExtractor for HostedExtractor {
    async fn extract(&self, resume_text: &str) -> Result<Value> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        let body = json!({
            "contents": [{"parts": [{"text": prompts::extraction_prompt(resume_text)}]}],
            "generationConfig": {"response_mime_type": "application/json"}
        });

        let response = self.client.post(&url).json(&body).send().await?;
        if !response.status().is_success() {
            return Err(ResumeRadarError::Extraction(format!(
                "extraction service returned {}",
                response.status()
            )));
        }

        let envelope: Value = response.json().await?;
        let text = envelope["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| {
                ResumeRadarError::Extraction("extraction response carried no content".to_string())
            })?;

        parse_payload_text(text)
    }
}

/// Parse the model's reply, tolerating markdown fences it was told to omit
fn parse_payload_text(text: &str) -> Result<Value> {
    let trimmed = text.trim();
    let unfenced = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(unfenced)
        .map_err(|e| ResumeRadarError::Extraction(format!("unparseable extraction payload: {}", e)))
}

/// Deterministic stand-in returning a canned payload; keeps the validator's
/// repair logic exercisable without network calls.
pub struct StubExtractor {
    payload: Value,
}

impl StubExtractor {
    pub fn new(payload: Value) -> Self {
        Self { payload }
    }
}

impl CandidateExtractor for StubExtractor {
    async fn extract(&self, _resume_text: &str) -> Result<Value> {
        Ok(self.payload.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fence_stripping() {
        let fenced = "```json\n{\"skills\": [\"python\"]}\n```";
        let payload = parse_payload_text(fenced).unwrap();
        assert_eq!(payload["skills"][0], "python");

        let bare = "{\"skills\": []}";
        assert!(parse_payload_text(bare).is_ok());
    }

    #[test]
    fn test_garbage_payload_is_an_extraction_error() {
        let err = parse_payload_text("I could not parse this resume, sorry!").unwrap_err();
        assert!(matches!(err, ResumeRadarError::Extraction(_)));
    }

    #[tokio::test]
    async fn test_stub_extractor_returns_payload() {
        let stub = StubExtractor::new(json!({"email": "a@b.com"}));
        let payload = stub.extract("ignored").await.unwrap();
        assert_eq!(payload["email"], "a@b.com");
    }
}
