//! Error handling for the resume radar application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeRadarError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF extraction error: {0}")]
    PdfExtraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Extraction service error: {0}")]
    Extraction(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ResumeRadarError>;

/// Convert reqwest errors to our custom error type
impl From<reqwest::Error> for ResumeRadarError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ResumeRadarError::Extraction(format!("extraction request timed out: {}", err))
        } else {
            ResumeRadarError::Extraction(err.to_string())
        }
    }
}
