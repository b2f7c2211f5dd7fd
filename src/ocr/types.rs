//! OCR Types

use serde::{Deserialize, Serialize};

/// OCR backend type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OcrBackend {
    /// Tesseract OCR (local)
    Tesseract,
    /// Ollama vision model (local LLM)
    Ollama,
}

impl Default for OcrBackend {
    fn default() -> Self {
        Self::Tesseract
    }
}

/// A single recognized word from an uploaded image.
///
/// Transient: produced by a backend, filtered against the confidence
/// threshold, matched against the catalog, then discarded.
#[derive(Debug, Clone, Serialize)]
pub struct RecognizedToken {
    /// Word text as recognized
    pub text: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

/// Result of recognizing one image.
#[derive(Debug, Clone, Serialize)]
pub struct OcrOutcome {
    /// Word-level tokens in reading order
    pub tokens: Vec<RecognizedToken>,
    /// Backend that produced them
    pub backend: OcrBackend,
}

/// OCR error types
#[derive(Debug, thiserror::Error)]
pub enum OcrError {
    #[error("OCR backend not available: {0}")]
    BackendNotAvailable(String),

    #[error("OCR processing failed: {0}")]
    ProcessingError(String),

    #[error("API error: {0}")]
    ApiError(String),
}

impl OcrError {
    pub fn status_code(&self) -> axum::http::StatusCode {
        use axum::http::StatusCode;
        match self {
            Self::BackendNotAvailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
