//! OCR Module
//!
//! Text recognition for uploaded prescription images.
//!
//! Supports multiple backends:
//! - Tesseract (local, requires installation)
//! - Ollama vision models (local LLM)
//!
//! Each backend returns word-level [`RecognizedToken`]s with a confidence in
//! [0, 1]; the caller filters and matches them against the catalog.

mod provider;
mod service;
mod types;

pub use provider::{OcrProvider, OllamaVisionProvider};
pub use service::{OcrService, OcrServiceConfig};
pub use types::{OcrBackend, OcrError, OcrOutcome, RecognizedToken};

#[cfg(feature = "ocr-tesseract")]
pub use provider::TesseractProvider;
