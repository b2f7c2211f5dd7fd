//! OCR Providers
//!
//! Defines the provider trait and implementations for different OCR backends.

use async_trait::async_trait;

use super::types::{OcrBackend, OcrError, OcrOutcome, RecognizedToken};

/// OCR provider trait
#[async_trait]
pub trait OcrProvider: Send + Sync {
    /// Get the backend type
    fn backend(&self) -> OcrBackend;

    /// Check if the backend is available
    async fn is_available(&self) -> bool;

    /// Recognize text in an image (PNG or JPEG bytes)
    async fn recognize(&self, image_data: &[u8]) -> Result<OcrOutcome, OcrError>;
}

/// Tesseract OCR provider
///
/// Shells out to the `tesseract` binary with TSV output, which carries a
/// per-word confidence column (0-100, normalized to [0, 1] here).
#[cfg(feature = "ocr-tesseract")]
pub struct TesseractProvider {
    /// Recognition language
    language: String,
}

#[cfg(feature = "ocr-tesseract")]
impl TesseractProvider {
    pub fn new(language: &str) -> Self {
        Self {
            language: language.to_string(),
        }
    }

    /// Parse tesseract TSV output into word tokens.
    ///
    /// TSV rows: level page block par line word left top width height conf text.
    /// Word rows have level 5; non-word rows carry conf -1.
    fn parse_tsv(tsv: &str) -> Vec<RecognizedToken> {
        let mut tokens = Vec::new();
        for line in tsv.lines().skip(1) {
            let cols: Vec<&str> = line.split('\t').collect();
            if cols.len() < 12 {
                continue;
            }
            let conf: f64 = match cols[10].parse() {
                Ok(c) => c,
                Err(_) => continue,
            };
            let text = cols[11].trim();
            if conf < 0.0 || text.is_empty() {
                continue;
            }
            tokens.push(RecognizedToken {
                text: text.to_string(),
                confidence: conf / 100.0,
            });
        }
        tokens
    }
}

#[cfg(feature = "ocr-tesseract")]
#[async_trait]
impl OcrProvider for TesseractProvider {
    fn backend(&self) -> OcrBackend {
        OcrBackend::Tesseract
    }

    async fn is_available(&self) -> bool {
        std::process::Command::new("tesseract")
            .arg("--version")
            .output()
            .is_ok()
    }

    async fn recognize(&self, image_data: &[u8]) -> Result<OcrOutcome, OcrError> {
        use std::process::Command;

        let temp_dir = std::env::temp_dir();
        let input_path = temp_dir.join(format!("ocr_input_{}.png", uuid::Uuid::new_v4()));
        let output_base = temp_dir.join(format!("ocr_output_{}", uuid::Uuid::new_v4()));

        std::fs::write(&input_path, image_data)
            .map_err(|e| OcrError::ProcessingError(format!("Failed to write temp file: {}", e)))?;

        let output = Command::new("tesseract")
            .arg(&input_path)
            .arg(&output_base)
            .arg("-l")
            .arg(&self.language)
            .arg("--oem")
            .arg("3")
            .arg("--psm")
            .arg("3")
            .arg("tsv")
            .output()
            .map_err(|e| OcrError::ProcessingError(format!("Failed to run tesseract: {}", e)));

        let _ = std::fs::remove_file(&input_path);
        let output = output?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::ProcessingError(format!(
                "Tesseract failed: {}",
                stderr
            )));
        }

        let tsv_path = format!("{}.tsv", output_base.display());
        let tsv = std::fs::read_to_string(&tsv_path)
            .map_err(|e| OcrError::ProcessingError(format!("Failed to read output: {}", e)))?;
        let _ = std::fs::remove_file(&tsv_path);

        Ok(OcrOutcome {
            tokens: Self::parse_tsv(&tsv),
            backend: OcrBackend::Tesseract,
        })
    }
}

/// Ollama vision model provider
pub struct OllamaVisionProvider {
    /// Ollama API URL
    base_url: String,
    /// Model name (e.g., "llava", "bakllava")
    model: String,
}

impl OllamaVisionProvider {
    /// Vision models report no per-word confidence; assign a flat one.
    const DEFAULT_CONFIDENCE: f64 = 0.75;

    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
        }
    }

    fn tokenize(text: &str) -> Vec<RecognizedToken> {
        text.split(|c: char| c.is_whitespace() || c == ',')
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|w| !w.is_empty())
            .map(|w| RecognizedToken {
                text: w.to_string(),
                confidence: Self::DEFAULT_CONFIDENCE,
            })
            .collect()
    }
}

#[async_trait]
impl OcrProvider for OllamaVisionProvider {
    fn backend(&self) -> OcrBackend {
        OcrBackend::Ollama
    }

    async fn is_available(&self) -> bool {
        let client = reqwest::Client::new();
        let url = format!("{}/api/tags", self.base_url);

        match client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn recognize(&self, image_data: &[u8]) -> Result<OcrOutcome, OcrError> {
        use base64::Engine;

        let client = reqwest::Client::new();
        let url = format!("{}/api/generate", self.base_url);

        let image_base64 = base64::engine::general_purpose::STANDARD.encode(image_data);

        let prompt = "Extract all text from this image exactly as written. \
                      Return only the extracted words separated by spaces, nothing else.";

        let request = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "images": [image_base64],
            "stream": false
        });

        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| OcrError::ApiError(format!("Failed to call Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(OcrError::ApiError(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| OcrError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = result["response"].as_str().unwrap_or("").trim();

        Ok(OcrOutcome {
            tokens: Self::tokenize(text),
            backend: OcrBackend::Ollama,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_splits_and_strips_punctuation() {
        let tokens = OllamaVisionProvider::tokenize("Napa, Sergel.\nSeclo 20mg");
        let words: Vec<_> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(words, ["Napa", "Sergel", "Seclo", "20mg"]);
        assert!(tokens.iter().all(|t| t.confidence > 0.0));
    }

    #[cfg(feature = "ocr-tesseract")]
    #[test]
    fn parse_tsv_keeps_word_rows_and_normalizes_confidence() {
        let tsv = "level\tpage_num\tblock_num\tpar_num\tline_num\tword_num\tleft\ttop\twidth\theight\tconf\ttext\n\
                   1\t1\t0\t0\t0\t0\t0\t0\t640\t480\t-1\t\n\
                   5\t1\t1\t1\t1\t1\t10\t10\t80\t20\t96\tNapa\n\
                   5\t1\t1\t1\t1\t2\t100\t10\t80\t20\t32\tSsrgel\n";

        let tokens = TesseractProvider::parse_tsv(tsv);
        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "Napa");
        assert!((tokens[0].confidence - 0.96).abs() < 1e-9);
        assert!((tokens[1].confidence - 0.32).abs() < 1e-9);
    }
}
