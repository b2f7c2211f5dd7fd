//! OCR Service
//!
//! Orchestrates OCR backends for uploaded prescription images.

use std::sync::Arc;

use super::{
    provider::{OcrProvider, OllamaVisionProvider},
    types::{OcrBackend, OcrError, OcrOutcome},
};

/// OCR service configuration
#[derive(Debug, Clone)]
pub struct OcrServiceConfig {
    /// Preferred backend order
    pub backends: Vec<OcrBackend>,
    /// Ollama base URL
    pub ollama_url: String,
    /// Ollama model name
    pub ollama_model: String,
    /// Recognition language (tesseract language code)
    pub language: String,
}

impl Default for OcrServiceConfig {
    fn default() -> Self {
        Self {
            backends: vec![OcrBackend::Tesseract, OcrBackend::Ollama],
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llava".to_string(),
            language: "eng".to_string(),
        }
    }
}

/// OCR service for prescription images
pub struct OcrService {
    providers: Vec<Arc<dyn OcrProvider>>,
}

impl OcrService {
    /// Create a new OCR service from configuration
    pub fn new(config: OcrServiceConfig) -> Self {
        let mut providers: Vec<Arc<dyn OcrProvider>> = Vec::new();

        #[cfg(feature = "ocr-tesseract")]
        {
            use super::provider::TesseractProvider;
            if config.backends.contains(&OcrBackend::Tesseract) {
                providers.push(Arc::new(TesseractProvider::new(&config.language)));
            }
        }

        if config.backends.contains(&OcrBackend::Ollama) {
            providers.push(Arc::new(OllamaVisionProvider::new(
                &config.ollama_url,
                &config.ollama_model,
            )));
        }

        Self { providers }
    }

    /// Create a service from explicit providers (tests inject mocks here)
    pub fn with_providers(providers: Vec<Arc<dyn OcrProvider>>) -> Self {
        Self { providers }
    }

    /// Get available backends
    pub async fn available_backends(&self) -> Vec<OcrBackend> {
        let mut available = Vec::new();
        for provider in &self.providers {
            if provider.is_available().await {
                available.push(provider.backend());
            }
        }
        available
    }

    /// Recognize text in an image, trying backends in configured order.
    ///
    /// A requested backend that is configured but down is an error; otherwise
    /// backends are tried in order and the first success wins.
    pub async fn recognize(
        &self,
        image_data: &[u8],
        preferred: Option<OcrBackend>,
    ) -> Result<OcrOutcome, OcrError> {
        if let Some(preferred) = preferred {
            for provider in &self.providers {
                if provider.backend() == preferred {
                    if provider.is_available().await {
                        return provider.recognize(image_data).await;
                    } else {
                        return Err(OcrError::BackendNotAvailable(format!(
                            "{:?} backend is not available",
                            preferred
                        )));
                    }
                }
            }
            return Err(OcrError::BackendNotAvailable(format!(
                "{:?} backend is not configured",
                preferred
            )));
        }

        for provider in &self.providers {
            if provider.is_available().await {
                match provider.recognize(image_data).await {
                    Ok(outcome) => return Ok(outcome),
                    Err(e) => {
                        tracing::warn!(
                            "OCR backend {:?} failed: {}, trying next",
                            provider.backend(),
                            e
                        );
                        continue;
                    }
                }
            }
        }

        Err(OcrError::BackendNotAvailable(
            "No OCR backends available".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::super::types::RecognizedToken;
    use super::*;

    struct MockProvider {
        backend: OcrBackend,
        available: bool,
        tokens: Vec<RecognizedToken>,
    }

    #[async_trait]
    impl OcrProvider for MockProvider {
        fn backend(&self) -> OcrBackend {
            self.backend
        }

        async fn is_available(&self) -> bool {
            self.available
        }

        async fn recognize(&self, _image_data: &[u8]) -> Result<OcrOutcome, OcrError> {
            Ok(OcrOutcome {
                tokens: self.tokens.clone(),
                backend: self.backend,
            })
        }
    }

    fn token(text: &str) -> RecognizedToken {
        RecognizedToken {
            text: text.to_string(),
            confidence: 0.9,
        }
    }

    #[tokio::test]
    async fn falls_back_to_next_available_backend() {
        let service = OcrService::with_providers(vec![
            std::sync::Arc::new(MockProvider {
                backend: OcrBackend::Tesseract,
                available: false,
                tokens: vec![],
            }),
            std::sync::Arc::new(MockProvider {
                backend: OcrBackend::Ollama,
                available: true,
                tokens: vec![token("Napa")],
            }),
        ]);

        let outcome = service.recognize(b"fake image", None).await.unwrap();
        assert_eq!(outcome.backend, OcrBackend::Ollama);
        assert_eq!(outcome.tokens[0].text, "Napa");
    }

    #[tokio::test]
    async fn preferred_backend_down_is_an_error() {
        let service = OcrService::with_providers(vec![std::sync::Arc::new(MockProvider {
            backend: OcrBackend::Tesseract,
            available: false,
            tokens: vec![],
        })]);

        let result = service
            .recognize(b"fake image", Some(OcrBackend::Tesseract))
            .await;
        assert!(matches!(result, Err(OcrError::BackendNotAvailable(_))));
    }

    #[tokio::test]
    async fn no_backends_available_is_an_error() {
        let service = OcrService::with_providers(vec![]);
        let result = service.recognize(b"fake image", None).await;
        assert!(matches!(result, Err(OcrError::BackendNotAvailable(_))));
    }
}
