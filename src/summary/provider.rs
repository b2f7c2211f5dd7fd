//! Generation providers
//!
//! The external text-generation collaborator behind a trait. The Ollama
//! backend mirrors the OCR module's API shape: one POST to `/api/generate`,
//! decoded text returned verbatim.

use async_trait::async_trait;

/// Generation error types
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error("Generation backend not available: {0}")]
    BackendNotAvailable(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Empty response from generation backend")]
    EmptyResponse,
}

/// Fixed decoding parameters sent with every request.
#[derive(Debug, Clone)]
pub struct GenerationParams {
    /// Maximum tokens to generate
    pub max_tokens: u32,
    /// Repetition suppression (>1.0 penalizes repeats)
    pub repeat_penalty: f64,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 320,
            repeat_penalty: 1.2,
        }
    }
}

/// Text-generation provider trait
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    /// Check if the backend is reachable
    async fn is_available(&self) -> bool;

    /// Generate text for a prompt, returning the decoded text unmodified
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Ollama text-generation provider
pub struct OllamaGenerator {
    base_url: String,
    model: String,
    params: GenerationParams,
}

impl OllamaGenerator {
    pub fn new(base_url: &str, model: &str, params: GenerationParams) -> Self {
        Self {
            base_url: base_url.to_string(),
            model: model.to_string(),
            params,
        }
    }
}

#[async_trait]
impl GenerationProvider for OllamaGenerator {
    async fn is_available(&self) -> bool {
        let client = reqwest::Client::new();
        let url = format!("{}/api/tags", self.base_url);

        match client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }

    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let client = reqwest::Client::new();
        let url = format!("{}/api/generate", self.base_url);

        let request = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "num_predict": self.params.max_tokens,
                "repeat_penalty": self.params.repeat_penalty,
            }
        });

        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::ApiError(format!("Failed to call Ollama: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiError(format!(
                "Ollama returned {}: {}",
                status, body
            )));
        }

        let result: serde_json::Value = response
            .json()
            .await
            .map_err(|e| GenerationError::ApiError(format!("Failed to parse response: {}", e)))?;

        let text = result["response"].as_str().unwrap_or("").trim().to_string();
        if text.is_empty() {
            return Err(GenerationError::EmptyResponse);
        }

        Ok(text)
    }
}
