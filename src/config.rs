//! Configuration management for Medi-Bot Server

use std::env;

use serde::Deserialize;

use crate::ocr::OcrBackend;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub ocr: OcrConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to the medicine JSON file
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    pub backends: Vec<OcrBackend>,
    pub ollama_url: String,
    pub ollama_model: String,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub ollama_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub repeat_penalty: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            catalog: CatalogConfig {
                path: "data/medicines.json".to_string(),
            },
            ocr: OcrConfig {
                backends: vec![OcrBackend::Tesseract, OcrBackend::Ollama],
                ollama_url: "http://localhost:11434".to_string(),
                ollama_model: "llava".to_string(),
                language: "eng".to_string(),
            },
            generation: GenerationConfig {
                ollama_url: "http://localhost:11434".to_string(),
                model: "llama3.2".to_string(),
                max_tokens: 320,
                repeat_penalty: 1.2,
            },
        }
    }
}

impl Config {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let defaults = Config::default();

        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.server.port),
            },
            catalog: CatalogConfig {
                path: env::var("CATALOG_PATH").unwrap_or(defaults.catalog.path),
            },
            ocr: OcrConfig {
                backends: env::var("OCR_BACKENDS")
                    .ok()
                    .map(|raw| parse_backends(&raw))
                    .unwrap_or(defaults.ocr.backends),
                ollama_url: env::var("OCR_OLLAMA_URL").unwrap_or(defaults.ocr.ollama_url),
                ollama_model: env::var("OCR_OLLAMA_MODEL").unwrap_or(defaults.ocr.ollama_model),
                language: env::var("OCR_LANGUAGE").unwrap_or(defaults.ocr.language),
            },
            generation: GenerationConfig {
                ollama_url: env::var("GEN_OLLAMA_URL").unwrap_or(defaults.generation.ollama_url),
                model: env::var("GEN_MODEL").unwrap_or(defaults.generation.model),
                max_tokens: env::var("GEN_MAX_TOKENS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.generation.max_tokens),
                repeat_penalty: env::var("GEN_REPEAT_PENALTY")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.generation.repeat_penalty),
            },
        }
    }
}

/// Parse a comma-separated backend list ("tesseract,ollama"); unknown names
/// are ignored.
fn parse_backends(raw: &str) -> Vec<OcrBackend> {
    raw.split(',')
        .filter_map(|name| match name.trim() {
            "tesseract" => Some(OcrBackend::Tesseract),
            "ollama" => Some(OcrBackend::Ollama),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_lists() {
        assert_eq!(
            parse_backends("ollama, tesseract"),
            vec![OcrBackend::Ollama, OcrBackend::Tesseract]
        );
        assert_eq!(parse_backends("easyocr"), Vec::<OcrBackend>::new());
    }
}
