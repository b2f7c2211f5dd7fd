//! Application state management

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::ocr::OcrService;
use crate::summary::{GenerationProvider, PromptBuilder};

/// Shared application state
///
/// Everything here is initialized once at startup and immutable for the
/// process lifetime. Services are injected rather than reached for as
/// globals, so tests can swap in mocks.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    catalog: Catalog,
    catalog_error: Option<String>,
    ocr: OcrService,
    prompts: PromptBuilder,
    generator: Arc<dyn GenerationProvider>,
}

impl AppState {
    pub fn new(
        config: Config,
        catalog: Catalog,
        catalog_error: Option<String>,
        ocr: OcrService,
        prompts: PromptBuilder,
        generator: Arc<dyn GenerationProvider>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                catalog_error,
                ocr,
                prompts,
                generator,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the medicine catalog
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// The load failure message, if the catalog failed to load at startup
    pub fn catalog_error(&self) -> Option<&str> {
        self.inner.catalog_error.as_deref()
    }

    /// Get the OCR service
    pub fn ocr(&self) -> &OcrService {
        &self.inner.ocr
    }

    /// Get the prompt builder
    pub fn prompts(&self) -> &PromptBuilder {
        &self.inner.prompts
    }

    /// Get the text-generation provider
    pub fn generator(&self) -> &dyn GenerationProvider {
        self.inner.generator.as_ref()
    }
}
