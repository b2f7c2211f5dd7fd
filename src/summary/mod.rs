//! Summary generation
//!
//! Builds a marketing-style prompt from a matched catalog record and forwards
//! it to an external text-generation collaborator. Generation owns no retry
//! or caching; a collaborator failure is a [`GenerationError`] the caller
//! handles per record.

mod prompt;
mod provider;

pub use prompt::PromptBuilder;
pub use provider::{GenerationError, GenerationParams, GenerationProvider, OllamaGenerator};
