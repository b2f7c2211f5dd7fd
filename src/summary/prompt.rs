//! Prompt assembly
//!
//! A fixed list of prompt templates with a seedable random choice, so tests
//! can pin the template sequence while production picks uniformly.

use std::sync::Mutex;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::catalog::CatalogRecord;

const TEMPLATE_COUNT: usize = 2;

/// Builds generation prompts from catalog records.
pub struct PromptBuilder {
    rng: Mutex<StdRng>,
}

impl PromptBuilder {
    /// Entropy-seeded builder for production use.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic builder for tests.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Pick a template at random and interpolate the record's fields.
    pub fn build(&self, record: &CatalogRecord) -> String {
        let idx = {
            let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
            rng.gen_range(0..TEMPLATE_COUNT)
        };
        Self::render(idx, record)
    }

    fn render(idx: usize, record: &CatalogRecord) -> String {
        match idx {
            0 => format!(
                "Write a medical summary for {} by {}. Include uses and pregnancy safety: {}. Safety: {}",
                record.drug_name, record.company_name, record.indication, record.pregnancy_safety
            ),
            _ => format!(
                "Summarize this medicine: {}. Indication: {}. Side effects: {}. Pregnancy: {}",
                record.drug_name, record.indication, record.side_effects, record.pregnancy_safety
            ),
        }
    }
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self::new()
    }
}
