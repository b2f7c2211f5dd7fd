//! Catalog loading
//!
//! Reads the medicine table from a JSON file (an array of records). A missing
//! or malformed file is a `LoadError`; callers are expected to degrade to an
//! empty catalog and keep the rest of the service usable.

use std::path::Path;

use super::record::{Catalog, CatalogRecord};

/// Catalog source errors
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Catalog file not found: {0}")]
    NotFound(String),

    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed catalog file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Load the catalog from a JSON file.
///
/// Records with a missing or blank drug name are dropped rather than
/// rejecting the whole file.
pub fn load(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::NotFound(path.display().to_string()));
    }

    let raw = std::fs::read_to_string(path)?;
    let records: Vec<CatalogRecord> = serde_json::from_str(&raw)?;

    let total = records.len();
    let records: Vec<CatalogRecord> = records
        .into_iter()
        .filter(|r| !r.drug_name.trim().is_empty())
        .collect();

    let dropped = total - records.len();
    if dropped > 0 {
        tracing::debug!("Dropped {} catalog records without a drug name", dropped);
    }

    Ok(Catalog::new(records))
}
