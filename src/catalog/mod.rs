//! Medicine catalog
//!
//! The catalog is a small in-memory table of medicine records loaded once at
//! startup from a JSON file and immutable for the process lifetime. Lookups
//! are case-insensitive exact matches on the drug name.

mod loader;
mod record;
mod resolver;

pub use loader::{load, LoadError};
pub use record::{Catalog, CatalogRecord};
pub use resolver::{resolve, resolve_recognized, MIN_TOKEN_CONFIDENCE};
