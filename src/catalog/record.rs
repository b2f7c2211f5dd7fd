//! Catalog record types

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A single medicine entry.
///
/// The source file uses the upstream dataset's field names ("Drug Name",
/// "Use in pregnancy", ...); serde aliases map both spellings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogRecord {
    #[serde(alias = "Drug Name", default)]
    pub drug_name: String,
    #[serde(alias = "Company Name", default)]
    pub company_name: String,
    #[serde(alias = "Indication", default)]
    pub indication: String,
    #[serde(alias = "Active Ingredient", default)]
    pub active_ingredient: String,
    #[serde(alias = "Use in pregnancy", default)]
    pub pregnancy_safety: String,
    #[serde(alias = "Side Effects", default)]
    pub side_effects: String,
}

impl CatalogRecord {
    /// Canonical lookup key: trimmed, lowercased drug name.
    pub fn key(&self) -> String {
        normalize(&self.drug_name)
    }
}

/// Normalize a name or query token for matching.
pub(crate) fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Immutable medicine table with a case-insensitive name index.
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<CatalogRecord>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from records. On duplicate names the first record wins.
    pub fn new(records: Vec<CatalogRecord>) -> Self {
        let mut by_name = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            by_name.entry(record.key()).or_insert(idx);
        }
        Self { records, by_name }
    }

    /// A catalog with no records. Used when loading fails (non-fatal).
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[CatalogRecord] {
        &self.records
    }

    /// Case-insensitive exact-match lookup. No fuzzy or partial matching.
    pub fn find(&self, name: &str) -> Option<&CatalogRecord> {
        self.by_name
            .get(&normalize(name))
            .map(|&idx| &self.records[idx])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CatalogRecord {
        CatalogRecord {
            drug_name: name.to_string(),
            company_name: "Acme Pharma".to_string(),
            indication: "Fever".to_string(),
            active_ingredient: "Paracetamol".to_string(),
            pregnancy_safety: "Consult a physician".to_string(),
            side_effects: "Nausea".to_string(),
        }
    }

    #[test]
    fn find_is_case_insensitive() {
        let catalog = Catalog::new(vec![record("Napa")]);

        assert!(catalog.find("Napa").is_some());
        assert!(catalog.find("NAPA").is_some());
        assert!(catalog.find("  napa  ").is_some());
        assert!(catalog.find("Sergel").is_none());
    }

    #[test]
    fn duplicate_names_keep_first_record() {
        let mut first = record("Napa");
        first.company_name = "First".to_string();
        let mut second = record("NAPA");
        second.company_name = "Second".to_string();

        let catalog = Catalog::new(vec![first, second]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("napa").unwrap().company_name, "First");
    }

    #[test]
    fn deserializes_upstream_field_names() {
        let json = r#"{
            "Drug Name": "Napa",
            "Company Name": "Beximco Pharmaceuticals Ltd.",
            "Indication": "Fever, headache",
            "Active Ingredient": "Paracetamol",
            "Use in pregnancy": "Generally considered safe",
            "Side Effects": "Rarely skin rash"
        }"#;

        let record: CatalogRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.drug_name, "Napa");
        assert_eq!(record.pregnancy_safety, "Generally considered safe");
    }
}
