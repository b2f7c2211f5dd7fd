//! Query resolution
//!
//! Maps free-text tokens (typed names or OCR output) to catalog records.
//! Matching is exact after trim + lowercase; results keep first-match order
//! and contain each record at most once.

use std::collections::HashSet;

use crate::ocr::RecognizedToken;

use super::record::{normalize, Catalog, CatalogRecord};

/// OCR tokens below this confidence are discarded before matching.
/// The threshold is inclusive: 0.4 itself still matches.
pub const MIN_TOKEN_CONFIDENCE: f64 = 0.4;

/// Resolve typed tokens against the catalog.
///
/// Unmatched tokens are silently skipped; an empty result is not an error.
pub fn resolve<'a, I, S>(catalog: &'a Catalog, tokens: I) -> Vec<&'a CatalogRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut matches = Vec::new();

    for token in tokens {
        let token = normalize(token.as_ref());
        if token.is_empty() {
            continue;
        }
        if let Some(record) = catalog.find(&token) {
            if seen.insert(record.key()) {
                matches.push(record);
            }
        }
    }

    matches
}

/// Resolve OCR tokens, dropping low-confidence words first.
pub fn resolve_recognized<'a>(
    catalog: &'a Catalog,
    tokens: &[RecognizedToken],
) -> Vec<&'a CatalogRecord> {
    resolve(
        catalog,
        tokens
            .iter()
            .filter(|t| t.confidence >= MIN_TOKEN_CONFIDENCE)
            .map(|t| t.text.as_str()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> CatalogRecord {
        CatalogRecord {
            drug_name: name.to_string(),
            ..Default::default()
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![record("Napa"), record("Sergel"), record("Seclo")])
    }

    #[test]
    fn exact_match_any_case() {
        let catalog = catalog();

        let result = resolve(&catalog, ["Napa"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].drug_name, "Napa");

        let result = resolve(&catalog, ["NAPA"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].drug_name, "Napa");
    }

    #[test]
    fn duplicates_appear_once_in_first_match_order() {
        let catalog = catalog();

        let result = resolve(&catalog, ["Napa", "napa", " NAPA "]);
        assert_eq!(result.len(), 1);

        let result = resolve(&catalog, ["sergel", "napa", "Sergel"]);
        let names: Vec<_> = result.iter().map(|r| r.drug_name.as_str()).collect();
        assert_eq!(names, ["Sergel", "Napa"]);
    }

    #[test]
    fn unknown_tokens_are_skipped_not_errors() {
        let catalog = catalog();

        assert!(resolve(&catalog, ["nonexistent-drug-xyz"]).is_empty());

        let result = resolve(&catalog, ["nonexistent-drug-xyz", "seclo"]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].drug_name, "Seclo");
    }

    #[test]
    fn comma_separated_query_preserves_order() {
        let catalog = catalog();

        let result = resolve(&catalog, "Napa, Sergel".split(','));
        let names: Vec<_> = result.iter().map(|r| r.drug_name.as_str()).collect();
        assert_eq!(names, ["Napa", "Sergel"]);
    }

    #[test]
    fn confidence_threshold_is_inclusive() {
        let catalog = catalog();
        let tokens = vec![
            RecognizedToken {
                text: "Napa".to_string(),
                confidence: 0.39,
            },
            RecognizedToken {
                text: "Sergel".to_string(),
                confidence: 0.4,
            },
        ];

        let result = resolve_recognized(&catalog, &tokens);
        let names: Vec<_> = result.iter().map(|r| r.drug_name.as_str()).collect();
        assert_eq!(names, ["Sergel"]);
    }
}
