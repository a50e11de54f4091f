//! Product category enrichment
//!
//! Each record is joined against the catalog on product name,
//! case-insensitively. The whole catalog is scanned for every record and the
//! last matching entry wins, so a later duplicate overrides an earlier one.

use crate::types::{CatalogEntry, TransactionRecord, UNKNOWN};

/// Category for `product`, `"Unknown"` when no entry matches
pub fn lookup_category<'a>(catalog: &'a [CatalogEntry], product: &str) -> &'a str {
    let product = product.to_lowercase();

    catalog
        .iter()
        .filter(|entry| entry.product.to_lowercase() == product)
        .last()
        .map_or(UNKNOWN, |entry| entry.category.as_str())
}

/// Attach a category to every record
///
/// Record count and order are unchanged.
pub fn enrich(records: Vec<TransactionRecord>, catalog: &[CatalogEntry]) -> Vec<TransactionRecord> {
    records
        .into_iter()
        .map(|record| {
            let category = lookup_category(catalog, record.product()).to_string();
            record.with_category(category)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal::Decimal;

    fn record(id: &str, product: &str) -> TransactionRecord {
        TransactionRecord::new(id, "2024-01-01", product, 1, Decimal::ONE).unwrap()
    }

    fn catalog() -> Vec<CatalogEntry> {
        vec![
            CatalogEntry::new("Laptop", "Electronics"),
            CatalogEntry::new("Phone", "Electronics"),
            CatalogEntry::new("Shoes", "Fashion"),
        ]
    }

    #[rstest]
    #[case::exact("Laptop", "Electronics")]
    #[case::lowercase("shoes", "Fashion")]
    #[case::uppercase("PHONE", "Electronics")]
    #[case::no_match("Tablet", UNKNOWN)]
    #[case::no_partial_match("Lap", UNKNOWN)]
    fn test_lookup_category(#[case] product: &str, #[case] expected: &str) {
        assert_eq!(lookup_category(&catalog(), product), expected);
    }

    #[rstest]
    #[case::widget_lower("widget")]
    #[case::widget_upper("WIDGET")]
    #[case::widget_title("Widget")]
    fn test_last_match_wins(#[case] product: &str) {
        let catalog = vec![
            CatalogEntry::new("Widget", "A"),
            CatalogEntry::new("Widget", "B"),
        ];
        assert_eq!(lookup_category(&catalog, product), "B");
    }

    #[test]
    fn test_last_match_wins_across_non_matching_entries() {
        let catalog = vec![
            CatalogEntry::new("widget", "A"),
            CatalogEntry::new("Gadget", "G"),
            CatalogEntry::new("WIDGET", "C"),
            CatalogEntry::new("Gizmo", "Z"),
        ];
        assert_eq!(lookup_category(&catalog, "Widget"), "C");
    }

    #[test]
    fn test_enrich_preserves_count_and_order() {
        let records = vec![
            record("T1", "Shoes"),
            record("T2", "Tablet"),
            record("T3", "laptop"),
        ];
        assert!(records.iter().all(|r| r.category().is_none()));

        let enriched = enrich(records, &catalog());

        let summary: Vec<_> = enriched
            .iter()
            .map(|r| (r.id(), r.category()))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("T1", Some("Fashion")),
                ("T2", Some(UNKNOWN)),
                ("T3", Some("Electronics")),
            ]
        );
    }

    #[test]
    fn test_enrich_with_empty_catalog() {
        let enriched = enrich(vec![record("T1", "Laptop")], &[]);
        assert_eq!(enriched[0].category(), Some(UNKNOWN));
    }

    #[test]
    fn test_enrich_keeps_other_fields() {
        let original = record("T1", "Phone").with_region("West").with_customer_id("C7");
        let enriched = enrich(vec![original.clone()], &catalog());

        assert_eq!(enriched[0].region(), original.region());
        assert_eq!(enriched[0].customer_id(), original.customer_id());
        assert_eq!(enriched[0].amount(), original.amount());
    }
}
