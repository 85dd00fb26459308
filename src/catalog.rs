//! Content Catalog Utilities
//!
//! Pure projections over the static record lists: distinct categories,
//! category filtering, and date ordering. The catalog itself is never
//! mutated; every view is recomputed from the full list.

use crate::models::ContentRecord;

/// Currently selected category, with `All` as the no-filter sentinel
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(selected) => selected,
        }
    }
}

/// Distinct category values in first-occurrence order
pub fn categories_of(catalog: &[ContentRecord]) -> Vec<String> {
    let mut categories: Vec<String> = Vec::new();
    for record in catalog {
        if !categories.contains(&record.category) {
            categories.push(record.category.clone());
        }
    }
    categories
}

/// Ordered subsequence of records matching the selection. `All` returns
/// the catalog unchanged; an unmatched category returns an empty list.
pub fn filter(catalog: &[ContentRecord], selected: &CategoryFilter) -> Vec<ContentRecord> {
    catalog
        .iter()
        .filter(|record| selected.matches(&record.category))
        .cloned()
        .collect()
}

/// Newest first; records sharing a date keep their insertion order
pub fn sorted_by_date_desc(catalog: &[ContentRecord]) -> Vec<ContentRecord> {
    let mut sorted = catalog.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RecordMeta;
    use chrono::NaiveDate;

    fn record(id: &str, category: &str, date: (i32, u32, u32)) -> ContentRecord {
        ContentRecord {
            id: id.to_string(),
            title: format!("Record {}", id),
            description: String::new(),
            category: category.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            meta: RecordMeta::default(),
        }
    }

    fn sample_catalog() -> Vec<ContentRecord> {
        vec![
            record("1", "Policy", (2024, 1, 10)),
            record("2", "Policy", (2024, 2, 5)),
            record("3", "Youth", (2024, 1, 20)),
            record("4", "Community", (2024, 3, 1)),
            record("5", "Environment", (2024, 2, 14)),
            record("6", "Healthcare", (2024, 1, 3)),
        ]
    }

    #[test]
    fn test_categories_keep_first_occurrence_order() {
        let categories = categories_of(&sample_catalog());
        assert_eq!(
            categories,
            vec!["Policy", "Youth", "Community", "Environment", "Healthcare"]
        );
    }

    #[test]
    fn test_all_sentinel_is_identity() {
        let catalog = sample_catalog();
        assert_eq!(filter(&catalog, &CategoryFilter::All), catalog);
    }

    #[test]
    fn test_filter_keeps_matching_records_in_relative_order() {
        let catalog = sample_catalog();
        let policy = filter(&catalog, &CategoryFilter::Only("Policy".into()));
        assert_eq!(policy.len(), 2);
        assert_eq!(policy[0].id, "1");
        assert_eq!(policy[1].id, "2");
        assert!(policy.iter().all(|r| r.category == "Policy"));
    }

    #[test]
    fn test_filter_counts_match_unfiltered_catalog() {
        let catalog = sample_catalog();
        for category in categories_of(&catalog) {
            let selected = CategoryFilter::Only(category.clone());
            let matching = catalog.iter().filter(|r| r.category == category).count();
            assert_eq!(filter(&catalog, &selected).len(), matching);
        }
    }

    #[test]
    fn test_unmatched_category_yields_empty_not_error() {
        let catalog = sample_catalog();
        assert!(filter(&catalog, &CategoryFilter::Only("Sports".into())).is_empty());
    }

    #[test]
    fn test_filtering_never_mutates_the_catalog() {
        let catalog = sample_catalog();
        let before = catalog.clone();
        let _ = filter(&catalog, &CategoryFilter::Only("Youth".into()));
        let _ = sorted_by_date_desc(&catalog);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_sort_by_date_is_newest_first_and_stable() {
        let mut catalog = sample_catalog();
        catalog.push(record("7", "Policy", (2024, 3, 1)));

        let sorted = sorted_by_date_desc(&catalog);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        // 4 and 7 share 2024-03-01; 4 was inserted first
        assert_eq!(ids, vec!["4", "7", "5", "2", "3", "1", "6"]);
    }
}
