//! Embedded Catalog Data
//!
//! The content source for each section is a JSON document compiled into
//! the binary. Loading parses on demand; the app keeps the parsed lists
//! in the store.

use crate::models::{ContentRecord, Section};

const DOCUMENTS_JSON: &str = include_str!("../data/documents.json");
const MEDIA_JSON: &str = include_str!("../data/media.json");
const TRAINING_JSON: &str = include_str!("../data/training.json");
const NEWS_JSON: &str = include_str!("../data/news.json");

/// Parse the embedded catalog for one section
pub fn load_section(section: Section) -> Result<Vec<ContentRecord>, String> {
    let raw = match section {
        Section::Documents => DOCUMENTS_JSON,
        Section::Media => MEDIA_JSON,
        Section::Training => TRAINING_JSON,
        Section::News => NEWS_JSON,
    };
    serde_json::from_str(raw).map_err(|e| format!("{} catalog: {}", section.title(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_SECTIONS: [Section; 4] = [
        Section::Documents,
        Section::Media,
        Section::Training,
        Section::News,
    ];

    #[test]
    fn test_every_section_parses_non_empty() {
        for section in ALL_SECTIONS {
            let records = load_section(section).unwrap();
            assert!(!records.is_empty(), "{} is empty", section.title());
        }
    }

    #[test]
    fn test_record_ids_are_unique_across_sections() {
        let mut seen = HashSet::new();
        for section in ALL_SECTIONS {
            for record in load_section(section).unwrap() {
                assert!(seen.insert(record.id.clone()), "duplicate id: {}", record.id);
            }
        }
    }

    #[test]
    fn test_records_have_category_and_title() {
        for section in ALL_SECTIONS {
            for record in load_section(section).unwrap() {
                assert!(!record.title.is_empty());
                assert!(!record.category.is_empty());
            }
        }
    }
}
