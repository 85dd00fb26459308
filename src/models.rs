//! Frontend Models
//!
//! Data structures for the static content catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One static catalog entry (document, article, or resource)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentRecord {
    pub id: String,
    pub title: String,
    /// Markdown; rendered inline on the record card
    pub description: String,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub meta: RecordMeta,
}

/// Optional per-record metadata shown on the card
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordMeta {
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
}

/// Content sections of the site, each backed by its own catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Documents,
    Media,
    Training,
    News,
}

impl Section {
    pub fn title(&self) -> &'static str {
        match self {
            Section::Documents => "Documents",
            Section::Media => "Media",
            Section::Training => "Training",
            Section::News => "News",
        }
    }

    /// News shows newest first; the other catalogs keep insertion order
    pub fn sorted_by_date(&self) -> bool {
        matches!(self, Section::News)
    }
}
