//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! parsed content catalogs; form and filter state stay local to the
//! views that own them.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::data;
use crate::models::{ContentRecord, Section};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Documents catalog
    pub documents: Vec<ContentRecord>,
    /// Media catalog
    pub media: Vec<ContentRecord>,
    /// Training catalog
    pub training: Vec<ContentRecord>,
    /// News catalog
    pub news: Vec<ContentRecord>,
}

impl AppState {
    /// Parse every embedded catalog; a section that fails to parse is
    /// logged and left empty rather than taking the app down.
    pub fn load() -> Self {
        let mut state = Self::default();
        for section in [
            Section::Documents,
            Section::Media,
            Section::Training,
            Section::News,
        ] {
            match data::load_section(section) {
                Ok(records) => match section {
                    Section::Documents => state.documents = records,
                    Section::Media => state.media = records,
                    Section::Training => state.training = records,
                    Section::News => state.news = records,
                },
                Err(e) => {
                    web_sys::console::error_1(&format!("[Store] {}", e).into());
                }
            }
        }
        state
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Records for one section, cloned out of the store
pub fn section_records(store: &AppStore, section: Section) -> Vec<ContentRecord> {
    match section {
        Section::Documents => store.documents().get(),
        Section::Media => store.media().get(),
        Section::Training => store.training().get(),
        Section::News => store.news().get(),
    }
}
