//! Application Context
//!
//! Navigation state provided via Leptos Context API. The host's routing
//! surface is a single "navigate to page" capability.

use leptos::prelude::*;

/// Site pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Documents,
    Media,
    Training,
    News,
    Contact,
    Register,
}

impl Page {
    pub const ALL: &'static [Page] = &[
        Page::Documents,
        Page::Media,
        Page::Training,
        Page::News,
        Page::Contact,
        Page::Register,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Page::Documents => "Documents",
            Page::Media => "Media",
            Page::Training => "Training",
            Page::News => "News",
            Page::Contact => "Contact",
            Page::Register => "Register",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>)) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
        }
    }

    /// Navigate to a page
    pub fn navigate(&self, page: Page) {
        self.set_page.set(page);
    }
}
