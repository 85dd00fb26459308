//! UI Components
//!
//! Reusable Leptos components.

mod category_tabs;
mod contact_page;
mod content_list;
mod field_input;
mod form_view;
mod listing_page;
mod nav_bar;
mod news_page;
mod register_page;
mod status_banner;

pub use category_tabs::CategoryTabs;
pub use contact_page::ContactPage;
pub use content_list::ContentList;
pub use field_input::FieldInput;
pub use form_view::FormView;
pub use listing_page::ListingPage;
pub use nav_bar::NavBar;
pub use news_page::NewsPage;
pub use register_page::RegisterPage;
pub use status_banner::StatusBanner;
