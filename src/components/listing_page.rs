//! Listing Page Component
//!
//! One parameterized page for any content section; the section picks the
//! catalog out of the store and decides the ordering.

use leptos::prelude::*;

use crate::components::ContentList;
use crate::models::Section;
use crate::store::{section_records, use_app_store};

/// Catalog page for a section
#[component]
pub fn ListingPage(section: Section) -> impl IntoView {
    let store = use_app_store();
    let records = Signal::derive(move || section_records(&store, section));

    view! {
        <section class="page listing-page">
            <h1>{section.title()}</h1>
            <ContentList records sort_by_date=section.sorted_by_date() />
        </section>
    }
}
