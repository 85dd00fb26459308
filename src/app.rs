//! Sitekit Frontend App
//!
//! Top-level component: navigation context, catalog store, page switch.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContactPage, ListingPage, NavBar, NewsPage, RegisterPage};
use crate::context::{AppContext, Page};
use crate::models::Section;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // State
    let (page, set_page) = signal(Page::default());

    // Provide context to all children
    provide_context(AppContext::new((page, set_page)));
    provide_context(Store::new(AppState::load()));

    view! {
        <div class="app-layout">
            <NavBar />

            <main class="main-content">
                {move || match page.get() {
                    Page::Documents => view! { <ListingPage section=Section::Documents /> }.into_any(),
                    Page::Media => view! { <ListingPage section=Section::Media /> }.into_any(),
                    Page::Training => view! { <ListingPage section=Section::Training /> }.into_any(),
                    Page::News => view! { <NewsPage /> }.into_any(),
                    Page::Contact => view! { <ContactPage /> }.into_any(),
                    Page::Register => view! { <RegisterPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
