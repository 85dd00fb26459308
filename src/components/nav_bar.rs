//! Navigation Bar Component
//!
//! Top page links. The mobile menu open/closed flag is local to this bar,
//! not app-wide state.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

/// Site navigation header
#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="nav-bar">
            <div class="nav-brand" on:click=move |_| ctx.navigate(Page::default())>
                "sitekit"
            </div>

            <button
                class="nav-toggle"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <nav class=move || if menu_open.get() { "nav-links open" } else { "nav-links" }>
                {Page::ALL.iter().map(|&page| {
                    let is_current = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_current() { "nav-link active" } else { "nav-link" }
                            on:click=move |_| {
                                ctx.navigate(page);
                                set_menu_open.set(false);
                            }
                        >
                            {page.title()}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </header>
    }
}
