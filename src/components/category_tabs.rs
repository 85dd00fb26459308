//! Category Tabs Component
//!
//! Filter buttons for a content listing: the "All" sentinel plus one tab
//! per category present in the catalog.

use leptos::prelude::*;

use crate::catalog::CategoryFilter;

/// Category selector buttons for a listing
#[component]
pub fn CategoryTabs(
    categories: Memo<Vec<String>>,
    selected: ReadSignal<CategoryFilter>,
    set_selected: WriteSignal<CategoryFilter>,
) -> impl IntoView {
    view! {
        <div class="category-tabs">
            <button
                class=move || {
                    if selected.get() == CategoryFilter::All { "tab-btn active" } else { "tab-btn" }
                }
                on:click=move |_| set_selected.set(CategoryFilter::All)
            >
                "All"
            </button>
            <For
                each=move || categories.get()
                key=|category| category.clone()
                children=move |category| {
                    let value = CategoryFilter::Only(category.clone());
                    let value_clone = value.clone();
                    let is_selected = move || selected.get() == value;
                    view! {
                        <button
                            class=move || if is_selected() { "tab-btn active" } else { "tab-btn" }
                            on:click=move |_| set_selected.set(value_clone.clone())
                        >
                            {category}
                        </button>
                    }
                }
            />
        </div>
    }
}
