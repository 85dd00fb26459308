//! Content List Component
//!
//! Filterable card grid over a section's catalog. The selected category is
//! local to this view; the visible subset is a pure projection recomputed
//! on every selection or catalog change.

use leptos::prelude::*;

use crate::catalog::{categories_of, filter, sorted_by_date_desc, CategoryFilter};
use crate::components::CategoryTabs;
use crate::markdown::parse_markdown_inline;
use crate::models::ContentRecord;

/// Filterable listing of one section's records
#[component]
pub fn ContentList(
    records: Signal<Vec<ContentRecord>>,
    #[prop(optional)] sort_by_date: bool,
) -> impl IntoView {
    let (selected, set_selected) = signal(CategoryFilter::default());

    let categories = Memo::new(move |_| categories_of(&records.get()));
    let visible = Memo::new(move |_| {
        let base = if sort_by_date {
            sorted_by_date_desc(&records.get())
        } else {
            records.get()
        };
        filter(&base, &selected.get())
    });

    view! {
        <div class="content-list">
            <CategoryTabs categories selected set_selected />

            <Show when=move || visible.get().is_empty()>
                <div class="no-results">"No results in this category"</div>
            </Show>

            <div class="content-grid">
                <For
                    each=move || visible.get()
                    key=|record| record.id.clone()
                    children=move |record| view! { <RecordCard record /> }
                />
            </div>
        </div>
    }
}

/// One catalog record as a card
#[component]
fn RecordCard(record: ContentRecord) -> impl IntoView {
    let description = parse_markdown_inline(&record.description);
    let date = record.date.format("%-d %b %Y").to_string();

    view! {
        <div class="record-card">
            <div class="record-header">
                <span class="record-category">{record.category.clone()}</span>
                <span class="record-date">{date}</span>
            </div>
            <div class="record-title">{record.title.clone()}</div>
            <div class="record-description" inner_html=description></div>
            <div class="record-meta">
                {record.meta.size.clone().map(|size| view! { <span class="meta-size">{size}</span> })}
                {record.meta.duration.clone().map(|duration| view! { <span class="meta-duration">{duration}</span> })}
                {record.meta.author.clone().map(|author| view! { <span class="meta-author">{author}</span> })}
            </div>
        </div>
    }
}
