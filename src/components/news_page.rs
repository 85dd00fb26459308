//! News Page
//!
//! Date-sorted news listing with a one-field newsletter subscribe form.

use leptos::prelude::*;

use crate::components::{ContentList, FormView};
use crate::forms::FieldSchema;
use crate::models::Section;
use crate::sink::ConsoleSink;
use crate::store::{section_records, use_app_store};

/// Newsletter subscribe fields
pub fn subscribe_fields() -> Vec<FieldSchema> {
    vec![FieldSchema::email("email", "Email")
        .required()
        .placeholder("you@example.org")]
}

#[component]
pub fn NewsPage() -> impl IntoView {
    let store = use_app_store();
    let records = Signal::derive(move || section_records(&store, Section::News));

    view! {
        <section class="page listing-page">
            <h1>"News"</h1>
            <ContentList records sort_by_date=true />

            <div class="subscribe-box">
                <h2>"Stay up to date"</h2>
                <FormView
                    form_id="subscribe"
                    schema=subscribe_fields()
                    sink=ConsoleSink
                    submit_label="Subscribe"
                />
            </div>
        </section>
    }
}
