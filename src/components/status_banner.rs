//! Status Banner Component
//!
//! Form-level feedback for the submission state machine: a loading
//! indicator while submitting, a success message, or the failure reason.
//! Per-field validation errors render inline and never show up here.

use leptos::prelude::*;

use crate::forms::{FormModel, SubmitPhase};

/// Feedback area under a form's fields
#[component]
pub fn StatusBanner(model: RwSignal<FormModel>) -> impl IntoView {
    let phase = move || model.with(|m| m.phase());

    view! {
        <div class="form-status">
            <Show when=move || phase() == SubmitPhase::Submitting>
                <div class="status-loading">"Sending..."</div>
            </Show>
            <Show when=move || phase() == SubmitPhase::Success>
                <div class="status-success">"Thank you! Your submission has been received."</div>
            </Show>
            {move || {
                model.with(|m| m.form_error().map(|message| {
                    view! { <div class="status-error">{message.to_string()}</div> }
                }))
            }}
        </div>
    }
}
