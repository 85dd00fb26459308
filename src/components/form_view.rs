//! Form View Component
//!
//! The one parameterized form: a schema plus a sink make a page's form.
//! Owns the form's model in a local signal, drives the submission state
//! machine, and guards in-flight completions against view teardown.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{FieldInput, StatusBanner};
use crate::forms::{Completion, FieldSchema, FormModel, SubmitDecision, SubmitPhase};
use crate::sink::SubmissionSink;

/// How long a pending submission may run before it is failed
const SUBMIT_TIMEOUT_MS: u32 = 15_000;
/// How long the success message stays up
const SUCCESS_BANNER_MS: u32 = 4_000;

/// Schema-driven form wired to a submission sink
#[component]
pub fn FormView<S: SubmissionSink>(
    #[prop(into)] form_id: String,
    schema: Vec<FieldSchema>,
    sink: S,
    #[prop(into, optional)] submit_label: Option<String>,
) -> impl IntoView {
    let model = RwSignal::new(FormModel::new(schema.clone()));
    let submit_label = submit_label.unwrap_or_else(|| "Submit".to_string());

    // A completion arriving after navigation away must be a no-op
    on_cleanup(move || {
        model.try_update(|m| m.detach());
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let decision = model
            .try_update(|m| m.submit())
            .unwrap_or(SubmitDecision::Busy);
        let SubmitDecision::Accepted { attempt, snapshot } = decision else {
            return;
        };

        let delivery = sink.deliver(&form_id, &snapshot);
        spawn_local(async move {
            let result = delivery.await;
            let outcome = model
                .try_update(|m| m.complete(attempt, result))
                .unwrap_or(Completion::Ignored);
            if outcome == Completion::Succeeded {
                TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                model.try_update(|m| m.dismiss_success(attempt));
            }
        });
        // Watchdog: fail the attempt if the sink never answers. A stale
        // timer firing after completion is ignored by the attempt token.
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_TIMEOUT_MS).await;
            model.try_update(|m| m.complete(attempt, Err("request timed out".to_string())));
        });
    };

    let submitting = move || model.with(|m| m.phase() == SubmitPhase::Submitting);

    view! {
        <form class="form-view" on:submit=on_submit>
            {schema
                .into_iter()
                .map(|field| view! { <FieldInput model field /> })
                .collect_view()}
            <StatusBanner model />
            <button type="submit" disabled=submitting>
                {move || if submitting() { "Sending...".to_string() } else { submit_label.clone() }}
            </button>
        </form>
    }
}
