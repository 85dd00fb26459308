//! Contact Page
//!
//! Contact form defined as schema data over the shared FormView.

use leptos::prelude::*;

use crate::components::FormView;
use crate::forms::FieldSchema;
use crate::sink::ConsoleSink;

/// Contact form fields
pub fn contact_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("name", "Full name")
            .required()
            .placeholder("Your name"),
        FieldSchema::email("email", "Email")
            .required()
            .placeholder("you@example.org"),
        FieldSchema::phone("phone", "Phone").placeholder("Optional"),
        FieldSchema::select(
            "subject",
            "Subject",
            vec![
                "General".into(),
                "Membership".into(),
                "Volunteering".into(),
                "Press".into(),
            ],
        )
        .required(),
        FieldSchema::text("message", "Message")
            .required()
            .min_len(10)
            .multiline()
            .placeholder("How can we help?"),
    ]
}

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <section class="page form-page">
            <h1>"Contact"</h1>
            <p class="page-intro">"Questions, press requests, or volunteering - send us a message."</p>
            <FormView
                form_id="contact"
                schema=contact_fields()
                sink=ConsoleSink
                submit_label="Send message"
            />
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{check_schema, validate, FieldValue, FormState};

    #[test]
    fn test_contact_schema_is_well_formed() {
        assert!(check_schema(&contact_fields()).is_ok());
    }

    #[test]
    fn test_filled_contact_form_validates() {
        let schema = contact_fields();
        let mut state = FormState::from_schema(&schema);
        state.set("name", FieldValue::Text("Ada Lovelace".into()));
        state.set("email", FieldValue::Text("ada@example.org".into()));
        state.set("subject", FieldValue::Text("Volunteering".into()));
        state.set("message", FieldValue::Text("I would like to help out.".into()));
        assert!(validate(&state, &schema).is_empty());
    }
}
