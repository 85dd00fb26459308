//! Register Page
//!
//! Membership registration form: password pair plus terms checkbox.

use leptos::prelude::*;

use crate::components::FormView;
use crate::forms::FieldSchema;
use crate::sink::ConsoleSink;

/// Registration form fields
pub fn register_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("first_name", "First name").required(),
        FieldSchema::text("last_name", "Last name").required(),
        FieldSchema::email("email", "Email")
            .required()
            .placeholder("you@example.org"),
        FieldSchema::phone("phone", "Phone").placeholder("Optional"),
        FieldSchema::text("password", "Password")
            .required()
            .min_len(8)
            .secret(),
        FieldSchema::text("confirm_password", "Confirm password")
            .required()
            .secret()
            .must_match("password"),
        FieldSchema::checkbox("terms", "I agree to the membership terms").required(),
    ]
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <section class="page form-page">
            <h1>"Register"</h1>
            <p class="page-intro">"Create a member account to access training and events."</p>
            <FormView
                form_id="register"
                schema=register_fields()
                sink=ConsoleSink
                submit_label="Create account"
            />
        </section>
    }
}
