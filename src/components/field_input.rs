//! Field Input Component
//!
//! Renders one schema field as the matching control (input, textarea,
//! select, checkbox) with its inline validation error.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::forms::{FieldKind, FieldSchema, FieldValue, FormModel};

/// One field of a form, bound to the form's model
#[component]
pub fn FieldInput(model: RwSignal<FormModel>, field: FieldSchema) -> impl IntoView {
    let name = StoredValue::new(field.name.clone());
    let error = move || model.with(|m| name.with_value(|n| m.error(n)));

    let text_value = move || model.with(|m| name.with_value(|n| m.text(n)));
    let set_text = move |value: String| {
        model.update(|m| name.with_value(|n| m.set_field(n, FieldValue::Text(value.clone()))));
    };

    let kind = field.kind.clone();
    let label = field.label.clone();
    let placeholder = field.placeholder.clone().unwrap_or_default();
    let required = field.required;
    let is_checkbox = matches!(kind, FieldKind::Checkbox);

    let input_type = if field.secret {
        "password"
    } else {
        match kind {
            FieldKind::Email => "email",
            FieldKind::Phone => "tel",
            _ => "text",
        }
    };

    let control = match field.kind {
        FieldKind::Checkbox => {
            let label = label.clone();
            view! {
                <label class="checkbox-row">
                    <input
                        type="checkbox"
                        prop:checked=move || model.with(|m| name.with_value(|n| m.flag(n)))
                        on:change=move |ev| {
                            let target = ev.target().unwrap();
                            let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                            model.update(|m| {
                                name.with_value(|n| m.set_field(n, FieldValue::Flag(input.checked())))
                            });
                        }
                    />
                    <span>{label}</span>
                </label>
            }
            .into_any()
        }
        FieldKind::Select(options) => view! {
            <select
                prop:value=text_value
                on:change=move |ev| {
                    let target = ev.target().unwrap();
                    let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
                    set_text(select.value());
                }
            >
                <option value="">"Please select..."</option>
                {options
                    .into_iter()
                    .map(|option| view! { <option value=option.clone()>{option.clone()}</option> })
                    .collect_view()}
            </select>
        }
        .into_any(),
        _ if field.multiline => view! {
            <textarea
                placeholder=placeholder.clone()
                prop:value=text_value
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let area = target.dyn_ref::<web_sys::HtmlTextAreaElement>().unwrap();
                    set_text(area.value());
                }
            ></textarea>
        }
        .into_any(),
        _ => view! {
            <input
                type=input_type
                placeholder=placeholder.clone()
                prop:value=text_value
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_text(input.value());
                }
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field" class:invalid=move || error().is_some()>
            {(!is_checkbox).then(|| view! {
                <label class="field-label">
                    {label.clone()}
                    {required.then(|| view! { <span class="required-mark">"*"</span> })}
                </label>
            })}
            {control}
            {move || error().map(|e| view! { <span class="field-error">{e.message()}</span> })}
        </div>
    }
}
