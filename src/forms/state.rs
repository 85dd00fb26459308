//! Form Field State
//!
//! Immutable-snapshot store of a form's current input values. Every field
//! declared in the schema has a defined entry at all times; setting an
//! undeclared field is a programming error (fatal in debug builds).

use std::collections::HashMap;

use serde::Serialize;

use super::schema::{FieldKind, FieldSchema};

/// Current value of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> &str {
        match self {
            FieldValue::Text(text) => text,
            FieldValue::Flag(_) => "",
        }
    }

    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Text(_) => false,
            FieldValue::Flag(flag) => *flag,
        }
    }

    /// True when the user has entered nothing (unchecked counts as empty)
    pub fn is_empty(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Flag(flag) => !flag,
        }
    }
}

/// Snapshot of a form's input values, keyed by schema field name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FormState {
    values: HashMap<String, FieldValue>,
}

impl FormState {
    /// Build the default snapshot: empty text for value fields, false for
    /// checkboxes.
    pub fn from_schema(schema: &[FieldSchema]) -> Self {
        let values = schema
            .iter()
            .map(|field| {
                let default = match field.kind {
                    FieldKind::Checkbox => FieldValue::Flag(false),
                    _ => FieldValue::Text(String::new()),
                };
                (field.name.clone(), default)
            })
            .collect();
        Self { values }
    }

    /// Replace the value for `name`, leaving all other fields unchanged.
    ///
    /// `name` must be declared in the schema this state was built from.
    pub fn set(&mut self, name: &str, value: FieldValue) {
        debug_assert!(
            self.values.contains_key(name),
            "set on undeclared field: {}",
            name
        );
        if let Some(slot) = self.values.get_mut(name) {
            *slot = value;
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    pub fn text(&self, name: &str) -> &str {
        self.values.get(name).map(FieldValue::as_text).unwrap_or("")
    }

    pub fn flag(&self, name: &str) -> bool {
        self.values.get(name).map(FieldValue::as_flag).unwrap_or(false)
    }

    /// Reset every field to its schema default
    pub fn reset(&mut self, schema: &[FieldSchema]) {
        *self = Self::from_schema(schema);
    }
}
