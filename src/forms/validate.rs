//! Form Validation
//!
//! Pure mapping from field state to per-field errors. Rules are evaluated
//! independently per field so every error surfaces at once; no field result
//! depends on another field's outcome (except explicit `must_match` pairs,
//! which read the other field's value, not its result).

use std::collections::HashMap;

use super::schema::{FieldKind, FieldSchema};
use super::state::FormState;

/// Why a single field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidFormat,
    Mismatch,
    TooShort,
}

impl FieldError {
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Required => "required",
            FieldError::InvalidFormat => "invalid format",
            FieldError::Mismatch => "mismatch",
            FieldError::TooShort => "too short",
        }
    }
}

/// Per-field errors; a missing entry means the field is valid
pub type ValidationResult = HashMap<String, FieldError>;

/// Validate a snapshot against its schema
pub fn validate(state: &FormState, schema: &[FieldSchema]) -> ValidationResult {
    let mut errors = ValidationResult::new();
    for field in schema {
        if let Some(error) = check_field(field, state) {
            errors.insert(field.name.clone(), error);
        }
    }
    errors
}

fn check_field(field: &FieldSchema, state: &FormState) -> Option<FieldError> {
    let Some(value) = state.get(&field.name) else {
        // Undeclared fields are caught at set() time; treat as empty here
        return field.required.then_some(FieldError::Required);
    };

    if value.is_empty() {
        return field.required.then_some(FieldError::Required);
    }

    let text = value.as_text();
    match &field.kind {
        FieldKind::Text | FieldKind::Checkbox => {}
        FieldKind::Email => {
            if !is_email_shaped(text) {
                return Some(FieldError::InvalidFormat);
            }
        }
        FieldKind::Phone => {
            if !is_phone_shaped(text) {
                return Some(FieldError::InvalidFormat);
            }
        }
        FieldKind::Select(options) => {
            if !options.iter().any(|option| option == text) {
                return Some(FieldError::InvalidFormat);
            }
        }
    }

    if let Some(min) = field.min_len {
        if text.chars().count() < min {
            return Some(FieldError::TooShort);
        }
    }

    if let Some(other) = &field.must_match {
        if state.text(other) != text {
            return Some(FieldError::Mismatch);
        }
    }

    None
}

/// `local@domain.tld` shape: exactly one `@`, non-empty local part, dotted
/// domain with non-empty labels. Not a full RFC address parser.
fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let mut labels = domain.split('.');
    let first = labels.next();
    let rest: Vec<&str> = labels.collect();
    matches!(first, Some(label) if !label.is_empty())
        && !rest.is_empty()
        && rest.iter().all(|label| !label.is_empty())
}

/// Digits plus `+ - ( )` and spaces, at least 7 digits
fn is_phone_shaped(value: &str) -> bool {
    let mut digits = 0;
    for c in value.chars() {
        match c {
            '0'..='9' => digits += 1,
            '+' | '-' | '(' | ')' | ' ' => {}
            _ => return false,
        }
    }
    digits >= 7
}
