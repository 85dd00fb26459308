//! Form Field Schemas
//!
//! Declarative description of a form's fields. Each form declares a closed
//! set of named fields at definition time; field values and validation rules
//! are checked against this schema, never against ad-hoc string keys.

/// Value kind of a single field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    /// Single choice from a fixed option list
    Select(Vec<String>),
    Checkbox,
}

/// Declarative description of one form field
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSchema {
    pub name: String,
    pub label: String,
    pub placeholder: Option<String>,
    pub kind: FieldKind,
    pub required: bool,
    /// Minimum length in characters, checked on non-empty values
    pub min_len: Option<usize>,
    /// Name of the field this one must equal (password confirmation)
    pub must_match: Option<String>,
    /// Render as a multi-line textarea
    pub multiline: bool,
    /// Render as a password input
    pub secret: bool,
}

impl FieldSchema {
    fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            placeholder: None,
            kind,
            required: false,
            min_len: None,
            must_match: None,
            multiline: false,
            secret: false,
        }
    }

    /// Create a text field
    pub fn text(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Text)
    }

    /// Create an email field
    pub fn email(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Email)
    }

    /// Create a phone field
    pub fn phone(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Phone)
    }

    /// Create a select field with a fixed option list
    pub fn select(
        name: impl Into<String>,
        label: impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self::new(name, label, FieldKind::Select(options))
    }

    /// Create a checkbox field
    pub fn checkbox(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(name, label, FieldKind::Checkbox)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn min_len(mut self, min: usize) -> Self {
        self.min_len = Some(min);
        self
    }

    pub fn must_match(mut self, other: impl Into<String>) -> Self {
        self.must_match = Some(other.into());
        self
    }

    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    pub fn secret(mut self) -> Self {
        self.secret = true;
        self
    }

    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = Some(text.into());
        self
    }
}

/// Check a schema at form-definition time.
///
/// Field names must be unique, `must_match` targets must exist, select
/// fields must offer at least one option, and text-only rules (`min_len`,
/// `must_match`) may not be attached to checkboxes. A failure here is a
/// defect in the form definition, not in user input.
pub fn check_schema(schema: &[FieldSchema]) -> Result<(), String> {
    for (i, field) in schema.iter().enumerate() {
        if field.name.is_empty() {
            return Err(format!("field #{} has an empty name", i));
        }
        if schema[..i].iter().any(|f| f.name == field.name) {
            return Err(format!("duplicate field name: {}", field.name));
        }
        if let Some(other) = &field.must_match {
            if !schema.iter().any(|f| &f.name == other) {
                return Err(format!(
                    "field {} must match unknown field {}",
                    field.name, other
                ));
            }
        }
        if let FieldKind::Select(options) = &field.kind {
            if options.is_empty() {
                return Err(format!("select field {} has no options", field.name));
            }
        }
        if matches!(field.kind, FieldKind::Checkbox) {
            if field.min_len.is_some() {
                return Err(format!("checkbox field {} cannot have min_len", field.name));
            }
            if field.must_match.is_some() {
                return Err(format!("checkbox field {} cannot have must_match", field.name));
            }
        }
    }
    Ok(())
}
