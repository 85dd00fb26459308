//! Headless Form Engine
//!
//! Schema-declared fields, a snapshot value store, a pure validator, and
//! the submission state machine. No rendering here; components wire these
//! into signals.

mod controller;
mod schema;
mod state;
mod validate;

pub use controller::{Completion, FormModel, SubmitController, SubmitDecision, SubmitPhase};
pub use schema::{check_schema, FieldKind, FieldSchema};
pub use state::{FieldValue, FormState};
pub use validate::{validate, FieldError, ValidationResult};
