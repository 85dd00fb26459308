//! Submission Controller
//!
//! State machine driving a form through
//! `idle -> validating -> (error | submitting) -> (success | error)`.
//! Validation runs synchronously inside `begin_submit`; the submitting
//! interval is the one async suspend point, resolved by a single
//! `complete` call carrying the attempt token it was issued with.
//!
//! `FormModel` bundles schema, field state, and controller into one
//! headless engine that components hold in a signal.

use super::schema::{check_schema, FieldSchema};
use super::state::{FieldValue, FormState};
use super::validate::{validate, FieldError, ValidationResult};

/// Where a submission currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// Outcome of asking the controller to submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitDecision {
    /// Validation failed; per-field errors are set
    Rejected,
    /// Hand the snapshot to the sink and report back with the token
    Accepted { attempt: u32, snapshot: FormState },
    /// A submission is already in flight; nothing to do
    Busy,
}

/// What a sink completion did to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Succeeded,
    Failed,
    /// Stale attempt, detached view, or not submitting
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitController {
    phase: SubmitPhase,
    errors: ValidationResult,
    form_error: Option<String>,
    attempt: u32,
    detached: bool,
}

impl SubmitController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn error(&self, name: &str) -> Option<FieldError> {
        self.errors.get(name).copied()
    }

    pub fn errors(&self) -> &ValidationResult {
        &self.errors
    }

    /// Form-level failure message (sink error or timeout)
    pub fn form_error(&self) -> Option<&str> {
        self.form_error.as_deref()
    }

    /// Run validation and either reject with per-field errors or move to
    /// submitting. The snapshot is taken at the moment validation passes;
    /// later edits do not affect the in-flight attempt.
    pub fn begin_submit(&mut self, state: &FormState, schema: &[FieldSchema]) -> SubmitDecision {
        if self.detached
            || matches!(self.phase, SubmitPhase::Validating | SubmitPhase::Submitting)
        {
            return SubmitDecision::Busy;
        }

        self.form_error = None;
        self.phase = SubmitPhase::Validating;
        let errors = validate(state, schema);
        if !errors.is_empty() {
            self.errors = errors;
            self.phase = SubmitPhase::Error;
            return SubmitDecision::Rejected;
        }

        self.errors.clear();
        self.attempt += 1;
        self.phase = SubmitPhase::Submitting;
        SubmitDecision::Accepted {
            attempt: self.attempt,
            snapshot: state.clone(),
        }
    }

    /// Deliver the sink's result for a given attempt. Completions for stale
    /// attempts, or arriving after `detach`, are no-ops.
    pub fn complete(&mut self, attempt: u32, result: Result<(), String>) -> Completion {
        if self.detached || self.phase != SubmitPhase::Submitting || attempt != self.attempt {
            return Completion::Ignored;
        }
        match result {
            Ok(()) => {
                self.phase = SubmitPhase::Success;
                Completion::Succeeded
            }
            Err(message) => {
                self.form_error = Some(message);
                self.phase = SubmitPhase::Error;
                Completion::Failed
            }
        }
    }

    /// An edit clears that field's error; editing while the last submit
    /// failed returns the machine to idle for a fresh attempt.
    pub fn field_edited(&mut self, name: &str) {
        self.errors.remove(name);
        if matches!(self.phase, SubmitPhase::Error | SubmitPhase::Success) {
            self.form_error = None;
            self.phase = SubmitPhase::Idle;
        }
    }

    /// Success banner expired; return to idle if still showing this attempt
    pub fn dismiss_success(&mut self, attempt: u32) {
        if !self.detached && self.phase == SubmitPhase::Success && attempt == self.attempt {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// The owning view is being torn down; all later events are no-ops
    pub fn detach(&mut self) {
        self.detached = true;
    }
}

/// Headless form engine: schema + field state + submission state
#[derive(Debug, Clone, PartialEq)]
pub struct FormModel {
    schema: Vec<FieldSchema>,
    state: FormState,
    controller: SubmitController,
}

impl FormModel {
    pub fn new(schema: Vec<FieldSchema>) -> Self {
        if let Err(problem) = check_schema(&schema) {
            debug_assert!(false, "malformed form schema: {}", problem);
        }
        let state = FormState::from_schema(&schema);
        Self {
            schema,
            state,
            controller: SubmitController::new(),
        }
    }

    pub fn schema(&self) -> &[FieldSchema] {
        &self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn phase(&self) -> SubmitPhase {
        self.controller.phase()
    }

    pub fn error(&self, name: &str) -> Option<FieldError> {
        self.controller.error(name)
    }

    pub fn form_error(&self) -> Option<&str> {
        self.controller.form_error()
    }

    pub fn text(&self, name: &str) -> String {
        self.state.text(name).to_string()
    }

    pub fn flag(&self, name: &str) -> bool {
        self.state.flag(name)
    }

    pub fn set_field(&mut self, name: &str, value: FieldValue) {
        self.state.set(name, value);
        self.controller.field_edited(name);
    }

    pub fn submit(&mut self) -> SubmitDecision {
        self.controller.begin_submit(&self.state, &self.schema)
    }

    /// On success the fields reset to schema defaults; on failure the
    /// entered values are retained for retry.
    pub fn complete(&mut self, attempt: u32, result: Result<(), String>) -> Completion {
        let outcome = self.controller.complete(attempt, result);
        if outcome == Completion::Succeeded {
            self.state.reset(&self.schema);
        }
        outcome
    }

    pub fn dismiss_success(&mut self, attempt: u32) {
        self.controller.dismiss_success(attempt);
    }

    pub fn detach(&mut self) {
        self.controller.detach();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::schema::FieldSchema;

    fn schema() -> Vec<FieldSchema> {
        vec![
            FieldSchema::text("name", "Name").required(),
            FieldSchema::email("email", "Email").required(),
        ]
    }

    fn valid_form() -> FormModel {
        let mut form = FormModel::new(schema());
        form.set_field("name", FieldValue::Text("Ada".into()));
        form.set_field("email", FieldValue::Text("ada@example.org".into()));
        form
    }

    fn accepted_attempt(form: &mut FormModel) -> u32 {
        match form.submit() {
            SubmitDecision::Accepted { attempt, .. } => attempt,
            other => panic!("expected acceptance, got {:?}", other),
        }
    }

    #[test]
    fn test_happy_path_runs_idle_to_success_and_resets() {
        let mut form = valid_form();
        assert_eq!(form.phase(), SubmitPhase::Idle);

        let attempt = accepted_attempt(&mut form);
        assert_eq!(form.phase(), SubmitPhase::Submitting);

        assert_eq!(form.complete(attempt, Ok(())), Completion::Succeeded);
        assert_eq!(form.phase(), SubmitPhase::Success);
        assert_eq!(*form.state(), FormState::from_schema(&schema()));
    }

    #[test]
    fn test_rejected_submit_keeps_input_and_reports_same_errors() {
        let mut form = FormModel::new(schema());
        form.set_field("email", FieldValue::Text("not-an-email".into()));
        let before = form.state().clone();

        assert_eq!(form.submit(), SubmitDecision::Rejected);
        assert_eq!(form.phase(), SubmitPhase::Error);
        assert_eq!(form.error("name"), Some(FieldError::Required));
        assert_eq!(form.error("email"), Some(FieldError::InvalidFormat));
        assert_eq!(*form.state(), before);

        // Unchanged invalid input reproduces the same errors on resubmit
        assert_eq!(form.submit(), SubmitDecision::Rejected);
        assert_eq!(form.error("name"), Some(FieldError::Required));
        assert_eq!(form.error("email"), Some(FieldError::InvalidFormat));
        assert_eq!(*form.state(), before);
    }

    #[test]
    fn test_editing_a_field_clears_its_error_and_returns_to_idle() {
        let mut form = FormModel::new(schema());
        assert_eq!(form.submit(), SubmitDecision::Rejected);
        assert_eq!(form.phase(), SubmitPhase::Error);

        form.set_field("name", FieldValue::Text("Ada".into()));
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.error("name"), None);
        // The untouched field keeps its inline error until edited
        assert_eq!(form.error("email"), Some(FieldError::Required));
    }

    #[test]
    fn test_sink_failure_retains_input_for_retry() {
        let mut form = valid_form();
        let attempt = accepted_attempt(&mut form);
        let entered = form.state().clone();

        assert_eq!(
            form.complete(attempt, Err("service unavailable".into())),
            Completion::Failed
        );
        assert_eq!(form.phase(), SubmitPhase::Error);
        assert_eq!(form.form_error(), Some("service unavailable"));
        assert_eq!(*form.state(), entered);

        // Retry succeeds and clears the failure message
        let retry = accepted_attempt(&mut form);
        assert!(retry > attempt);
        assert_eq!(form.form_error(), None);
        assert_eq!(form.complete(retry, Ok(())), Completion::Succeeded);
    }

    #[test]
    fn test_double_submit_while_in_flight_is_busy() {
        let mut form = valid_form();
        let attempt = accepted_attempt(&mut form);
        assert_eq!(form.submit(), SubmitDecision::Busy);
        assert_eq!(form.complete(attempt, Ok(())), Completion::Succeeded);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = valid_form();
        let first = accepted_attempt(&mut form);
        // Timeout failed the first attempt; the user retried
        assert_eq!(form.complete(first, Err("request timed out".into())), Completion::Failed);
        form.set_field("name", FieldValue::Text("Ada L.".into()));
        let second = accepted_attempt(&mut form);

        // The first attempt's late sink completion must not finish the second
        assert_eq!(form.complete(first, Ok(())), Completion::Ignored);
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert_eq!(form.complete(second, Ok(())), Completion::Succeeded);
    }

    #[test]
    fn test_completion_after_detach_is_a_no_op() {
        let mut form = valid_form();
        let attempt = accepted_attempt(&mut form);
        let in_flight = form.state().clone();

        form.detach();
        assert_eq!(form.complete(attempt, Ok(())), Completion::Ignored);
        assert_eq!(form.phase(), SubmitPhase::Submitting);
        assert_eq!(*form.state(), in_flight);
    }

    #[test]
    fn test_resubmit_after_success_is_a_fresh_attempt() {
        let mut form = valid_form();
        let first = accepted_attempt(&mut form);
        form.complete(first, Ok(()));
        form.dismiss_success(first);
        assert_eq!(form.phase(), SubmitPhase::Idle);
        assert_eq!(form.form_error(), None);

        form.set_field("name", FieldValue::Text("Grace".into()));
        form.set_field("email", FieldValue::Text("grace@example.org".into()));
        let second = accepted_attempt(&mut form);
        assert!(second > first);
        assert_eq!(form.complete(second, Ok(())), Completion::Succeeded);
    }

    #[test]
    fn test_stale_banner_dismissal_does_not_touch_new_attempt() {
        let mut form = valid_form();
        let first = accepted_attempt(&mut form);
        form.complete(first, Ok(()));

        form.set_field("name", FieldValue::Text("Grace".into()));
        form.set_field("email", FieldValue::Text("grace@example.org".into()));
        let second = accepted_attempt(&mut form);
        form.complete(second, Ok(()));

        // First attempt's banner timer fires late
        form.dismiss_success(first);
        assert_eq!(form.phase(), SubmitPhase::Success);
        form.dismiss_success(second);
        assert_eq!(form.phase(), SubmitPhase::Idle);
    }
}
