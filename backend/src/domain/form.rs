//! Candidate form controller.
//!
//! The controller owns the raw field values and the error set produced by
//! the last submission attempt. Validation runs on submit only; editing a
//! field never re-validates it.

use async_trait::async_trait;

use super::candidate::{CandidateField, CandidateRecord, RecordId};
use super::ports::PersistenceError;
use super::validation::{CandidateDraft, FieldErrors, validate};

/// Receives validated records from [`FormController::submit`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitHandler: Send + Sync {
    /// Persist `record`, returning the identifier the store assigned.
    async fn create_record(&self, record: CandidateRecord) -> Result<RecordId, PersistenceError>;
}

/// Result of one [`FormController::submit`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent and the values were kept.
    Invalid(FieldErrors),
    /// The record was created; the form has been reset.
    Created(RecordId),
    /// The create attempt failed; the form has been reset anyway.
    Failed(PersistenceError),
}

/// State holder for the six candidate fields and their errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormController {
    values: CandidateDraft,
    errors: FieldErrors,
}

impl FormController {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the raw value of `field` without validating it.
    pub fn set_field(&mut self, field: CandidateField, value: impl Into<String>) {
        self.values.set(field, value);
    }

    /// Current raw values.
    pub fn values(&self) -> &CandidateDraft {
        &self.values
    }

    /// Raw value of `field`.
    pub fn value(&self, field: CandidateField) -> &str {
        self.values.get(field)
    }

    /// Errors from the last rejected submission.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Error message for `field`, if it currently fails.
    pub fn error(&self, field: CandidateField) -> Option<&str> {
        self.errors.get(field)
    }

    /// Whether both values and errors are empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty() && self.errors.is_empty()
    }

    /// Clear values and errors.
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }

    /// Validate the current values and hand a valid record to `handler`.
    ///
    /// On validation failure the error set is replaced and `handler` is not
    /// called. Otherwise exactly one `create_record` call is made and, once
    /// it completes, the form is reset whether or not it succeeded.
    pub async fn submit<H>(&mut self, handler: &H) -> SubmitOutcome
    where
        H: SubmitHandler + ?Sized,
    {
        let record = match validate(&self.values) {
            Ok(record) => record,
            Err(errors) => {
                self.errors = errors.clone();
                return SubmitOutcome::Invalid(errors);
            }
        };

        self.errors.clear();
        let result = handler.create_record(record).await;
        self.reset();
        match result {
            Ok(id) => SubmitOutcome::Created(id),
            Err(error) => SubmitOutcome::Failed(error),
        }
    }
}
