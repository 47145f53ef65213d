//! Candidate validation schema.
//!
//! The schema is a table of per-field rules evaluated eagerly over the whole
//! draft. Every field is checked independently, so a single pass reports
//! every failing field at once rather than stopping at the first.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;
use validator::ValidateEmail;

use super::candidate::{CandidateField, CandidateRecord, StoredFields};

/// Rule applied to a single field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Any string, including the empty string.
    AnyText,
    /// Length in characters must fall within `min..=max`.
    Length {
        /// Inclusive lower bound.
        min: usize,
        /// Inclusive upper bound.
        max: usize,
    },
    /// Must be a syntactically valid email address.
    Email,
}

impl FieldRule {
    /// Check `value`, returning the message to show when it fails.
    pub fn check(self, value: &str) -> Option<String> {
        match self {
            Self::AnyText => None,
            Self::Length { min, max } => {
                let length = value.chars().count();
                if length < min {
                    Some(format!("String must contain at least {min} character(s)"))
                } else if length > max {
                    Some(format!("String must contain at most {max} character(s)"))
                } else {
                    None
                }
            }
            Self::Email => (!is_email(value)).then(|| "Invalid email".to_owned()),
        }
    }
}

// Local part of letters, digits and `_'+-.` not ending in a dot; one or more
// dotted domain labels; an alphabetic top-level domain of two or more letters.
static EMAIL_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .unwrap_or_else(|error| unreachable!("email pattern is valid: {error}"))
});

/// RFC syntax check narrowed to the dotted-domain shape browsers submit.
///
/// Rejects a leading dot, consecutive dots anywhere, single-label and
/// IP-literal domains, and one-letter top-level domains.
fn is_email(value: &str) -> bool {
    value.validate_email()
        && !value.starts_with('.')
        && !value.contains("..")
        && EMAIL_SHAPE.is_match(value)
}

/// Rule table for candidate submissions, in form order.
pub const CANDIDATE_SCHEMA: [(CandidateField, FieldRule); 6] = [
    (CandidateField::JobRole, FieldRule::AnyText),
    (
        CandidateField::FullName,
        FieldRule::Length { min: 5, max: 120 },
    ),
    (CandidateField::Email, FieldRule::Email),
    (
        CandidateField::Address,
        FieldRule::Length { min: 10, max: 120 },
    ),
    (
        CandidateField::Qualification,
        FieldRule::Length { min: 10, max: 120 },
    ),
    (
        CandidateField::Comments,
        FieldRule::Length { min: 10, max: 2000 },
    ),
];

/// Raw, unvalidated form values keyed by field.
///
/// A field that was never set reads as the empty string, so absence fails
/// the same length rule an empty value would.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateDraft {
    values: BTreeMap<CandidateField, String>,
}

impl CandidateDraft {
    /// An empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used by tests and adapters.
    #[must_use]
    pub fn with(mut self, field: CandidateField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Replace the raw value of one field.
    pub fn set(&mut self, field: CandidateField, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    /// Raw value of one field; empty when unset.
    pub fn get(&self, field: CandidateField) -> &str {
        self.values.get(&field).map_or("", String::as_str)
    }

    /// Whether every field is empty or unset.
    pub fn is_empty(&self) -> bool {
        self.values.values().all(String::is_empty)
    }

    /// Drop every value.
    pub fn clear(&mut self) {
        self.values.clear();
    }
}

/// A single field failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldError {
    /// Failing field.
    pub field: CandidateField,
    /// Message shown beneath the field.
    pub message: String,
}

/// Every failing field of one validation pass, mapped to its message.
///
/// This is the validation error kind: it blocks submission entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} candidate field(s) failed validation", .errors.len())]
pub struct FieldErrors {
    errors: BTreeMap<CandidateField, String>,
}

impl FieldErrors {
    /// No errors.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: CandidateField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: CandidateField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    /// Whether `field` failed.
    pub fn contains(&self, field: CandidateField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Whether no field failed.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Failing fields in form order.
    pub fn fields(&self) -> impl Iterator<Item = CandidateField> + '_ {
        self.errors.keys().copied()
    }

    /// Failures as standalone values, in form order.
    pub fn to_field_errors(&self) -> Vec<FormFieldError> {
        self.errors
            .iter()
            .map(|(field, message)| FormFieldError {
                field: *field,
                message: message.clone(),
            })
            .collect()
    }

    /// Forget every failure.
    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// Run the candidate schema over `draft`.
///
/// Returns the typed record when every rule passes; otherwise returns the
/// message for every failing field. Values are carried over verbatim.
///
/// # Examples
/// ```
/// use candidate_intake::domain::{CandidateDraft, CandidateField, validate};
///
/// let draft = CandidateDraft::new().with(CandidateField::FullName, "Al");
/// let errors = validate(&draft).expect_err("short name and empty fields fail");
/// assert!(errors.contains(CandidateField::FullName));
/// assert!(!errors.contains(CandidateField::JobRole));
/// ```
pub fn validate(draft: &CandidateDraft) -> Result<CandidateRecord, FieldErrors> {
    let mut errors = FieldErrors::new();
    let mut fields = StoredFields::default();

    for (field, rule) in CANDIDATE_SCHEMA {
        let value = draft.get(field);
        if let Some(message) = rule.check(value) {
            errors.insert(field, message);
        } else {
            value.clone_into(fields.slot_mut(field));
        }
    }

    if errors.is_empty() {
        Ok(CandidateRecord::from_stored(fields))
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests;
