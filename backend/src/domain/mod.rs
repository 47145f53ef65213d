//! Domain model for the candidate intake form.
//!
//! Purpose: validate candidate submissions, hand valid records to the
//! persistence port, and hold the snapshot of stored records the page
//! displays. Nothing here knows about HTTP or the concrete document store.
//!
//! Public surface:
//! - CandidateRecord, CandidateField, RecordId — the persisted entity.
//! - validate, CandidateDraft, FieldErrors — the validation schema.
//! - FormController, SubmitOutcome — form state and the submit flow.
//! - AppShell, RecordCache, Notice — composition and the refresh policy.

pub mod cache;
pub mod candidate;
pub mod form;
pub mod ports;
pub mod shell;
pub mod validation;

pub use self::cache::RecordCache;
pub use self::candidate::{
    CandidateField, CandidateRecord, JOB_ROLE_OPTIONS, JobRoleOption, RecordId, StoredFields,
    UnknownFieldError,
};
pub use self::form::{FormController, SubmitHandler, SubmitOutcome};
pub use self::shell::{ACKNOWLEDGEMENT_TEXT, AppShell, Notice, SUBMISSION_FAILED_TEXT};
pub use self::validation::{
    CANDIDATE_SCHEMA, CandidateDraft, FieldErrors, FieldRule, FormFieldError, validate,
};
