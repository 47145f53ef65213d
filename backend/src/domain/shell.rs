//! Application shell: composes the form, the record cache and the store.
//!
//! The shell loads the cache once when mounted. A successful create does not
//! touch the cache, neither appending the new record nor listing again, so
//! the displayed records reflect the last successful load until the next
//! mount.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info, warn};

use super::cache::RecordCache;
use super::candidate::{CandidateField, CandidateRecord, RecordId};
use super::form::{FormController, SubmitHandler, SubmitOutcome};
use super::validation::FormFieldError;
use super::ports::{CandidateStore, PersistenceError};

/// Text of the acknowledgement shown after a successful create.
pub const ACKNOWLEDGEMENT_TEXT: &str = "Added as you said!";
/// Text of the diagnostic shown after a failed create.
pub const SUBMISSION_FAILED_TEXT: &str = "Could not save the candidate. Please try again.";

/// One-shot notice raised by a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The record was stored under `id`.
    Acknowledged {
        /// Identifier assigned by the store.
        id: RecordId,
    },
    /// The store rejected or never received the record.
    SubmissionFailed,
}

impl Notice {
    /// User-facing text for the notice.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Acknowledged { .. } => ACKNOWLEDGEMENT_TEXT,
            Self::SubmissionFailed => SUBMISSION_FAILED_TEXT,
        }
    }

    /// Whether the notice acknowledges a stored record.
    pub fn is_acknowledgement(&self) -> bool {
        matches!(self, Self::Acknowledged { .. })
    }
}

struct StoreSubmission<'a, S: ?Sized> {
    store: &'a S,
}

#[async_trait]
impl<'a, S> SubmitHandler for StoreSubmission<'a, S>
where
    S: CandidateStore + ?Sized,
{
    async fn create_record(&self, record: CandidateRecord) -> Result<RecordId, PersistenceError> {
        match self.store.create(&record).await {
            Ok(id) => {
                info!(record_id = %id, "candidate record created");
                Ok(id)
            }
            Err(err) => {
                error!(error = %err, "failed to create candidate record");
                Err(err)
            }
        }
    }
}

/// Owner of the record cache, the form state and the pending notice.
pub struct AppShell<S: ?Sized> {
    store: Arc<S>,
    cache: RecordCache,
    form: FormController,
    notice: Option<Notice>,
}

impl<S> AppShell<S>
where
    S: CandidateStore + ?Sized,
{
    /// Build an unmounted shell with an empty cache.
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            cache: RecordCache::new(),
            form: FormController::new(),
            notice: None,
        }
    }

    /// Build a shell and load the cache once.
    ///
    /// A failed listing is logged and leaves the cache empty.
    pub async fn mount(store: Arc<S>) -> Self {
        let mut shell = Self::new(store);
        // Failure is already logged by `load` and leaves the empty cache.
        let _ = shell.load().await;
        shell
    }

    /// Start over as a fresh page load: clear the form and any pending
    /// notice, then list again.
    ///
    /// A failed listing keeps the previous snapshot.
    pub async fn remount(&mut self) {
        self.form.reset();
        self.notice = None;
        let _ = self.load().await;
    }

    /// List the store into the cache.
    ///
    /// On failure the error is logged, the cache is left untouched and the
    /// error is returned.
    pub async fn load(&mut self) -> Result<usize, PersistenceError> {
        match self.store.list().await {
            Ok(records) => {
                let count = records.len();
                if count == 0 {
                    info!("no candidate records exist");
                }
                self.cache.replace(records);
                Ok(count)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    cached = self.cache.len(),
                    "failed to list candidate records; keeping cached snapshot"
                );
                Err(err)
            }
        }
    }

    /// Forward a user edit to the form.
    pub fn set_field(&mut self, field: CandidateField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    /// Clear the form without submitting.
    pub fn reset_form(&mut self) {
        self.form.reset();
    }

    /// Submit the form.
    ///
    /// A valid form causes exactly one create call. The resulting notice is
    /// held until [`Self::take_notice`] consumes it. The cache is never
    /// modified here.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let handler = StoreSubmission {
            store: self.store.as_ref(),
        };
        let outcome = self.form.submit(&handler).await;
        match &outcome {
            SubmitOutcome::Invalid(errors) => {
                for FormFieldError { field, message } in errors.to_field_errors() {
                    debug!(%field, %message, "candidate field failed validation");
                }
                info!(
                    failing_fields = errors.len(),
                    "candidate submission rejected by validation"
                );
            }
            SubmitOutcome::Created(id) => {
                self.notice = Some(Notice::Acknowledged { id: id.clone() });
            }
            SubmitOutcome::Failed(_) => {
                self.notice = Some(Notice::SubmissionFailed);
            }
        }
        outcome
    }

    /// Consume the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    /// Pending notice without consuming it.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Records to display.
    pub fn records(&self) -> &[CandidateRecord] {
        self.cache.records()
    }

    /// The record cache.
    pub fn cache(&self) -> &RecordCache {
        &self.cache
    }

    /// The form state.
    pub fn form(&self) -> &FormController {
        &self.form
    }
}
