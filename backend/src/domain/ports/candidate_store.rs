//! Port for the remote candidate document store.
//!
//! The store is append-only from this application's point of view: records
//! can be created and listed, never updated or deleted. Adapters own every
//! transport concern (endpoints, credentials, document encoding).

use async_trait::async_trait;

use crate::domain::{CandidateRecord, RecordId};

use super::define_port_error;

define_port_error! {
    /// Failures raised by candidate store adapters.
    pub enum PersistenceError {
        /// The store could not be reached.
        Connection { message: String } =>
            "candidate store unreachable: {message}",
        /// The store answered but refused the request.
        Rejected { status: u16, message: String } =>
            "candidate store rejected the request with status {status}: {message}",
        /// The store's response could not be decoded.
        Decode { message: String } =>
            "candidate store response could not be decoded: {message}",
    }
}

/// Persistence gateway for candidate records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateStore: Send + Sync {
    /// Append `record` to the collection and return its new identifier.
    async fn create(&self, record: &CandidateRecord) -> Result<RecordId, PersistenceError>;

    /// Return every stored record in store-defined order.
    async fn list(&self) -> Result<Vec<CandidateRecord>, PersistenceError>;
}
