//! In-process candidate store.
//!
//! Keeps documents in insertion order behind a mutex. Used when no remote
//! project is configured and by behaviour tests that need a real append-only
//! store rather than a mock.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{CandidateStore, PersistenceError};
use crate::domain::{CandidateRecord, RecordId};

/// Append-only store held in memory.
#[derive(Debug, Default, Clone)]
pub struct InMemoryCandidateStore {
    documents: Arc<Mutex<Vec<(RecordId, CandidateRecord)>>>,
}

impl InMemoryCandidateStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-populated with `records`, as if written out-of-band.
    pub fn with_records(records: impl IntoIterator<Item = CandidateRecord>) -> Self {
        let documents = records
            .into_iter()
            .map(|record| (new_id(), record))
            .collect();
        Self {
            documents: Arc::new(Mutex::new(documents)),
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn new_id() -> RecordId {
    RecordId::new(Uuid::new_v4().simple().to_string())
}

#[async_trait]
impl CandidateStore for InMemoryCandidateStore {
    async fn create(&self, record: &CandidateRecord) -> Result<RecordId, PersistenceError> {
        let id = new_id();
        self.documents
            .lock()
            .map_err(|_| PersistenceError::connection("in-memory store lock poisoned"))?
            .push((id.clone(), record.clone()));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, PersistenceError> {
        let documents = self
            .documents
            .lock()
            .map_err(|_| PersistenceError::connection("in-memory store lock poisoned"))?;
        Ok(documents.iter().map(|(_, record)| record.clone()).collect())
    }
}
