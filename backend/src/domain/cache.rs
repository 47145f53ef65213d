//! Read-only snapshot of the records last returned by the store.

use chrono::{DateTime, Utc};

use super::candidate::CandidateRecord;

/// Records from the most recent successful list call.
///
/// The cache is not a live mirror: it changes only when [`Self::replace`] is
/// called with a fresh listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCache {
    records: Vec<CandidateRecord>,
    refreshed_at: Option<DateTime<Utc>>,
}

impl RecordCache {
    /// An empty cache that has never been loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a fresh listing.
    pub fn replace(&mut self, records: Vec<CandidateRecord>) {
        self.records = records;
        self.refreshed_at = Some(Utc::now());
    }

    /// Cached records in store order.
    pub fn records(&self) -> &[CandidateRecord] {
        &self.records
    }

    /// Number of cached records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// When the last successful listing was stored, if ever.
    pub fn refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.refreshed_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::StoredFields;
    use rstest::rstest;

    #[rstest]
    fn new_cache_was_never_loaded() {
        let cache = RecordCache::new();
        assert!(cache.is_empty());
        assert!(cache.refreshed_at().is_none());
    }

    #[rstest]
    fn replace_keeps_store_order_and_stamps_refresh() {
        let mut cache = RecordCache::new();
        let first = CandidateRecord::from_stored(StoredFields {
            full_name: "Zed Zero".to_owned(),
            ..StoredFields::default()
        });
        let second = CandidateRecord::from_stored(StoredFields {
            full_name: "Amy Able".to_owned(),
            ..StoredFields::default()
        });

        cache.replace(vec![first.clone(), second.clone()]);

        assert_eq!(cache.records(), [first, second].as_slice());
        assert!(cache.refreshed_at().is_some());
    }

    #[rstest]
    fn empty_listing_still_counts_as_loaded() {
        let mut cache = RecordCache::new();
        cache.replace(Vec::new());

        assert_eq!(cache.len(), 0);
        assert!(cache.refreshed_at().is_some());
    }
}
