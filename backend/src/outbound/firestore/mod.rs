//! Firestore outbound adapter.
//!
//! This module provides a thin REST implementation of the `CandidateStore`
//! port against a single Firestore collection.

mod dto;
mod http_store;

pub use http_store::{
    DEFAULT_FIRESTORE_BASE_URL, FirestoreCandidateStore, FirestoreSetupError, FirestoreTarget,
};
