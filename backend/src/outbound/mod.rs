//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **firestore**: REST-backed candidate store for a Firestore collection
//! - **memory**: in-process candidate store for local runs and tests
//!
//! Adapters are thin translators that convert between domain types and
//! infrastructure-specific representations. They contain no business logic.

pub mod firestore;
pub mod memory;
