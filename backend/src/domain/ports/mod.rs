//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod candidate_store;

#[cfg(test)]
pub use candidate_store::MockCandidateStore;
pub use candidate_store::{CandidateStore, PersistenceError};
