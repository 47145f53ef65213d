//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data`. The shell sits behind an
//! async mutex, so page loads and submissions are applied one at a time.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::AppShell;
use crate::domain::ports::CandidateStore;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub shell: Arc<Mutex<AppShell<dyn CandidateStore>>>,
}

impl HttpState {
    /// Wrap an already mounted shell.
    pub fn new(shell: AppShell<dyn CandidateStore>) -> Self {
        Self {
            shell: Arc::new(Mutex::new(shell)),
        }
    }
}
