//! HTTP inbound adapter serving the candidate page and health probes.

pub mod candidates;
pub mod error;
pub mod health;
pub mod page;
pub mod record_table;
pub mod state;
pub mod widgets;

use actix_web::web;

pub use error::{PageError, PageResult};
pub use health::HealthState;
pub use state::HttpState;

/// Register the page routes. Health probes are registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(candidates::index)
        .service(candidates::reset)
        .service(candidates::submit);
}
