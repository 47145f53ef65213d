//! HTTP adapter mapping for page failures.
//!
//! Store failures never reach this layer: the shell turns them into notices.
//! What remains is template rendering, which maps to a plain 500 carrying the
//! request's trace identifier.

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;
use tracing::error;

use crate::middleware::TraceId;

/// Convenient result alias for page handlers.
pub type PageResult<T> = Result<T, PageError>;

/// Errors raised while producing a page.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("failed to render page: {0}")]
    Render(#[from] askama::Error),
}

impl ResponseError for PageError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        let trace_id = TraceId::current();
        error!(
            error = %self,
            trace_id = trace_id.map(|id| id.to_string()),
            "page rendering failed"
        );
        let body = match trace_id {
            Some(id) => format!("Internal server error (trace {id})"),
            None => "Internal server error".to_owned(),
        };
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::plaintext())
            .insert_header((header::CACHE_CONTROL, "no-store"))
            .body(body)
    }
}
