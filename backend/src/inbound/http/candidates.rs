//! Candidate page handlers.
//!
//! ```text
//! GET  /                  fresh page load: reset the form, list, render
//! POST /candidates        apply posted fields, submit, render (no re-list)
//! POST /candidates/reset  clear the form, render
//! ```

use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::{HttpResponse, get, post, web};
use tracing::debug;

use super::error::PageResult;
use super::page::render_page;
use super::state::HttpState;
use crate::domain::{CandidateField, SubmitOutcome};

/// Posted `name=value` pairs in document order.
pub type PostedFields = Vec<(String, String)>;

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .insert_header(ContentType::html())
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .body(body)
}

/// Treat the request as a fresh mount of the page.
#[get("/")]
pub async fn index(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let mut shell = state.shell.lock().await;
    shell.remount().await;
    let body = render_page(&mut *shell)?;
    Ok(html(StatusCode::OK, body))
}

/// Apply the posted fields and submit the form.
///
/// Invalid submissions answer 422 with inline errors. Otherwise the page is
/// rendered with the acknowledgement or the failure notice and the record
/// table as it was last listed.
#[post("/candidates")]
pub async fn submit(
    state: web::Data<HttpState>,
    posted: web::Form<PostedFields>,
) -> PageResult<HttpResponse> {
    let mut shell = state.shell.lock().await;
    for (name, value) in posted.into_inner() {
        match name.parse::<CandidateField>() {
            Ok(field) => shell.set_field(field, value),
            Err(err) => debug!(error = %err, "ignoring posted field"),
        }
    }
    let status = match shell.submit().await {
        SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        SubmitOutcome::Created(_) | SubmitOutcome::Failed(_) => StatusCode::OK,
    };
    let body = render_page(&mut *shell)?;
    Ok(html(status, body))
}

/// Clear the form without submitting.
#[post("/candidates/reset")]
pub async fn reset(state: web::Data<HttpState>) -> PageResult<HttpResponse> {
    let mut shell = state.shell.lock().await;
    shell.reset_form();
    let body = render_page(&mut *shell)?;
    Ok(html(StatusCode::OK, body))
}

#[cfg(test)]
mod tests;
