//! Page handler tests against in-memory and mocked stores.

use std::sync::Arc;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use rstest::rstest;

use crate::domain::ports::{CandidateStore, MockCandidateStore, PersistenceError};
use crate::domain::{ACKNOWLEDGEMENT_TEXT, AppShell, SUBMISSION_FAILED_TEXT};
use crate::inbound::http::{HttpState, configure};
use crate::outbound::memory::InMemoryCandidateStore;

const VALID: [(&str, &str); 6] = [
    ("jobRole", "ui-developer"),
    ("fullName", "Jordan Ellis"),
    ("email", "jordan@example.com"),
    ("address", "221B Baker Street, London"),
    ("qualification", "BSc Computer Science"),
    ("comments", "Excited to interview for this role."),
];

fn with_field<'a>(name: &str, value: &'a str) -> Vec<(&'static str, &'a str)> {
    VALID
        .iter()
        .map(|&(field, current)| {
            if field == name {
                (field, value)
            } else {
                (field, current)
            }
        })
        .collect()
}

async fn app_for(
    store: Arc<dyn CandidateStore>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    let shell = AppShell::mount(store).await;
    actix_test::init_service(
        App::new()
            .app_data(web::Data::new(HttpState::new(shell)))
            .configure(configure),
    )
    .await
}

async fn body_text(res: ServiceResponse) -> String {
    let bytes = actix_test::read_body(res).await;
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}

#[actix_web::test]
async fn index_renders_listed_records() {
    let store = InMemoryCandidateStore::new();
    store
        .create(&crate::domain::validate(&draft_from(&VALID)).expect("valid record"))
        .await
        .expect("seed");
    let app = app_for(Arc::new(store)).await;

    let res = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains("Interview Scheduled Candidates"));
    assert!(body.contains("<td>1</td>"));
    assert!(body.contains("<td>Jordan Ellis</td>"));
}

#[actix_web::test]
async fn invalid_submission_renders_errors_without_storing() {
    let store = InMemoryCandidateStore::new();
    let app = app_for(Arc::new(store.clone())).await;

    let req = actix_test::TestRequest::post()
        .uri("/candidates")
        .set_form(with_field("fullName", "Jo"))
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_text(res).await;
    assert!(body.contains("String must contain at least 5 character(s)"));
    assert!(body.contains(r#"value="Jo""#));
    assert!(store.is_empty());
}

#[actix_web::test]
async fn valid_submission_acknowledges_once_and_leaves_table_stale() {
    let store = InMemoryCandidateStore::new();
    let app = app_for(Arc::new(store.clone())).await;

    let req = actix_test::TestRequest::post()
        .uri("/candidates")
        .set_form(VALID.as_slice())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains(ACKNOWLEDGEMENT_TEXT));
    assert!(!body.contains("Jordan Ellis"));
    assert_eq!(store.len(), 1);

    let reload = actix_test::call_service(&app, actix_test::TestRequest::get().uri("/").to_request()).await;
    let body = body_text(reload).await;
    assert!(!body.contains(ACKNOWLEDGEMENT_TEXT));
    assert!(body.contains("<td>Jordan Ellis</td>"));
}

#[actix_web::test]
async fn failed_create_shows_diagnostic_and_resets_form() {
    let mut store = MockCandidateStore::new();
    store.expect_list().times(1).returning(|| Ok(Vec::new()));
    store
        .expect_create()
        .times(1)
        .returning(|_| Err(PersistenceError::connection("offline")));
    let app = app_for(Arc::new(store)).await;

    let req = actix_test::TestRequest::post()
        .uri("/candidates")
        .set_form(VALID.as_slice())
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    let body = body_text(res).await;
    assert!(body.contains(SUBMISSION_FAILED_TEXT));
    assert!(!body.contains(ACKNOWLEDGEMENT_TEXT));
    assert!(!body.contains("jordan@example.com"));
}

#[rstest]
#[case("email", "not-an-email", "Invalid email")]
#[case("comments", "too short", "String must contain at least 10 character(s)")]
#[actix_web::test]
async fn field_errors_are_shown_inline(
    #[case] field: &str,
    #[case] value: &str,
    #[case] message: &str,
) {
    let app = app_for(Arc::new(InMemoryCandidateStore::new())).await;

    let req = actix_test::TestRequest::post()
        .uri("/candidates")
        .set_form(with_field(field, value))
        .to_request();
    let body = body_text(actix_test::call_service(&app, req).await).await;

    assert!(body.contains(message));
}

#[actix_web::test]
async fn unknown_fields_are_ignored() {
    let store = InMemoryCandidateStore::new();
    let app = app_for(Arc::new(store.clone())).await;
    let mut fields = VALID.to_vec();
    fields.push(("favouriteColour", "green"));

    let req = actix_test::TestRequest::post()
        .uri("/candidates")
        .set_form(fields)
        .to_request();
    let res = actix_test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(store.len(), 1);
}

#[actix_web::test]
async fn reset_clears_retained_values() {
    let app = app_for(Arc::new(InMemoryCandidateStore::new())).await;
    let invalid = actix_test::TestRequest::post()
        .uri("/candidates")
        .set_form(with_field("fullName", "Jo"))
        .to_request();
    actix_test::call_service(&app, invalid).await;

    let res = actix_test::call_service(
        &app,
        actix_test::TestRequest::post().uri("/candidates/reset").to_request(),
    )
    .await;

    let body = body_text(res).await;
    assert!(!body.contains(r#"value="Jo""#));
    assert!(!body.contains("field-error"));
}

fn draft_from(fields: &[(&str, &str)]) -> crate::domain::CandidateDraft {
    fields
        .iter()
        .fold(crate::domain::CandidateDraft::new(), |draft, (name, value)| {
            draft.with(name.parse().expect("known field"), *value)
        })
}
