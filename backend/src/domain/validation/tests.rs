//! Tests for the candidate validation schema.

use super::*;
use rstest::{fixture, rstest};

#[fixture]
fn valid_draft() -> CandidateDraft {
    CandidateDraft::new()
        .with(CandidateField::JobRole, "ui-developer")
        .with(CandidateField::FullName, "Jordan Ellis")
        .with(CandidateField::Email, "jordan@example.com")
        .with(CandidateField::Address, "221B Baker Street, London")
        .with(CandidateField::Qualification, "BSc Computer Science")
        .with(CandidateField::Comments, "Excited to interview for this role.")
}

#[rstest]
fn valid_draft_produces_record_with_verbatim_values(valid_draft: CandidateDraft) {
    let record = validate(&valid_draft).expect("valid draft");

    for field in CandidateField::ALL {
        assert_eq!(record.field(field), valid_draft.get(field), "{field}");
    }
}

#[rstest]
fn short_full_name_fails_only_that_field(valid_draft: CandidateDraft) {
    let draft = valid_draft.with(CandidateField::FullName, "Al");

    let errors = validate(&draft).expect_err("short name");
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.get(CandidateField::FullName),
        Some("String must contain at least 5 character(s)")
    );
}

#[rstest]
fn malformed_email_fails_only_that_field(valid_draft: CandidateDraft) {
    let draft = valid_draft.with(CandidateField::Email, "not-an-email");

    let errors = validate(&draft).expect_err("bad email");
    assert_eq!(errors.fields().collect::<Vec<_>>(), vec![CandidateField::Email]);
    assert_eq!(errors.get(CandidateField::Email), Some("Invalid email"));
}

#[rstest]
#[case(CandidateField::FullName, 4, false)]
#[case(CandidateField::FullName, 5, true)]
#[case(CandidateField::FullName, 120, true)]
#[case(CandidateField::FullName, 121, false)]
#[case(CandidateField::Address, 9, false)]
#[case(CandidateField::Address, 10, true)]
#[case(CandidateField::Address, 121, false)]
#[case(CandidateField::Qualification, 9, false)]
#[case(CandidateField::Qualification, 120, true)]
#[case(CandidateField::Comments, 9, false)]
#[case(CandidateField::Comments, 2000, true)]
#[case(CandidateField::Comments, 2001, false)]
fn length_bounds_are_inclusive(
    valid_draft: CandidateDraft,
    #[case] field: CandidateField,
    #[case] length: usize,
    #[case] accepted: bool,
) {
    let draft = valid_draft.with(field, "x".repeat(length));

    let result = validate(&draft);
    assert_eq!(result.is_ok(), accepted, "{field} with {length} characters");
    if let Err(errors) = result {
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
    }
}

#[rstest]
fn too_long_message_names_the_maximum(valid_draft: CandidateDraft) {
    let draft = valid_draft.with(CandidateField::Comments, "y".repeat(2001));

    let errors = validate(&draft).expect_err("comments too long");
    assert_eq!(
        errors.get(CandidateField::Comments),
        Some("String must contain at most 2000 character(s)")
    );
}

#[rstest]
fn length_counts_characters_not_bytes(valid_draft: CandidateDraft) {
    // Five two-byte characters.
    let draft = valid_draft.with(CandidateField::FullName, "ééééé");

    assert!(validate(&draft).is_ok());
}

#[rstest]
#[case("")]
#[case("not-a-known-role")]
fn job_role_accepts_any_string(valid_draft: CandidateDraft, #[case] role: &str) {
    let draft = valid_draft.with(CandidateField::JobRole, role);

    let record = validate(&draft).expect("job role is unconstrained");
    assert_eq!(record.job_role(), role);
}

#[rstest]
fn empty_draft_reports_every_constrained_field_together() {
    let errors = validate(&CandidateDraft::new()).expect_err("empty draft");

    assert_eq!(
        errors.fields().collect::<Vec<_>>(),
        vec![
            CandidateField::FullName,
            CandidateField::Email,
            CandidateField::Address,
            CandidateField::Qualification,
            CandidateField::Comments,
        ]
    );
    assert_eq!(errors.to_string(), "5 candidate field(s) failed validation");
}

#[rstest]
fn values_are_not_trimmed(valid_draft: CandidateDraft) {
    let draft = valid_draft.with(CandidateField::FullName, "  Jo  ");

    let record = validate(&draft).expect("whitespace counts towards length");
    assert_eq!(record.full_name(), "  Jo  ");
}

#[rstest]
fn schema_covers_every_field_once() {
    let fields: Vec<_> = CANDIDATE_SCHEMA.iter().map(|(field, _)| *field).collect();
    assert_eq!(fields, CandidateField::ALL.to_vec());
}

#[rstest]
#[case("jordan@localhost")]
#[case("jordan@[127.0.0.1]")]
#[case("jordan@example.c")]
#[case(".jordan@example.com")]
#[case("jor..dan@example.com")]
#[case("jordan.@example.com")]
#[case("jordan@-example.com")]
#[case("jordan@example..com")]
#[case("jordan@example.c0m")]
fn email_requires_dotted_domain_with_alphabetic_tld(
    valid_draft: CandidateDraft,
    #[case] email: &str,
) {
    let draft = valid_draft.with(CandidateField::Email, email);

    let errors = validate(&draft).expect_err("email should be rejected");
    assert_eq!(errors.get(CandidateField::Email), Some("Invalid email"));
    assert_eq!(errors.len(), 1);
}

#[rstest]
#[case("jordan@example.com")]
#[case("Jordan.Ellis@Example.CO.UK")]
#[case("o'neil+jobs@mail.example.org")]
#[case("j_e-1@sub-domain.example.io")]
fn email_accepts_common_addresses(valid_draft: CandidateDraft, #[case] email: &str) {
    let draft = valid_draft.with(CandidateField::Email, email);

    let record = validate(&draft).expect("email should be accepted");
    assert_eq!(record.email(), email);
}

#[rstest]
fn field_errors_expose_standalone_entries() {
    let mut errors = FieldErrors::new();
    errors.insert(CandidateField::Email, "Invalid email");

    assert_eq!(
        errors.to_field_errors(),
        vec![FormFieldError {
            field: CandidateField::Email,
            message: "Invalid email".to_owned(),
        }]
    );
    errors.clear();
    assert!(errors.is_empty());
}
