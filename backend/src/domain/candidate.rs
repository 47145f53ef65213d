//! Candidate record model.
//!
//! A [`CandidateRecord`] is the unit persisted to the candidate collection.
//! Its serialised form is the document body verbatim: six camelCase string
//! fields, no identifier and no version marker.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifies one of the six candidate form fields.
///
/// Declaration order is the order fields appear on the form and the order
/// validation errors are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CandidateField {
    /// Role the candidate is interviewing for.
    JobRole,
    /// Candidate's full name.
    FullName,
    /// Contact email address.
    Email,
    /// Postal address.
    Address,
    /// Highest or most relevant qualification.
    Qualification,
    /// Free-form interviewer comments.
    Comments,
}

impl CandidateField {
    /// Every field, in form order.
    pub const ALL: [Self; 6] = [
        Self::JobRole,
        Self::FullName,
        Self::Email,
        Self::Address,
        Self::Qualification,
        Self::Comments,
    ];

    /// Wire and form name of the field.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JobRole => "jobRole",
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::Address => "address",
            Self::Qualification => "qualification",
            Self::Comments => "comments",
        }
    }
}

impl fmt::Display for CandidateField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a string does not name a candidate field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown candidate field: {name}")]
pub struct UnknownFieldError {
    /// The rejected name.
    pub name: String,
}

impl FromStr for CandidateField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError { name: s.to_owned() })
    }
}

/// One entry of the job role selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobRoleOption {
    /// Submitted value.
    pub value: &'static str,
    /// Label shown to the user.
    pub label: &'static str,
}

/// Choices offered by the job role selector, placeholder first.
///
/// The list only drives rendering. Validation accepts any job role string.
pub const JOB_ROLE_OPTIONS: [JobRoleOption; 5] = [
    JobRoleOption {
        value: "",
        label: "--Select Job--",
    },
    JobRoleOption {
        value: "ui-developer",
        label: "UI Developer",
    },
    JobRoleOption {
        value: "backend-developer",
        label: "Backend Developer",
    },
    JobRoleOption {
        value: "database-developer",
        label: "Database Developer",
    },
    JobRoleOption {
        value: "fullstack-developer",
        label: "Fullstack Developer",
    },
];

/// Identifier the document store assigns to a created record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Wrap a store-assigned identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for RecordId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// A candidate as persisted in the document store.
///
/// ## Invariants
/// - All six fields are always present.
/// - Records built by [`crate::domain::validate`] satisfy every length and
///   format rule. Records decoded from the store carry no such guarantee,
///   since documents may have been written out-of-band.
/// - Records are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRecord {
    job_role: String,
    full_name: String,
    email: String,
    address: String,
    qualification: String,
    comments: String,
}

impl CandidateRecord {
    /// Rebuild a record from stored field values without validating them.
    ///
    /// Persistence adapters use this when decoding documents. Form input must
    /// go through [`crate::domain::validate`] instead.
    pub fn from_stored(fields: StoredFields) -> Self {
        let StoredFields {
            job_role,
            full_name,
            email,
            address,
            qualification,
            comments,
        } = fields;
        Self {
            job_role,
            full_name,
            email,
            address,
            qualification,
            comments,
        }
    }

    /// Value of a single field.
    pub fn field(&self, field: CandidateField) -> &str {
        match field {
            CandidateField::JobRole => &self.job_role,
            CandidateField::FullName => &self.full_name,
            CandidateField::Email => &self.email,
            CandidateField::Address => &self.address,
            CandidateField::Qualification => &self.qualification,
            CandidateField::Comments => &self.comments,
        }
    }

    /// Selected job role identifier, possibly empty.
    pub fn job_role(&self) -> &str {
        &self.job_role
    }

    /// Candidate's full name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Contact email.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Postal address.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Qualification summary.
    pub fn qualification(&self) -> &str {
        &self.qualification
    }

    /// Interviewer comments.
    pub fn comments(&self) -> &str {
        &self.comments
    }

    /// Iterate `(field, value)` pairs in form order.
    pub fn fields(&self) -> impl Iterator<Item = (CandidateField, &str)> + '_ {
        CandidateField::ALL
            .into_iter()
            .map(move |field| (field, self.field(field)))
    }
}

/// Parameter object for [`CandidateRecord::from_stored`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoredFields {
    /// Stored job role.
    pub job_role: String,
    /// Stored full name.
    pub full_name: String,
    /// Stored email.
    pub email: String,
    /// Stored address.
    pub address: String,
    /// Stored qualification.
    pub qualification: String,
    /// Stored comments.
    pub comments: String,
}

impl StoredFields {
    /// Mutable slot for a single field.
    pub fn slot_mut(&mut self, field: CandidateField) -> &mut String {
        match field {
            CandidateField::JobRole => &mut self.job_role,
            CandidateField::FullName => &mut self.full_name,
            CandidateField::Email => &mut self.email,
            CandidateField::Address => &mut self.address,
            CandidateField::Qualification => &mut self.qualification,
            CandidateField::Comments => &mut self.comments,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for field naming and the record wire shape.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(CandidateField::JobRole, "jobRole")]
    #[case(CandidateField::FullName, "fullName")]
    #[case(CandidateField::Email, "email")]
    #[case(CandidateField::Address, "address")]
    #[case(CandidateField::Qualification, "qualification")]
    #[case(CandidateField::Comments, "comments")]
    fn field_names_round_trip(#[case] field: CandidateField, #[case] name: &str) {
        assert_eq!(field.as_str(), name);
        assert_eq!(name.parse::<CandidateField>(), Ok(field));
    }

    #[rstest]
    fn unknown_field_names_are_rejected() {
        let err = "full_name"
            .parse::<CandidateField>()
            .expect_err("snake case is not a form name");
        assert_eq!(err.to_string(), "unknown candidate field: full_name");
    }

    #[rstest]
    fn record_serialises_as_flat_document_body() {
        let record = CandidateRecord::from_stored(StoredFields {
            job_role: "ui-developer".to_owned(),
            full_name: "Jordan Ellis".to_owned(),
            email: "jordan@example.com".to_owned(),
            address: "221B Baker Street, London".to_owned(),
            qualification: "BSc Computer Science".to_owned(),
            comments: "Excited to interview for this role.".to_owned(),
        });

        let value = serde_json::to_value(&record).expect("serialise record");
        assert_eq!(
            value,
            json!({
                "jobRole": "ui-developer",
                "fullName": "Jordan Ellis",
                "email": "jordan@example.com",
                "address": "221B Baker Street, London",
                "qualification": "BSc Computer Science",
                "comments": "Excited to interview for this role.",
            })
        );
    }

    #[rstest]
    fn fields_iterate_in_form_order() {
        let record = CandidateRecord::from_stored(StoredFields::default());
        let order: Vec<_> = record.fields().map(|(field, _)| field).collect();
        assert_eq!(order, CandidateField::ALL.to_vec());
    }

    #[rstest]
    fn placeholder_role_comes_first() {
        let first = JOB_ROLE_OPTIONS.first().expect("options are non-empty");
        assert_eq!(first.value, "");
        assert_eq!(first.label, "--Select Job--");
    }
}
