//! DTOs for Firestore REST document payloads.
//!
//! Candidate fields travel as `stringValue` entries of a document's `fields`
//! map. Non-string values and missing fields decode as empty strings since
//! documents written out-of-band are not guaranteed to follow the form rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{CandidateField, CandidateRecord, RecordId, StoredFields};

#[derive(Debug, Default, Serialize, Deserialize)]
pub(super) struct DocumentDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) name: Option<String>,
    #[serde(default)]
    pub(super) fields: BTreeMap<String, ValueDto>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ValueDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) string_value: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ListDocumentsDto {
    #[serde(default)]
    pub(super) documents: Vec<DocumentDto>,
    #[serde(default)]
    pub(super) next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorEnvelopeDto {
    pub(super) error: ErrorBodyDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    #[serde(default)]
    pub(super) message: String,
}

impl DocumentDto {
    pub(super) fn from_record(record: &CandidateRecord) -> Self {
        let fields = record
            .fields()
            .map(|(field, value)| {
                (
                    field.as_str().to_owned(),
                    ValueDto {
                        string_value: Some(value.to_owned()),
                    },
                )
            })
            .collect();
        Self { name: None, fields }
    }

    pub(super) fn into_record(mut self) -> CandidateRecord {
        let mut stored = StoredFields::default();
        for field in CandidateField::ALL {
            if let Some(value) = self
                .fields
                .remove(field.as_str())
                .and_then(|value| value.string_value)
            {
                *stored.slot_mut(field) = value;
            }
        }
        CandidateRecord::from_stored(stored)
    }

    /// Last path segment of the resource name, which is the document id.
    pub(super) fn record_id(&self) -> Result<RecordId, String> {
        let name = self
            .name
            .as_deref()
            .ok_or_else(|| "created document has no resource name".to_owned())?;
        match name.rsplit('/').next() {
            Some(id) if !id.is_empty() => Ok(RecordId::new(id)),
            _ => Err(format!("document name '{name}' has no id segment")),
        }
    }
}
