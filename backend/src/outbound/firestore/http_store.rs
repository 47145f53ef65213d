//! Reqwest-backed Firestore candidate store.
//!
//! This adapter owns transport details only: collection URL construction,
//! API key handling, document encoding, page traversal and HTTP error
//! mapping.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use thiserror::Error;

use super::dto::{DocumentDto, ErrorEnvelopeDto, ListDocumentsDto};
use crate::domain::ports::{CandidateStore, PersistenceError};
use crate::domain::{CandidateRecord, RecordId};

/// Public Firestore REST endpoint.
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1/";

/// Which collection to talk to, and how to authenticate.
#[derive(Debug, Clone)]
pub struct FirestoreTarget {
    /// REST root, e.g. [`DEFAULT_FIRESTORE_BASE_URL`] or an emulator.
    pub base_url: Url,
    /// Google Cloud project identifier.
    pub project_id: String,
    /// Collection holding candidate documents.
    pub collection: String,
    /// Optional web API key sent as the `key` query parameter.
    pub api_key: Option<String>,
}

/// Errors raised while constructing the adapter.
#[derive(Debug, Error)]
pub enum FirestoreSetupError {
    /// The reqwest client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    /// The base URL cannot carry path segments.
    #[error("firestore base URL '{url}' cannot be used as a base")]
    InvalidBaseUrl {
        /// Offending URL.
        url: String,
    },
}

/// Candidate store backed by one Firestore collection.
pub struct FirestoreCandidateStore {
    client: Client,
    collection_url: Url,
    api_key: Option<String>,
}

impl FirestoreCandidateStore {
    /// Build an adapter using a reqwest client with an explicit request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be constructed or the base URL
    /// cannot be extended with the collection path.
    pub fn new(target: FirestoreTarget, timeout: Duration) -> Result<Self, FirestoreSetupError> {
        let client = Client::builder().timeout(timeout).build()?;
        let collection_url = collection_url(&target)?;
        Ok(Self {
            client,
            collection_url,
            api_key: target.api_key,
        })
    }

    fn with_key(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }

    async fn fetch_page(
        &self,
        page_token: Option<&str>,
    ) -> Result<ListDocumentsDto, PersistenceError> {
        let mut request = self.with_key(self.client.get(self.collection_url.clone()));
        if let Some(token) = page_token {
            request = request.query(&[("pageToken", token)]);
        }
        let body = send(request).await?;
        serde_json::from_slice(&body).map_err(|error| {
            PersistenceError::decode(format!("invalid list documents payload: {error}"))
        })
    }
}

fn collection_url(target: &FirestoreTarget) -> Result<Url, FirestoreSetupError> {
    let mut url = target.base_url.clone();
    {
        let mut segments =
            url.path_segments_mut()
                .map_err(|()| FirestoreSetupError::InvalidBaseUrl {
                    url: target.base_url.to_string(),
                })?;
        segments.pop_if_empty().extend([
            "projects",
            target.project_id.as_str(),
            "databases",
            "(default)",
            "documents",
            target.collection.as_str(),
        ]);
    }
    Ok(url)
}

async fn send(request: RequestBuilder) -> Result<Vec<u8>, PersistenceError> {
    let response = request.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

#[async_trait]
impl CandidateStore for FirestoreCandidateStore {
    async fn create(&self, record: &CandidateRecord) -> Result<RecordId, PersistenceError> {
        let request = self
            .with_key(self.client.post(self.collection_url.clone()))
            .json(&DocumentDto::from_record(record));
        let body = send(request).await?;
        let created: DocumentDto = serde_json::from_slice(&body).map_err(|error| {
            PersistenceError::decode(format!("invalid created document payload: {error}"))
        })?;
        created.record_id().map_err(PersistenceError::decode)
    }

    async fn list(&self) -> Result<Vec<CandidateRecord>, PersistenceError> {
        let mut records = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let page = self.fetch_page(page_token.as_deref()).await?;
            records.extend(page.documents.into_iter().map(DocumentDto::into_record));
            match page.next_page_token {
                Some(token) if !token.is_empty() => page_token = Some(token),
                _ => break,
            }
        }
        Ok(records)
    }
}

fn map_transport_error(error: reqwest::Error) -> PersistenceError {
    PersistenceError::connection(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> PersistenceError {
    let message = serde_json::from_slice::<ErrorEnvelopeDto>(body)
        .map(|envelope| envelope.error.message)
        .ok()
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| body_preview(body));
    PersistenceError::rejected(status.as_u16(), message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
