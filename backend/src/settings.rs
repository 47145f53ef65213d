//! Service configuration loaded via OrthoConfig.
//!
//! Values come from `CANDIDATE_INTAKE_*` environment variables, matching CLI
//! flags, or a config file. The request timeout carries an OrthoConfig
//! default; the remaining fields are optional and accessors supply their
//! defaults.

use std::time::Duration;

use ortho_config::OrthoConfig;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::outbound::firestore::{DEFAULT_FIRESTORE_BASE_URL, FirestoreTarget};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_COLLECTION: &str = "candidates";

/// Configuration values for the intake server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "CANDIDATE_INTAKE")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Document collection holding candidate records.
    pub collection: Option<String>,
    /// Firestore project. Without one the server keeps records in memory.
    pub firestore_project: Option<String>,
    /// Web API key appended to Firestore requests.
    pub firestore_api_key: Option<String>,
    /// Firestore REST root, e.g. an emulator URL.
    pub firestore_base_url: Option<String>,
    /// Timeout in seconds applied to each store request.
    #[ortho_config(default = 30)]
    pub request_timeout_secs: u64,
}

/// Raised when configured values cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("invalid firestore base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },
}

impl AppSettings {
    /// Return the bind address, falling back to the default.
    pub fn bind_addr(&self) -> &str {
        self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR)
    }

    /// Return the collection name, falling back to the default.
    pub fn collection(&self) -> &str {
        self.collection.as_deref().unwrap_or(DEFAULT_COLLECTION)
    }

    /// Return the store request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Firestore coordinates, or `None` when no project is configured.
    pub fn firestore_target(&self) -> Result<Option<FirestoreTarget>, SettingsError> {
        let Some(project_id) = self.firestore_project.clone() else {
            return Ok(None);
        };
        let raw = self
            .firestore_base_url
            .as_deref()
            .unwrap_or(DEFAULT_FIRESTORE_BASE_URL);
        let base_url = Url::parse(raw).map_err(|err| SettingsError::InvalidBaseUrl {
            url: raw.to_owned(),
            message: err.to_string(),
        })?;
        Ok(Some(FirestoreTarget {
            base_url,
            project_id,
            collection: self.collection().to_owned(),
            api_key: self.firestore_api_key.clone(),
        }))
    }
}
