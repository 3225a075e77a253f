//! Firestore REST document encoding and configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser writes feedback straight to Firestore's REST endpoint. This
//! module holds the transport-independent parts (URL shape, typed-value
//! document body, settings validation) so they can be tested natively; the
//! HTTP call itself lives in the UI crate behind the `hydrate` feature.

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use serde_json::{Value, json};
use time::format_description::well_known::Rfc3339;

use crate::feedback::FeedbackRecord;
use crate::store::StoreError;

pub const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
pub const DEFAULT_DATABASE: &str = "(default)";

/// Errors raised while assembling store settings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("missing config value: {var}")]
    Missing { var: &'static str },
}

/// Where feedback documents are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirestoreConfig {
    pub project_id: String,
    pub api_key: String,
    pub database: String,
    pub base_url: String,
}

impl FirestoreConfig {
    /// Build settings from raw values, typically baked in at build time.
    ///
    /// Blank values count as missing. `database` defaults to `(default)`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent variable.
    pub fn from_values(
        project_id: Option<&str>,
        api_key: Option<&str>,
        database: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let project_id = required(project_id, "SHEHER_FIRESTORE_PROJECT_ID")?;
        let api_key = required(api_key, "SHEHER_FIRESTORE_API_KEY")?;
        let database = non_blank(database).unwrap_or(DEFAULT_DATABASE).to_owned();
        Ok(Self { project_id, api_key, database, base_url: FIRESTORE_BASE_URL.to_owned() })
    }

    /// REST endpoint that creates a document with a generated id in `collection`.
    #[must_use]
    pub fn documents_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/{}/documents/{}?key={}",
            self.base_url.trim_end_matches('/'),
            self.project_id,
            self.database,
            collection,
            self.api_key
        )
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}

fn required(raw: Option<&str>, var: &'static str) -> Result<String, ConfigError> {
    non_blank(raw).map(str::to_owned).ok_or(ConfigError::Missing { var })
}

/// Typed-value document body for a feedback record.
///
/// # Errors
///
/// Returns [`StoreError::Serialization`] if the timestamp cannot be rendered as RFC 3339.
pub fn encode_document(record: &FeedbackRecord) -> Result<Value, StoreError> {
    let timestamp = record
        .timestamp
        .format(&Rfc3339)
        .map_err(|e| StoreError::Serialization(e.to_string()))?;
    Ok(json!({
        "fields": {
            "feedback": { "stringValue": record.feedback },
            "routeType": { "stringValue": record.route_type },
            "activeTab": { "stringValue": record.active_tab },
            "timestamp": { "timestampValue": timestamp },
        }
    }))
}
