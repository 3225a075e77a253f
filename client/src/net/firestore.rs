//! Firestore REST store for feedback records.
//!
//! Client-side (hydrate): a real `POST` via `gloo-net`.
//! Server-side (SSR): always fails, since feedback is only submitted from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport and status failures map to `StoreError`; the submitter logs them
//! and the user never sees them.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "firestore_test.rs"]
mod firestore_test;

use std::rc::Rc;

use async_trait::async_trait;
use sheher::feedback::FeedbackRecord;
use sheher::firestore::{ConfigError, FirestoreConfig, encode_document};
use sheher::store::{DocumentStore, StoreError, UnconfiguredStore};

/// Writes feedback documents to one Firestore project.
#[derive(Debug, Clone)]
pub struct FirestoreStore {
    config: FirestoreConfig,
}

impl FirestoreStore {
    #[must_use]
    pub fn new(config: FirestoreConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl DocumentStore for FirestoreStore {
    async fn append(&self, collection: &str, record: FeedbackRecord) -> Result<(), StoreError> {
        let body = encode_document(&record)?;
        #[cfg(feature = "hydrate")]
        {
            let url = self.config.documents_url(collection);
            let resp = gloo_net::http::Request::post(&url)
                .json(&body)
                .map_err(|e| StoreError::Serialization(e.to_string()))?
                .send()
                .await
                .map_err(|e| StoreError::Network(e.to_string()))?;
            check_status(resp.status())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (collection, body, &self.config);
            Err(StoreError::Unconfigured("not available on server".to_owned()))
        }
    }
}

/// Firestore settings baked in at build time.
///
/// # Errors
///
/// Returns a [`ConfigError`] when the project id or API key was not set.
pub fn build_config() -> Result<FirestoreConfig, ConfigError> {
    FirestoreConfig::from_values(
        option_env!("SHEHER_FIRESTORE_PROJECT_ID"),
        option_env!("SHEHER_FIRESTORE_API_KEY"),
        option_env!("SHEHER_FIRESTORE_DATABASE"),
    )
}

/// Store for this build: Firestore when configured, otherwise one that logs
/// every write as failed.
pub fn feedback_store() -> Rc<dyn DocumentStore> {
    store_for(build_config())
}

fn store_for(config: Result<FirestoreConfig, ConfigError>) -> Rc<dyn DocumentStore> {
    match config {
        Ok(config) => Rc::new(FirestoreStore::new(config)),
        Err(e) => {
            log::warn!("feedback store disabled: {e}");
            Rc::new(UnconfiguredStore::new(e.to_string()))
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn check_status(status: u16) -> Result<(), StoreError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(StoreError::Rejected { status }) }
}
