//! Document-store seam for feedback records.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is a [`StoreError`]. The only caller is the feedback
//! submitter, which logs it and moves on; nothing here is user-visible.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use async_trait::async_trait;

use crate::feedback::FeedbackRecord;

/// Errors produced while appending a record to the document store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The request never got a response.
    #[error("network error: {0}")]
    Network(String),
    /// The store answered with a non-success status.
    #[error("store rejected write: status {status}")]
    Rejected { status: u16 },
    /// The record could not be encoded for the store.
    #[error("serialization failed: {0}")]
    Serialization(String),
    /// No store is configured for this build.
    #[error("store not configured: {0}")]
    Unconfigured(String),
}

/// Append-only document collection. The client never reads it back.
#[async_trait(?Send)]
pub trait DocumentStore {
    /// Append `record` to `collection`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] when the write does not reach the store.
    async fn append(&self, collection: &str, record: FeedbackRecord) -> Result<(), StoreError>;
}

/// Stand-in used when the build carries no store settings; every append fails.
#[derive(Debug, Clone)]
pub struct UnconfiguredStore {
    reason: String,
}

impl UnconfiguredStore {
    #[must_use]
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait(?Send)]
impl DocumentStore for UnconfiguredStore {
    async fn append(&self, _collection: &str, _record: FeedbackRecord) -> Result<(), StoreError> {
        Err(StoreError::Unconfigured(self.reason.clone()))
    }
}
