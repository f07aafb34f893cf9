//! Collaborators that receive finished submissions.

mod database;
mod email_service;
mod local_store;

pub use database::DatabaseStub;
pub use email_service::EmailNotificationStub;
pub use local_store::{LocalRequestStore, StoredRequest};

use crate::domain::SubmissionRecord;
use async_trait::async_trait;

/// Destination for validated submissions.
///
/// A failure must carry a human-readable description: the form picks the
/// notice it shows from that text.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), anyhow::Error>;

    /// Whether the sink can currently accept records. Only used for status
    /// reporting, never to gate a submission.
    fn is_available(&self) -> bool {
        true
    }
}

/// Sends a notification about a submission. Returns whether it was sent.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, record: &SubmissionRecord) -> bool;
}
