use async_trait::async_trait;

use crate::domain::SubmissionRecord;

use super::{RecordSink, StoredRequest};

/// Placeholder for a hosted database. Accepts every record without
/// persisting it.
#[derive(Debug, Default, Clone)]
pub struct DatabaseStub;

impl DatabaseStub {
    #[tracing::instrument(name = "Fetch all intake requests from the database", skip_all)]
    pub async fn all_requests(&self) -> Result<Vec<StoredRequest>, anyhow::Error> {
        tracing::info!("Database fetch requested, no backend configured");
        Ok(Vec::new())
    }
}

#[async_trait]
impl RecordSink for DatabaseStub {
    #[tracing::instrument(
        name = "Save an intake request to the database",
        skip_all,
        fields(birth_location = %record.birth_location)
    )]
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), anyhow::Error> {
        tracing::info!("Database save requested, no backend configured");
        Ok(())
    }
}
