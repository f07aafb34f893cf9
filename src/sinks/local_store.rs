use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::configuration::StorageSettings;
use crate::domain::SubmissionRecord;

use super::RecordSink;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredRequest {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub record: SubmissionRecord,
}

/// Append-only in-memory request log.
#[derive(Debug, Default)]
pub struct LocalRequestStore {
    requests: Mutex<Vec<StoredRequest>>,
    max_records: Option<usize>,
}

impl LocalRequestStore {
    pub fn new(max_records: Option<usize>) -> Self {
        Self {
            requests: Mutex::new(Vec::new()),
            max_records,
        }
    }

    pub fn from_settings(settings: &StorageSettings) -> Self {
        Self::new(settings.max_records)
    }

    /// Snapshot of every stored request, oldest first.
    pub fn requests(&self) -> Result<Vec<StoredRequest>, anyhow::Error> {
        let requests = self
            .requests
            .lock()
            .map_err(|_| anyhow!("local storage is unavailable"))?;
        Ok(requests.clone())
    }

    pub fn len(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RecordSink for LocalRequestStore {
    #[tracing::instrument(name = "Store an intake request locally", skip_all)]
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), anyhow::Error> {
        let mut requests = self
            .requests
            .lock()
            .map_err(|_| anyhow!("local storage is unavailable"))?;
        if let Some(max_records) = self.max_records {
            if requests.len() >= max_records {
                anyhow::bail!("local storage quota exceeded ({} records)", max_records);
            }
        }
        let stored = StoredRequest {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            record: record.clone(),
        };
        tracing::debug!(request_id = %stored.id, "Intake request stored");
        requests.push(stored);
        Ok(())
    }

    fn is_available(&self) -> bool {
        !self.requests.is_poisoned()
    }
}
