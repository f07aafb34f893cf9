use async_trait::async_trait;

use crate::domain::SubmissionRecord;

use super::Notifier;

/// Placeholder for a third-party email service. Always reports success.
#[derive(Debug, Default, Clone)]
pub struct EmailNotificationStub;

#[async_trait]
impl Notifier for EmailNotificationStub {
    #[tracing::instrument(
        name = "Send an intake notification email",
        skip_all,
        fields(recipient = %record.email, has_message = record.message.is_some())
    )]
    async fn notify(&self, record: &SubmissionRecord) -> bool {
        tracing::info!("Email notification requested, no provider configured");
        true
    }
}
