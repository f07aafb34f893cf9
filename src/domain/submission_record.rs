use chrono::{DateTime, Utc};

use crate::form::{FormField, FormState};

use super::{BirthLocation, Email, UserMessage};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidSubmission {
    #[error("The form is missing required fields: {0:?}")]
    Incomplete(Vec<FormField>),
    #[error("{0}")]
    InvalidEmail(String),
}

/// Normalized payload handed to a sink once per valid submission.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub birth_date: String,
    pub birth_time: String,
    pub birth_location: BirthLocation,
    pub email: Email,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<UserMessage>,
    pub timestamp: DateTime<Utc>,
}

impl TryFrom<&FormState> for SubmissionRecord {
    type Error = InvalidSubmission;

    /// Presence is checked before the email shape, so an incomplete form
    /// never reports an email problem.
    fn try_from(form: &FormState) -> Result<Self, Self::Error> {
        let missing: Vec<FormField> = FormField::REQUIRED
            .into_iter()
            .filter(|field| form.get(*field).is_empty())
            .collect();
        if !missing.is_empty() {
            return Err(InvalidSubmission::Incomplete(missing));
        }
        let email = Email::parse(form.email.clone()).map_err(InvalidSubmission::InvalidEmail)?;
        Ok(Self {
            birth_date: form.birth_date.clone(),
            birth_time: form.birth_time.clone(),
            birth_location: BirthLocation::new(
                form.birth_city.clone(),
                form.birth_district.clone(),
            ),
            email,
            message: UserMessage::parse(form.message.clone()),
            timestamp: Utc::now(),
        })
    }
}
