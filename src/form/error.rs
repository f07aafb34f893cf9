use crate::domain::InvalidSubmission;
use crate::utils::error_chain_fmt;

use super::{FormField, Notice};

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("The form is missing required fields: {0:?}")]
    Incomplete(Vec<FormField>),
    #[error("{0}")]
    InvalidEmail(String),
    #[error("Failed to save the submission")]
    SaveFailed(#[source] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<InvalidSubmission> for SubmitError {
    fn from(e: InvalidSubmission) -> Self {
        match e {
            InvalidSubmission::Incomplete(missing) => SubmitError::Incomplete(missing),
            InvalidSubmission::InvalidEmail(reason) => SubmitError::InvalidEmail(reason),
        }
    }
}

impl SubmitError {
    /// The notice shown to the user for this failure.
    pub fn notice(&self) -> Notice {
        match self {
            SubmitError::Incomplete(_) => Notice::IncompleteForm,
            SubmitError::InvalidEmail(_) => Notice::InvalidEmail,
            SubmitError::SaveFailed(e) => Notice::for_failure(&format!("{:#}", e)),
        }
    }
}
