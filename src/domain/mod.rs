mod birth_location;
mod email;
mod submission_record;
mod user_message;

pub use birth_location::{BirthLocation, LOCATION_SEPARATOR};
pub use email::Email;
pub use submission_record::{InvalidSubmission, SubmissionRecord};
pub use user_message::{clamp_message, grapheme_len, UserMessage, MESSAGE_MAX_LENGTH};
