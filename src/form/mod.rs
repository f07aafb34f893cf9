mod controller;
mod error;
mod notice;
mod state;

pub use controller::IntakeForm;
pub use error::SubmitError;
pub use notice::Notice;
pub use state::{FormField, FormState};
