use std::sync::Arc;

use tokio::sync::watch;
use tracing::field::display;
use tracing::Span;

use crate::cities;
use crate::domain::{clamp_message, grapheme_len, SubmissionRecord, MESSAGE_MAX_LENGTH};
use crate::sinks::RecordSink;

use super::{FormField, FormState, Notice, SubmitError};

/// Controller for one intake form instance.
///
/// Owns the field values and the UI toggles, and forwards valid submissions
/// to `S`.
pub struct IntakeForm<S> {
    sink: S,
    state: FormState,
    districts: &'static [&'static str],
    message_visible: bool,
    message_max_length: usize,
    submitting: Arc<watch::Sender<bool>>,
    last_notice: Option<Notice>,
}

impl<S: RecordSink> IntakeForm<S> {
    pub fn new(sink: S) -> Self {
        let (submitting, _) = watch::channel(false);
        Self {
            sink,
            state: FormState::default(),
            districts: &[],
            message_visible: false,
            message_max_length: MESSAGE_MAX_LENGTH,
            submitting: Arc::new(submitting),
            last_notice: None,
        }
    }

    pub fn with_message_max_length(mut self, max_length: usize) -> Self {
        self.message_max_length = max_length;
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Districts selectable for the current city.
    pub fn districts(&self) -> &'static [&'static str] {
        self.districts
    }

    pub fn cities(&self) -> Vec<&'static str> {
        cities::popular_cities()
    }

    /// Replace one field. Nothing is validated until submit.
    ///
    /// The city is routed through [`IntakeForm::change_city`]; the message is
    /// clamped to the configured length.
    pub fn update_field(&mut self, field: FormField, value: String) {
        match field {
            FormField::BirthCity => self.change_city(value),
            FormField::Message => {
                let value = clamp_message(value, self.message_max_length);
                self.state.set(field, value);
            }
            _ => self.state.set(field, value),
        }
    }

    /// Select a birth city, clearing the district and reloading the district list.
    pub fn change_city(&mut self, city: String) {
        self.districts = cities::districts_for(&city);
        self.state.birth_city = city;
        self.state.birth_district.clear();
    }

    pub fn show_message_field(&mut self) {
        self.message_visible = true;
    }

    pub fn hide_message_field(&mut self) {
        self.message_visible = false;
    }

    pub fn is_message_field_visible(&self) -> bool {
        self.message_visible
    }

    pub fn message_length(&self) -> usize {
        grapheme_len(&self.state.message)
    }

    pub fn message_max_length(&self) -> usize {
        self.message_max_length
    }

    pub fn submitting(&self) -> bool {
        *self.submitting.borrow()
    }

    /// Observe the submitting flag, e.g. to disable a submit control.
    pub fn watch_submitting(&self) -> watch::Receiver<bool> {
        self.submitting.subscribe()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.last_notice
    }

    /// Validate the form and hand the resulting record to the sink.
    ///
    /// Always returns a notice; failures leave the typed values in place so
    /// the user can correct them and retry.
    #[tracing::instrument(
        name = "Submit an intake form",
        skip(self),
        fields(birth_city = tracing::field::Empty, notice = tracing::field::Empty)
    )]
    pub async fn submit(&mut self) -> Notice {
        let _submitting = SubmittingGuard::engage(Arc::clone(&self.submitting));
        Span::current().record("birth_city", &display(&self.state.birth_city));
        tracing::info!("Intake form submission started");

        let notice = match self.try_submit().await {
            Ok(()) => {
                self.reset();
                tracing::info!("Intake form submitted, form cleared");
                Notice::Success
            }
            Err(e @ SubmitError::SaveFailed(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Failed to save an intake request",
                );
                e.notice()
            }
            Err(e) => {
                tracing::warn!(error.message = %e, "Intake form rejected");
                e.notice()
            }
        };

        Span::current().record("notice", &tracing::field::debug(&notice));
        self.last_notice = Some(notice);
        notice
    }

    async fn try_submit(&self) -> Result<(), SubmitError> {
        tracing::debug!("Validating intake form");
        let record = SubmissionRecord::try_from(&self.state)?;
        tracing::debug!("Intake form is valid, saving the request");
        self.sink
            .insert(&record)
            .await
            .map_err(SubmitError::SaveFailed)
    }

    fn reset(&mut self) {
        self.state = FormState::default();
        self.districts = &[];
        self.message_visible = false;
    }
}

/// Holds the submitting flag up until dropped, on every exit path.
struct SubmittingGuard(Arc<watch::Sender<bool>>);

impl SubmittingGuard {
    fn engage(flag: Arc<watch::Sender<bool>>) -> Self {
        flag.send_replace(true);
        Self(flag)
    }
}

impl Drop for SubmittingGuard {
    fn drop(&mut self) {
        self.0.send_replace(false);
    }
}
