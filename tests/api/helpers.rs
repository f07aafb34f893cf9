use std::collections::VecDeque;
use std::sync::Mutex;

use astro_intake::domain::SubmissionRecord;
use astro_intake::form::{FormField, IntakeForm};
use astro_intake::sinks::RecordSink;
use astro_intake::telemetry::{get_subscriber, init_subscriber};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use tokio::sync::watch;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

/// Sink that remembers every insert and can be told to fail.
#[derive(Default)]
pub struct RecordingSink {
    inserted: Mutex<Vec<SubmissionRecord>>,
    failures: Mutex<VecDeque<String>>,
    submitting: Mutex<Option<watch::Receiver<bool>>>,
    submitting_during_insert: Mutex<Vec<bool>>,
}

impl RecordingSink {
    /// The next insert fails with `description`.
    pub fn fail_next_with(&self, description: &str) {
        self.failures
            .lock()
            .unwrap()
            .push_back(description.to_string());
    }

    /// Sample the submitting flag from inside every insert.
    pub fn observe_submitting(&self, receiver: watch::Receiver<bool>) {
        *self.submitting.lock().unwrap() = Some(receiver);
    }

    pub fn inserted(&self) -> Vec<SubmissionRecord> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn submitting_during_insert(&self) -> Vec<bool> {
        self.submitting_during_insert.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSink for RecordingSink {
    async fn insert(&self, record: &SubmissionRecord) -> Result<(), anyhow::Error> {
        if let Some(receiver) = self.submitting.lock().unwrap().as_ref() {
            let flag = *receiver.borrow();
            self.submitting_during_insert.lock().unwrap().push(flag);
        }
        if let Some(description) = self.failures.lock().unwrap().pop_front() {
            return Err(anyhow::anyhow!(description));
        }
        self.inserted.lock().unwrap().push(record.clone());
        Ok(())
    }
}

pub struct FormInput {
    pub birth_date: &'static str,
    pub birth_time: &'static str,
    pub birth_city: &'static str,
    pub birth_district: &'static str,
    pub email: &'static str,
    pub message: &'static str,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            birth_date: "2024-05-01",
            birth_time: "08:30",
            birth_city: "Beijing",
            birth_district: "Haidian",
            email: "a@b.com",
            message: "",
        }
    }
}

pub fn spawn_form() -> IntakeForm<RecordingSink> {
    Lazy::force(&TRACING);

    let form = IntakeForm::new(RecordingSink::default());
    form.sink().observe_submitting(form.watch_submitting());
    form
}

/// Fill the form the way a user would: city first, then the rest.
pub fn fill_in<S: RecordSink>(form: &mut IntakeForm<S>, input: &FormInput) {
    form.change_city(input.birth_city.to_string());
    form.update_field(FormField::BirthDistrict, input.birth_district.to_string());
    form.update_field(FormField::BirthDate, input.birth_date.to_string());
    form.update_field(FormField::BirthTime, input.birth_time.to_string());
    form.update_field(FormField::Email, input.email.to_string());
    if !input.message.is_empty() {
        form.show_message_field();
        form.update_field(FormField::Message, input.message.to_string());
    }
}
