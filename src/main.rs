use astro_intake::configuration::get_configuration;
use astro_intake::console::Console;
use astro_intake::form::IntakeForm;
use astro_intake::sinks::LocalRequestStore;
use astro_intake::telemetry::{get_subscriber, init_subscriber};
use tokio::io::BufReader;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout belongs to the form.
    let subscriber = get_subscriber("astro_intake".into(), "info".into(), std::io::stderr);
    init_subscriber(subscriber);

    let configuration = get_configuration().expect("Failed to read configuration.");
    let store = LocalRequestStore::from_settings(&configuration.storage);
    let form = IntakeForm::new(store)
        .with_message_max_length(configuration.form.message_max_length);

    let mut console = Console::new(form, configuration.application);
    console
        .run(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
        .await
}
