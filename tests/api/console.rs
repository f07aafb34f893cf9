use astro_intake::configuration::ApplicationSettings;
use astro_intake::console::{Console, Reply};
use astro_intake::form::{IntakeForm, Notice};
use astro_intake::sinks::LocalRequestStore;

fn spawn_console() -> Console {
    let settings = ApplicationSettings {
        title: "星盘解读".to_string(),
        description: "留下您的出生信息".to_string(),
        user_agent: "astro_intake tests".to_string(),
    };
    Console::new(IntakeForm::new(LocalRequestStore::new(None)), settings)
}

#[tokio::test]
async fn a_scripted_session_submits_one_request() {
    // Arrange
    let mut console = spawn_console();
    let script = "\
city Beijing
set district Haidian
set date 2024-05-01
set time 08:30
set email a@b.com
submit
records
quit
";
    let mut output = Vec::new();

    // Act
    console.run(script.as_bytes(), &mut output).await.unwrap();

    // Assert
    let output = String::from_utf8(output).unwrap();
    assert!(output.starts_with("星盘解读"));
    assert!(output.contains(Notice::Success.text()));
    assert!(output.contains("Beijing，Haidian"));
    assert_eq!(console.form().sink().len(), 1);
    assert!(console.form().state().is_empty());
}

#[tokio::test]
async fn the_session_ends_at_end_of_input() {
    // Arrange
    let mut console = spawn_console();
    let mut output = Vec::new();

    // Act
    console.run("submit\n".as_bytes(), &mut output).await.unwrap();

    // Assert
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains(Notice::IncompleteForm.text()));
    assert!(console.form().sink().is_empty());
}

#[tokio::test]
async fn the_message_field_must_be_opened_before_typing() {
    // Arrange
    let mut console = spawn_console();

    // Act 1 - message field hidden
    let reply = console.handle("set message 你好").await;

    // Assert
    assert!(matches!(reply, Reply::Continue(text) if text.contains("hidden")));
    assert_eq!(console.form().state().message, "");

    // Act 2 - open it
    console.handle("note").await;
    let reply = console.handle("set message 你好").await;

    // Assert
    assert_eq!(reply, Reply::Continue("2/500".to_string()));
    assert_eq!(console.form().state().message, "你好");
}

#[tokio::test]
async fn selecting_a_city_lists_its_districts() {
    // Arrange
    let mut console = spawn_console();

    // Act
    let reply = console.handle("city Chengdu").await;

    // Assert
    match reply {
        Reply::Continue(text) => assert!(text.contains("Wuhou")),
        Reply::Quit => panic!("The console quit on a city change."),
    }
}

#[tokio::test]
async fn status_reports_storage_and_client() {
    // Arrange
    let mut console = spawn_console();

    // Act
    let reply = console.handle("status").await;

    // Assert
    assert_eq!(
        reply,
        Reply::Continue("系统状态: ✅ 存储正常\n浏览器: 其他".to_string())
    );
}

#[tokio::test]
async fn unknown_commands_keep_the_session_alive() {
    // Arrange
    let mut console = spawn_console();

    // Act
    let reply = console.handle("horoscope").await;

    // Assert
    assert!(matches!(reply, Reply::Continue(text) if text.contains("Unknown command")));
    assert_eq!(console.handle("quit").await, Reply::Quit);
}

#[tokio::test]
async fn an_unlisted_city_is_refused() {
    // Arrange
    let mut console = spawn_console();

    // Act
    let reply = console.handle("city Atlantis").await;

    // Assert
    assert!(matches!(reply, Reply::Continue(text) if text.contains("not a listed city")));
    assert_eq!(console.form().state().birth_city, "");
}

#[tokio::test]
async fn a_district_of_another_city_is_refused() {
    // Arrange
    let mut console = spawn_console();
    console.handle("city Beijing").await;

    // Act
    let reply = console.handle("set district Pudong").await;

    // Assert
    assert!(matches!(reply, Reply::Continue(text) if text.contains("not a district")));
    assert_eq!(console.form().state().birth_district, "");
}

#[tokio::test]
async fn a_mismatched_city_and_district_are_never_stored() {
    // Arrange
    let mut console = spawn_console();
    let script = "\
city Beijing
set district Pudong
set date 2024-05-01
set time 08:30
set email a@b.com
submit
city Atlantis
set district Nowhere
submit
";
    let mut output = Vec::new();

    // Act
    console.run(script.as_bytes(), &mut output).await.unwrap();

    // Assert
    let output = String::from_utf8(output).unwrap();
    assert!(output.contains(Notice::IncompleteForm.text()));
    assert!(console.form().sink().is_empty());
    assert_eq!(console.form().state().birth_city, "Beijing");
}

#[tokio::test]
async fn a_district_can_be_cleared() {
    // Arrange
    let mut console = spawn_console();
    console.handle("city Shanghai").await;
    console.handle("set district Pudong").await;

    // Act
    console.handle("set district").await;

    // Assert
    assert_eq!(console.form().state().birth_district, "");
}
