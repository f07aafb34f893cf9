//! Line-oriented front end for the intake form.
//!
//! Each input line is one user action; the reply is written back before the
//! next prompt.

use std::fmt::Write as _;
use std::str::FromStr;

use anyhow::Context;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::cities;
use crate::configuration::ApplicationSettings;
use crate::form::{FormField, IntakeForm};
use crate::sinks::LocalRequestStore;
use crate::status::SystemStatus;

const HELP: &str = "\
Commands:
  cities                  list birth cities
  districts               list districts of the selected city
  city <name>             select the birth city
  set <field> <value>     fill in a field (date, time, city, district, email, message)
  note | hide-note        show or hide the optional message field
  show                    print the form
  submit                  submit the form
  status                  print the system status
  records                 print locally stored requests
  quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Cities,
    Districts,
    Set(FormField, String),
    ShowNote,
    HideNote,
    Show,
    Submit,
    Status,
    Records,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));
        let rest = rest.trim();
        match verb {
            "help" | "?" => Ok(Command::Help),
            "cities" => Ok(Command::Cities),
            "districts" => Ok(Command::Districts),
            "city" => Ok(Command::Set(FormField::BirthCity, rest.to_string())),
            "set" => {
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err("Usage: set <field> <value>".to_string());
                }
                Ok(Command::Set(field.parse()?, value.trim().to_string()))
            }
            "note" => Ok(Command::ShowNote),
            "hide-note" => Ok(Command::HideNote),
            "show" => Ok(Command::Show),
            "submit" => Ok(Command::Submit),
            "status" => Ok(Command::Status),
            "records" => Ok(Command::Records),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("Unknown command `{}`. Type `help`.", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Continue(String),
    Quit,
}

pub struct Console {
    form: IntakeForm<LocalRequestStore>,
    settings: ApplicationSettings,
}

impl Console {
    pub fn new(form: IntakeForm<LocalRequestStore>, settings: ApplicationSettings) -> Self {
        Self { form, settings }
    }

    pub fn form(&self) -> &IntakeForm<LocalRequestStore> {
        &self.form
    }

    pub fn banner(&self) -> String {
        format!(
            "{}\n{}\nType `help` for commands.\n",
            self.settings.title, self.settings.description
        )
    }

    #[tracing::instrument(name = "Handle console command", skip(self))]
    pub async fn handle(&mut self, line: &str) -> Reply {
        if line.trim().is_empty() {
            return Reply::Continue(String::new());
        }
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => return Reply::Continue(e),
        };
        let output = match command {
            Command::Help => HELP.to_string(),
            Command::Cities => self.form.cities().join("\n"),
            Command::Districts => self.districts(),
            Command::Set(FormField::Message, _) if !self.form.is_message_field_visible() => {
                "The message field is hidden. Type `note` to open it.".to_string()
            }
            Command::Set(FormField::BirthCity, city)
                if !city.is_empty() && !cities::is_known_city(&city) =>
            {
                format!("{} is not a listed city. Type `cities` to see them.", city)
            }
            Command::Set(FormField::BirthDistrict, district)
                if !district.is_empty() && !self.form.districts().contains(&district.as_str()) =>
            {
                format!(
                    "{} is not a district of the selected city. Type `districts` to see them.",
                    district
                )
            }
            Command::Set(field, value) => {
                self.form.update_field(field, value);
                match field {
                    FormField::BirthCity => self.districts(),
                    FormField::Message => format!(
                        "{}/{}",
                        self.form.message_length(),
                        self.form.message_max_length()
                    ),
                    _ => String::new(),
                }
            }
            Command::ShowNote => {
                self.form.show_message_field();
                format!(
                    "给我留言（可选） {}/{}",
                    self.form.message_length(),
                    self.form.message_max_length()
                )
            }
            Command::HideNote => {
                self.form.hide_message_field();
                String::new()
            }
            Command::Show => self.render_form(),
            Command::Submit => self.form.submit().await.to_string(),
            Command::Status => {
                SystemStatus::query(self.form.sink(), &self.settings.user_agent).to_string()
            }
            Command::Records => self.records(),
            Command::Quit => return Reply::Quit,
        };
        Reply::Continue(output)
    }

    /// Drive the console until `quit` or end of input.
    pub async fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), anyhow::Error>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        output.write_all(self.banner().as_bytes()).await?;
        loop {
            output.write_all(b"> ").await?;
            output.flush().await?;
            let Some(line) = lines
                .next_line()
                .await
                .context("Failed to read a console command")?
            else {
                break;
            };
            match self.handle(&line).await {
                Reply::Continue(text) if text.is_empty() => {}
                Reply::Continue(text) => {
                    output.write_all(text.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                }
                Reply::Quit => break,
            }
        }
        output.flush().await?;
        Ok(())
    }

    fn districts(&self) -> String {
        let districts = self.form.districts();
        if districts.is_empty() {
            "No districts available. Select a city first.".to_string()
        } else {
            districts.join("\n")
        }
    }

    fn render_form(&self) -> String {
        let state = self.form.state();
        let mut out = String::new();
        for field in FormField::REQUIRED {
            let _ = writeln!(out, "{:<14}: {}", field.as_str(), state.get(field));
        }
        if self.form.is_message_field_visible() {
            let _ = write!(
                out,
                "{:<14}: {} ({}/{})",
                FormField::Message.as_str(),
                state.message,
                self.form.message_length(),
                self.form.message_max_length()
            );
        } else {
            let _ = write!(out, "{:<14}: (hidden)", FormField::Message.as_str());
        }
        if self.form.submitting() {
            out.push_str("\n提交中...");
        }
        out
    }

    fn records(&self) -> String {
        let requests = match self.form.sink().requests() {
            Ok(requests) => requests,
            Err(e) => return e.to_string(),
        };
        if requests.is_empty() {
            return "No requests stored yet.".to_string();
        }
        serde_json::to_string_pretty(&requests)
            .unwrap_or_else(|e| format!("Failed to render stored requests: {}", e))
    }
}
