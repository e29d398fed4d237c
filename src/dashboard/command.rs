use std::str::FromStr;

use healthlog_models::{
    chrono::{NaiveDate, NaiveTime},
    severity::Severity,
};
use thiserror::Error;

pub const USAGE: &str = "These commands are supported:
  remind <text>           add a reminder using the pending date and time
  date <YYYY-MM-DD>       set the date of the pending reminder
  time <HH:MM>            set the time of the pending reminder
  daily <on|off>          mark the pending reminder as daily
  toggle <n>              mark reminder n as done or not done
  remove <n>              delete reminder n
  severity <level>        pick mild, moderate or severe for the next symptom
  symptom <name>          log a symptom with the picked severity
  cancel                  close the symptom form without logging
  list                    show the dashboard
  help                    show this message
  quit                    exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardCommand {
    Remind(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Daily(bool),
    /// Zero-based position in the reminder list.
    Toggle(usize),
    /// Zero-based position in the reminder list.
    Remove(usize),
    Severity(Severity),
    Symptom(String),
    Cancel,
    List,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command `{0}`, type `help` for the list of commands")]
    Unknown(String),
    #[error("`{command}` expects {expected}")]
    InvalidArgument {
        command: &'static str,
        expected: &'static str,
    },
}

impl FromStr for DashboardCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (name, argument) = match line.split_once(char::is_whitespace) {
            Some((name, argument)) => (name, argument.trim()),
            None => (line, ""),
        };

        let command = match name.to_lowercase().as_str() {
            "remind" => DashboardCommand::Remind(argument.to_string()),
            "date" => DashboardCommand::Date(
                NaiveDate::parse_from_str(argument, "%Y-%m-%d")
                    .map_err(|_| invalid("date", "a date such as 2024-01-31"))?,
            ),
            "time" => DashboardCommand::Time(
                NaiveTime::parse_from_str(argument, "%H:%M")
                    .map_err(|_| invalid("time", "a time such as 13:00"))?,
            ),
            "daily" => match argument {
                "on" => DashboardCommand::Daily(true),
                "off" => DashboardCommand::Daily(false),
                _ => return Err(invalid("daily", "`on` or `off`")),
            },
            "toggle" => DashboardCommand::Toggle(parse_position("toggle", argument)?),
            "remove" => DashboardCommand::Remove(parse_position("remove", argument)?),
            "severity" => DashboardCommand::Severity(
                argument
                    .to_lowercase()
                    .parse::<Severity>()
                    .map_err(|_| invalid("severity", "mild, moderate or severe"))?,
            ),
            "symptom" => DashboardCommand::Symptom(argument.to_string()),
            "cancel" => DashboardCommand::Cancel,
            "list" => DashboardCommand::List,
            "help" => DashboardCommand::Help,
            "quit" | "exit" => DashboardCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };

        Ok(command)
    }
}

fn invalid(command: &'static str, expected: &'static str) -> CommandError {
    CommandError::InvalidArgument { command, expected }
}

/// Positions are shown starting from 1.
fn parse_position(command: &'static str, argument: &str) -> Result<usize, CommandError> {
    match argument.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position - 1),
        _ => Err(invalid(command, "a reminder number starting from 1")),
    }
}
