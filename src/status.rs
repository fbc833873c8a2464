use std::fmt;
use std::str::FromStr;

use serde_json::Value;
use tracing::{debug, error};

use crate::error::BotError;

/// Review states the Practicum API reports for a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Sentence shown to the student for this state.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = BotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(BotError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HomeworkStatus::Approved => write!(f, "approved"),
            HomeworkStatus::Reviewing => write!(f, "reviewing"),
            HomeworkStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// Turns one submission record into the chat message announcing its state.
pub fn parse_status(homework: &Value) -> Result<String, BotError> {
    let name = required_str(homework, "homework_name")?;
    let code = required_str(homework, "status")?;
    debug!(homework = name, status = code, "parsing homework status");

    let status = code.parse::<HomeworkStatus>().inspect_err(|_| {
        error!(status = code, "status is not one of the known review states");
    })?;
    Ok(format!(
        "Изменился статус проверки работы '{name}'. {}",
        status.verdict()
    ))
}

// Empty strings count as missing.
fn required_str<'a>(homework: &'a Value, field: &'static str) -> Result<&'a str, BotError> {
    match homework.get(field).and_then(Value::as_str) {
        Some(value) if !value.is_empty() => Ok(value),
        _ => {
            error!(field, "homework record is missing a field");
            Err(BotError::MissingField(field))
        }
    }
}
