use healthlog_models::{reminder::ReminderId, symptom::SymptomId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum HealthLogError {
    /// The submitted text was empty or whitespace only. Nothing was changed.
    #[error("input is empty, nothing was added")]
    ValidationSkipped,
    #[error("index {index} is out of range, the list has {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("reminder {0} does not exist")]
    ReminderNotFound(ReminderId),
    #[error("symptom {0} does not exist")]
    SymptomNotFound(SymptomId),
}

pub type Result<T> = std::result::Result<T, HealthLogError>;
