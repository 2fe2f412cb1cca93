//! Error type for simulation entry points.

use thiserror::Error;

use crate::models::Pid;
use crate::validation::ValidationError;

/// Errors surfaced by the simulation API.
///
/// Every failure is a caller or programming error; a simulation is pure and
/// deterministic, so nothing here is worth retrying.
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The input violated one or more preconditions.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// A discipline name could not be parsed.
    #[error(
        "unknown discipline '{0}'. Valid: fcfs, sjf, srtf, priority, priority_preemptive, round_robin"
    )]
    UnknownDiscipline(String),

    /// The engine stopped with a process still owed service.
    #[error("process {0} did not run to completion")]
    Unfinished(Pid),

    /// The result could not be rendered to JSON.
    #[error("failed to serialize simulation result: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, ScheduleError>;

impl From<Vec<ValidationError>> for ScheduleError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ScheduleError::InvalidInput(errors)
    }
}

impl ScheduleError {
    /// Validation errors carried by [`ScheduleError::InvalidInput`], if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            ScheduleError::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
