//! Input validation for simulation runs.
//!
//! Checks preconditions before the simulation loop starts. Detects:
//! - Empty workloads
//! - Mismatched input column lengths
//! - Negative arrival times
//! - Non-positive burst times (the loop would never terminate)
//! - Missing priorities for priority disciplines
//! - Non-positive round-robin quanta
//!
//! [`validate_processes`] applies the same checks to a prepared process set
//! handed straight to the simulator, plus duplicate pids and processes that
//! already carry run state.
//!
//! All problems are collected, not just the first.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::models::{Discipline, Process, Workload};
use crate::scheduler::Preemption;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyWorkload,
    /// Input columns differ in length.
    LengthMismatch,
    /// A process arrives before time 0.
    NegativeArrival,
    /// A process demands zero or negative service.
    NonPositiveBurst,
    /// A priority discipline was requested without priorities.
    MissingPriority,
    /// Round-robin quantum below 1.
    InvalidQuantum,
    /// Two processes share a pid.
    DuplicatePid,
    /// A process was already started or completed before the run.
    AlreadyStarted,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a workload against the requested discipline.
///
/// Checks:
/// 1. At least one process
/// 2. Every arrival >= 0
/// 3. Every burst >= 1
/// 4. Every process has a priority (priority disciplines only)
/// 5. Quantum >= 1 (round robin only)
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(workload: &Workload, discipline: &Discipline) -> ValidationResult {
    let mut errors = Vec::new();

    if workload.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "Workload has no processes",
        ));
    }

    for (spec, pid) in workload.specs.iter().zip(1..) {
        if spec.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {pid} has negative arrival time {}", spec.arrival),
            ));
        }

        if spec.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {pid} has non-positive burst time {}", spec.burst),
            ));
        }

        if discipline.requires_priorities() && spec.priority.is_none() {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process {pid} has no priority but {} requires one", discipline.as_str()),
            ));
        }
    }

    if let Discipline::RoundRobin { quantum } = discipline {
        if *quantum < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round-robin quantum must be at least 1, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process set before it enters the simulation loop.
///
/// Checks:
/// 1. At least one process
/// 2. Unique pids
/// 3. Every arrival >= 0
/// 4. Every process owes at least one unit (`remaining >= 1`)
/// 5. No process has a start or end time yet
/// 6. Quantum >= 1 for quantum-driven policies
pub fn validate_processes(processes: &[Process], preemption: Preemption) -> ValidationResult {
    let mut errors = Vec::new();
    let mut seen = BTreeSet::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWorkload,
            "No processes to simulate",
        ));
    }

    for process in processes {
        let pid = process.pid;

        if !seen.insert(pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate process id {pid}"),
            ));
        }

        if process.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process {pid} has negative arrival time {}", process.arrival),
            ));
        }

        if process.remaining < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process {pid} has no service left ({})", process.remaining),
            ));
        }

        if process.start.is_some() || process.end.is_some() {
            errors.push(ValidationError::new(
                ValidationErrorKind::AlreadyStarted,
                format!("Process {pid} already has run state"),
            ));
        }
    }

    if let Preemption::Quantum(quantum) = preemption {
        if quantum < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Round-robin quantum must be at least 1, got {quantum}"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_workload() -> Workload {
        Workload::new()
            .with_prioritized_process(0, 5, 2)
            .with_prioritized_process(1, 3, 1)
    }

    #[test]
    fn test_valid_input() {
        let workload = sample_workload();
        assert!(validate_input(&workload, &Discipline::Fcfs).is_ok());
        assert!(validate_input(&workload, &Discipline::PriorityPreemptive).is_ok());
        assert!(validate_input(&workload, &Discipline::RoundRobin { quantum: 1 }).is_ok());
    }

    #[test]
    fn test_empty_workload() {
        let errors = validate_input(&Workload::new(), &Discipline::Sjf).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyWorkload));
    }

    #[test]
    fn test_negative_arrival() {
        let workload = Workload::new().with_process(-1, 3);
        let errors = validate_input(&workload, &Discipline::Fcfs).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
        assert!(errors[0].message.contains("Process 1"));
    }

    #[test]
    fn test_non_positive_burst() {
        let workload = Workload::new().with_process(0, 2).with_process(0, 0);
        let errors = validate_input(&workload, &Discipline::Srtf).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
        assert!(errors[0].message.contains("Process 2"));
    }

    #[test]
    fn test_missing_priority() {
        let workload = Workload::new().with_process(0, 2);
        assert!(validate_input(&workload, &Discipline::Fcfs).is_ok());

        let errors = validate_input(&workload, &Discipline::Priority).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingPriority);
    }

    #[test]
    fn test_invalid_quantum() {
        let errors =
            validate_input(&sample_workload(), &Discipline::RoundRobin { quantum: 0 }).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::InvalidQuantum);
    }

    #[test]
    fn test_multiple_errors() {
        let workload = Workload::new().with_process(-2, 0);
        let errors =
            validate_input(&workload, &Discipline::RoundRobin { quantum: -1 }).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_processes_valid() {
        let processes = vec![Process::new(1, 0, 3), Process::new(2, 4, 1)];
        assert!(validate_processes(&processes, Preemption::Quantum(2)).is_ok());
        assert!(validate_processes(&processes, Preemption::RunToCompletion).is_ok());
    }

    #[test]
    fn test_processes_collect_every_problem() {
        let mut started = Process::new(2, 0, 2);
        started.start = Some(0);
        let processes = vec![
            Process::new(1, -1, 0),
            started,
            Process::new(2, 0, 1),
        ];

        let errors = validate_processes(&processes, Preemption::Quantum(0)).unwrap_err();
        let kinds: Vec<ValidationErrorKind> = errors.iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ValidationErrorKind::NegativeArrival,
                ValidationErrorKind::NonPositiveBurst,
                ValidationErrorKind::AlreadyStarted,
                ValidationErrorKind::DuplicatePid,
                ValidationErrorKind::InvalidQuantum,
            ]
        );
    }

    #[test]
    fn test_processes_empty() {
        let errors = validate_processes(&[], Preemption::EveryTick).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyWorkload);
    }
}
