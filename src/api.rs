//! Discipline entry points.
//!
//! Each function takes parallel input columns (pid = 1-based position),
//! validates them, and returns the full simulation trace.

use tracing::warn;

use crate::error::Result;
use crate::models::{Discipline, SimulationResult, Ticks, Workload};
use crate::scheduler::Simulator;
use crate::validation::validate_input;

/// Validates `workload` and simulates it under `discipline`.
///
/// # Example
/// ```
/// use u_cpusched::{simulate, models::{Discipline, Workload}};
///
/// let workload = Workload::new().with_process(0, 4).with_process(0, 4);
/// let result = simulate(&workload, Discipline::RoundRobin { quantum: 2 }).unwrap();
/// assert_eq!(result.completed, vec![1, 2]);
/// ```
pub fn simulate(workload: &Workload, discipline: Discipline) -> Result<SimulationResult> {
    if let Err(errors) = validate_input(workload, &discipline) {
        warn!(
            discipline = discipline.as_str(),
            errors = errors.len(),
            "rejected simulation input"
        );
        return Err(errors.into());
    }

    Simulator::for_discipline(&discipline).run(workload.processes())
}

/// First-come, first-served.
///
/// # Example
/// ```
/// let result = u_cpusched::fcfs(&[0, 1, 2], &[5, 3, 2]).unwrap();
/// assert_eq!(result.completed, vec![1, 2, 3]);
/// assert!(result.to_json().unwrap().contains("\"average_waiting\":3.33"));
/// ```
pub fn fcfs(arrivals: &[Ticks], bursts: &[Ticks]) -> Result<SimulationResult> {
    simulate(&Workload::from_columns(arrivals, bursts)?, Discipline::Fcfs)
}

/// Shortest job first, non-preemptive.
pub fn sjf(arrivals: &[Ticks], bursts: &[Ticks]) -> Result<SimulationResult> {
    simulate(&Workload::from_columns(arrivals, bursts)?, Discipline::Sjf)
}

/// Shortest remaining time first (preemptive SJF).
pub fn sjf_preemptive(arrivals: &[Ticks], bursts: &[Ticks]) -> Result<SimulationResult> {
    simulate(&Workload::from_columns(arrivals, bursts)?, Discipline::Srtf)
}

/// Priority, non-preemptive. Lower value = higher priority.
pub fn priority(arrivals: &[Ticks], bursts: &[Ticks], priorities: &[i64]) -> Result<SimulationResult> {
    simulate(
        &Workload::from_prioritized_columns(arrivals, bursts, priorities)?,
        Discipline::Priority,
    )
}

/// Priority, preemptive. Lower value = higher priority.
pub fn priority_preemptive(
    arrivals: &[Ticks],
    bursts: &[Ticks],
    priorities: &[i64],
) -> Result<SimulationResult> {
    simulate(
        &Workload::from_prioritized_columns(arrivals, bursts, priorities)?,
        Discipline::PriorityPreemptive,
    )
}

/// Round robin with a fixed time quantum.
pub fn round_robin(arrivals: &[Ticks], bursts: &[Ticks], quantum: Ticks) -> Result<SimulationResult> {
    simulate(
        &Workload::from_columns(arrivals, bursts)?,
        Discipline::RoundRobin { quantum },
    )
}
