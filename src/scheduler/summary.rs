//! Simulation summary metrics.
//!
//! Computes per-process turnaround and waiting time and their means from
//! a finished run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | end - arrival |
//! | Waiting | turnaround - burst |
//! | Average Turnaround | sum(turnaround) / n |
//! | Average Waiting | sum(waiting) / n |
//!
//! Sums are exact integers; averages are rounded only when rendered.

use crate::error::{Result, ScheduleError};
use crate::models::{round_two_decimals, Process, ProcessRecord, SimulationResult, Ticks, Trace};

/// Aggregate turnaround/waiting metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of processes.
    pub process_count: usize,
    /// Sum of turnaround times.
    pub total_turnaround: Ticks,
    /// Sum of waiting times.
    pub total_waiting: Ticks,
    /// Mean turnaround.
    pub average_turnaround: f64,
    /// Mean waiting time.
    pub average_waiting: f64,
}

impl Summary {
    /// Computes metrics from finished rows.
    pub fn calculate(table: &[ProcessRecord]) -> Self {
        let total_turnaround: Ticks = table.iter().map(|p| p.turnaround).sum();
        let total_waiting: Ticks = table.iter().map(|p| p.waiting).sum();
        let count = table.len();

        let mean = |total: Ticks| {
            if count == 0 {
                0.0
            } else {
                total as f64 / count as f64
            }
        };

        Self {
            process_count: count,
            total_turnaround,
            total_waiting,
            average_turnaround: mean(total_turnaround),
            average_waiting: mean(total_waiting),
        }
    }

    /// Averages rounded to two decimals (turnaround, waiting).
    pub fn rounded_averages(&self) -> (f64, f64) {
        (
            round_two_decimals(self.average_turnaround),
            round_two_decimals(self.average_waiting),
        )
    }
}

/// Builds the result record from finished processes and their trace.
///
/// Fails with [`ScheduleError::Unfinished`] if any process is still owed service.
pub fn summarize(processes: &[Process], trace: Trace) -> Result<SimulationResult> {
    let table = processes
        .iter()
        .map(|p| ProcessRecord::from_process(p).ok_or(ScheduleError::Unfinished(p.pid)))
        .collect::<Result<Vec<_>>>()?;

    let summary = Summary::calculate(&table);
    Ok(SimulationResult::new(
        table,
        trace,
        summary.average_turnaround,
        summary.average_waiting,
    ))
}
