//! Workload (simulation input) model.
//!
//! A workload is the ordered list of processes handed to a simulation.
//! Position in the list defines the pid (1-based), so order matters.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Pid, Process, Ticks};
use crate::error::Result;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Input facts for one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Arrival time.
    pub arrival: Ticks,
    /// Total service demand.
    pub burst: Ticks,
    /// Priority (lower value = more urgent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
}

impl ProcessSpec {
    /// Creates a spec without priority.
    pub fn new(arrival: Ticks, burst: Ticks) -> Self {
        Self {
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }
}

/// An ordered set of processes to simulate.
///
/// # Example
/// ```
/// use u_cpusched::models::Workload;
///
/// let workload = Workload::new()
///     .with_process(0, 5)
///     .with_process(1, 3);
/// assert_eq!(workload.len(), 2);
/// assert_eq!(workload.processes()[1].pid, 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    /// Process specs in input order.
    pub specs: Vec<ProcessSpec>,
}

impl Workload {
    /// Creates an empty workload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process without priority.
    pub fn with_process(mut self, arrival: Ticks, burst: Ticks) -> Self {
        self.specs.push(ProcessSpec::new(arrival, burst));
        self
    }

    /// Appends a process with a priority.
    pub fn with_prioritized_process(mut self, arrival: Ticks, burst: Ticks, priority: i64) -> Self {
        self.specs
            .push(ProcessSpec::new(arrival, burst).with_priority(priority));
        self
    }

    /// Appends a spec.
    pub fn push(&mut self, spec: ProcessSpec) {
        self.specs.push(spec);
    }

    /// Builds a workload from parallel arrival/burst columns.
    ///
    /// Fails with [`ValidationErrorKind::LengthMismatch`] when the columns differ in length.
    pub fn from_columns(arrivals: &[Ticks], bursts: &[Ticks]) -> Result<Self> {
        check_lengths(&[("bursts", bursts.len())], arrivals.len())?;
        Ok(Self {
            specs: arrivals
                .iter()
                .zip(bursts)
                .map(|(&arrival, &burst)| ProcessSpec::new(arrival, burst))
                .collect(),
        })
    }

    /// Builds a workload from parallel arrival/burst/priority columns.
    pub fn from_prioritized_columns(
        arrivals: &[Ticks],
        bursts: &[Ticks],
        priorities: &[i64],
    ) -> Result<Self> {
        check_lengths(
            &[("bursts", bursts.len()), ("priorities", priorities.len())],
            arrivals.len(),
        )?;
        Ok(Self {
            specs: arrivals
                .iter()
                .zip(bursts)
                .zip(priorities)
                .map(|((&arrival, &burst), &priority)| {
                    ProcessSpec::new(arrival, burst).with_priority(priority)
                })
                .collect(),
        })
    }

    /// Generates a random workload.
    ///
    /// Deterministic for a seeded `rng`.
    pub fn random<R: Rng>(count: usize, options: &RandomWorkloadOptions, rng: &mut R) -> Self {
        let max_arrival = options.max_arrival.max(0);
        let min_burst = options.min_burst.max(1);
        let max_burst = options.max_burst.max(min_burst);

        let specs = (0..count)
            .map(|_| {
                let spec = ProcessSpec::new(
                    rng.random_range(0..=max_arrival),
                    rng.random_range(min_burst..=max_burst),
                );
                match options.priority_range {
                    Some((lo, hi)) => spec.with_priority(rng.random_range(lo..=hi.max(lo))),
                    None => spec,
                }
            })
            .collect();

        Self { specs }
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the workload has no processes.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }

    /// Whether every process carries a priority.
    pub fn has_priorities(&self) -> bool {
        self.specs.iter().all(|s| s.priority.is_some())
    }

    /// Fresh process records, pid = position + 1.
    pub fn processes(&self) -> Vec<Process> {
        self.specs
            .iter()
            .zip(1..)
            .map(|(spec, pid): (&ProcessSpec, Pid)| {
                let process = Process::new(pid, spec.arrival, spec.burst);
                match spec.priority {
                    Some(priority) => process.with_priority(priority),
                    None => process,
                }
            })
            .collect()
    }
}

/// Ranges used by [`Workload::random`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomWorkloadOptions {
    /// Latest arrival time (inclusive).
    pub max_arrival: Ticks,
    /// Shortest burst (inclusive, at least 1).
    pub min_burst: Ticks,
    /// Longest burst (inclusive).
    pub max_burst: Ticks,
    /// Priority range (inclusive). `None` = no priorities.
    pub priority_range: Option<(i64, i64)>,
}

impl Default for RandomWorkloadOptions {
    fn default() -> Self {
        Self {
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            priority_range: None,
        }
    }
}

impl RandomWorkloadOptions {
    /// Creates default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the latest arrival time.
    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst_range(mut self, min_burst: Ticks, max_burst: Ticks) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Enables priorities drawn from `lo..=hi`.
    pub fn with_priority_range(mut self, lo: i64, hi: i64) -> Self {
        self.priority_range = Some((lo, hi));
        self
    }
}

fn check_lengths(columns: &[(&str, usize)], expected: usize) -> Result<()> {
    let errors: Vec<ValidationError> = columns
        .iter()
        .filter(|(_, len)| *len != expected)
        .map(|(name, len)| {
            ValidationError::new(
                ValidationErrorKind::LengthMismatch,
                format!("Expected {expected} {name} to match arrivals, got {len}"),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.into())
    }
}
