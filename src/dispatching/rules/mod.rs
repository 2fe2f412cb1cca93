//! Built-in dispatching rules.
//!
//! | Rule | Score | Used by |
//! |------|-------|---------|
//! | `ArrivalTime` | arrival | FCFS, tie-breaks |
//! | `BurstTime` | burst | SJF |
//! | `RemainingTime` | remaining | SRTF |
//! | `PriorityValue` | priority | Priority (both modes) |
//!
//! # Score Convention
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore, SchedulingContext};
use crate::models::Process;

/// First come, first served.
///
/// Prioritizes processes that arrived earlier.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalTime;

impl DispatchingRule for ArrivalTime {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.arrival
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest job first.
///
/// Prioritizes processes with the smallest total burst. Minimizes mean
/// waiting time among non-preemptive policies when all jobs are present.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct BurstTime;

impl DispatchingRule for BurstTime {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.burst
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Shortest remaining time.
///
/// Prioritizes processes closest to completion.
#[derive(Debug, Clone, Copy)]
pub struct RemainingTime;

impl DispatchingRule for RemainingTime {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.remaining
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First"
    }
}

/// Explicit priority.
///
/// Lower priority value = more urgent. Processes without a priority sort last.
#[derive(Debug, Clone, Copy)]
pub struct PriorityValue;

impl DispatchingRule for PriorityValue {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &SchedulingContext) -> RuleScore {
        process.priority.unwrap_or(RuleScore::MAX)
    }

    fn description(&self) -> &'static str {
        "Process Priority"
    }
}
