//! Simulation result model.
//!
//! The structured record handed to the visualization layer. Field names
//! and shapes are the JSON wire contract: `process_table`, `timeline`,
//! `ready_queue`, `running_process`, `completed`, `average_turnaround`,
//! `average_waiting`.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;

use super::{GanttSegment, Pid, Process, TickState, Ticks, TimelineEvent, Trace};
use crate::error::Result;

/// Per-process row of the result table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRecord {
    /// Process identifier.
    pub pid: Pid,
    /// Arrival time.
    pub arrival: Ticks,
    /// Total service demand.
    pub burst: Ticks,
    /// Priority value; omitted from JSON outside priority disciplines.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    /// Time of first dispatch.
    pub start: Ticks,
    /// Completion time.
    pub end: Ticks,
    /// `end - arrival`.
    pub turnaround: Ticks,
    /// `turnaround - burst`.
    pub waiting: Ticks,
}

impl ProcessRecord {
    /// Builds a row from a completed process. `None` if it never finished.
    pub fn from_process(process: &Process) -> Option<Self> {
        Some(Self {
            pid: process.pid,
            arrival: process.arrival,
            burst: process.burst,
            priority: process.priority,
            start: process.start?,
            end: process.end?,
            turnaround: process.turnaround()?,
            waiting: process.waiting()?,
        })
    }
}

/// Full outcome of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// One row per process, in input order.
    pub process_table: Vec<ProcessRecord>,
    /// Context switches in time order.
    pub timeline: Vec<TimelineEvent>,
    /// Waiting pids per tick.
    pub ready_queue: BTreeMap<Ticks, Vec<Pid>>,
    /// Running pid per busy tick.
    pub running_process: BTreeMap<Ticks, Pid>,
    /// Pids in completion order.
    pub completed: Vec<Pid>,
    /// Mean turnaround (exact; serialized at two decimals).
    #[serde(serialize_with = "serialize_two_decimals")]
    pub average_turnaround: f64,
    /// Mean waiting time (exact; serialized at two decimals).
    #[serde(serialize_with = "serialize_two_decimals")]
    pub average_waiting: f64,
}

impl SimulationResult {
    /// Assembles a result from finished rows, a trace, and precomputed averages.
    pub(crate) fn new(
        process_table: Vec<ProcessRecord>,
        trace: Trace,
        average_turnaround: f64,
        average_waiting: f64,
    ) -> Self {
        Self {
            process_table,
            timeline: trace.timeline,
            ready_queue: trace.ready_queue,
            running_process: trace.running_process,
            completed: trace.completed,
            average_turnaround,
            average_waiting,
        }
    }

    /// Row for a pid.
    pub fn process(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.process_table.iter().find(|p| p.pid == pid)
    }

    /// Exact sum of turnaround times.
    pub fn total_turnaround(&self) -> Ticks {
        self.process_table.iter().map(|p| p.turnaround).sum()
    }

    /// Exact sum of waiting times.
    pub fn total_waiting(&self) -> Ticks {
        self.process_table.iter().map(|p| p.waiting).sum()
    }

    /// Latest completion time.
    pub fn makespan(&self) -> Ticks {
        self.process_table.iter().map(|p| p.end).max().unwrap_or(0)
    }

    /// Ticks in `[0, makespan)` with no process running.
    pub fn idle_time(&self) -> Ticks {
        self.makespan() - self.running_process.len() as Ticks
    }

    /// Busy ticks / makespan (0.0..=1.0).
    pub fn cpu_utilization(&self) -> f64 {
        let makespan = self.makespan();
        if makespan <= 0 {
            return 0.0;
        }
        self.running_process.len() as f64 / makespan as f64
    }

    /// Number of switches after the first dispatch.
    pub fn context_switches(&self) -> usize {
        self.timeline.len().saturating_sub(1)
    }

    /// Contiguous CPU segments over `[0, makespan)`, idle gaps included.
    pub fn gantt(&self) -> Vec<GanttSegment> {
        let mut segments: Vec<GanttSegment> = Vec::new();

        for time in 0..self.makespan() {
            let pid = self.running_process.get(&time).copied();
            match segments.last_mut() {
                Some(last) if last.pid == pid => last.end = time + 1,
                _ => segments.push(GanttSegment {
                    start: time,
                    end: time + 1,
                    pid,
                }),
            }
        }

        segments
    }

    /// Scheduler state at `time`.
    pub fn state_at(&self, time: Ticks) -> TickState {
        let completed = self
            .completed
            .iter()
            .copied()
            .filter(|&pid| self.process(pid).is_some_and(|p| p.end <= time))
            .collect();

        TickState {
            time,
            running: self.running_process.get(&time).copied(),
            ready: self.ready_queue.get(&time).cloned().unwrap_or_default(),
            completed,
        }
    }

    /// Compact JSON wire rendering.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Indented JSON rendering.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Rounds to two decimals the way `printf("%.2f")` does.
///
/// The exact binary value is rounded, so a tie such as `0.125` resolves to
/// the even digit (`0.12`). JSON numbers carry no trailing zeros, so `1.00`
/// reaches the wire as `1.0`; use [`format_two_decimals`] for fixed text.
pub fn round_two_decimals(value: f64) -> f64 {
    format_two_decimals(value).parse().unwrap_or(value)
}

/// Fixed two-decimal text, e.g. `1.00`.
pub fn format_two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

fn serialize_two_decimals<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_two_decimals(*value))
}
