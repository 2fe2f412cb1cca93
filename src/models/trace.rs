//! Execution trace types.
//!
//! A trace is what a visualizer replays: context switches, the ready
//! queue at every tick, and which process held the CPU.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Pid, Ticks};

/// A context switch: `pid` starts running at `time`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Switch time.
    pub time: Ticks,
    /// Newly running process.
    pub pid: Pid,
}

impl TimelineEvent {
    /// Creates a timeline event.
    pub fn new(time: Ticks, pid: Pid) -> Self {
        Self { time, pid }
    }
}

/// Raw per-run trace accumulated by the simulator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    /// Context switches in time order.
    pub timeline: Vec<TimelineEvent>,
    /// Waiting processes at every visited tick (running process excluded).
    pub ready_queue: BTreeMap<Ticks, Vec<Pid>>,
    /// Running process at every busy tick.
    pub running_process: BTreeMap<Ticks, Pid>,
    /// Pids in completion order.
    pub completed: Vec<Pid>,
}

/// A contiguous stretch of CPU time in a Gantt chart.
///
/// `pid == None` marks an idle gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Inclusive start.
    pub start: Ticks,
    /// Exclusive end.
    pub end: Ticks,
    /// Process on the CPU, or `None` when idle.
    pub pid: Option<Pid>,
}

impl GanttSegment {
    /// Segment length.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }

    /// Whether the CPU was idle for this segment.
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.pid.is_none()
    }
}

/// Scheduler state at a single tick, as a visualizer would display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickState {
    /// The tick.
    pub time: Ticks,
    /// Process on the CPU, if any.
    pub running: Option<Pid>,
    /// Waiting processes in queue order.
    pub ready: Vec<Pid>,
    /// Processes finished by this tick, in completion order.
    pub completed: Vec<Pid>,
}
