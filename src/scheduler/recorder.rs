//! Trace recorder.
//!
//! Accumulates the observations of one simulation run: a ready-queue
//! snapshot for every visited tick, the running pid for every busy tick,
//! context switches, and completion order.

use crate::models::{Pid, Ticks, TimelineEvent, Trace};

/// Per-run trace accumulator.
#[derive(Debug, Default)]
pub struct TraceRecorder {
    trace: Trace,
    last_running: Option<Pid>,
}

impl TraceRecorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the waiting processes at `time`.
    pub fn record_ready(&mut self, time: Ticks, waiting: Vec<Pid>) {
        self.trace.ready_queue.insert(time, waiting);
    }

    /// Records that `pid` holds the CPU for the unit at `time`.
    ///
    /// Emits a timeline event when `pid` differs from the previous tick's
    /// process, including after an idle tick.
    pub fn record_running(&mut self, time: Ticks, pid: Pid) {
        debug_assert!(
            !self
                .trace
                .ready_queue
                .get(&time)
                .is_some_and(|ready| ready.contains(&pid)),
            "running process {pid} listed as waiting at {time}"
        );
        self.trace.running_process.insert(time, pid);
        if self.last_running != Some(pid) {
            self.trace.timeline.push(TimelineEvent::new(time, pid));
            self.last_running = Some(pid);
        }
    }

    /// Records an idle unit at `time`.
    pub fn record_idle(&mut self, _time: Ticks) {
        self.last_running = None;
    }

    /// Records that `pid` finished.
    pub fn record_completion(&mut self, pid: Pid) {
        self.trace.completed.push(pid);
    }

    /// Process that ran on the most recent tick.
    pub fn last_running(&self) -> Option<Pid> {
        self.last_running
    }

    /// Finishes recording.
    pub fn into_trace(self) -> Trace {
        self.trace
    }
}
