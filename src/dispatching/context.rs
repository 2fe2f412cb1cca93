//! Scheduling context for dispatching rule evaluation.

use crate::models::{Pid, Ticks};

/// Runtime state passed to dispatching rules and selection policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulingContext {
    /// Current simulation time.
    pub current_time: Ticks,
    /// Process that ran during the previous tick, if any.
    pub previous: Option<Pid>,
}

impl SchedulingContext {
    /// Creates a context at the given time.
    pub fn at_time(current_time: Ticks) -> Self {
        Self {
            current_time,
            ..Default::default()
        }
    }

    /// Sets the process that held the CPU on the previous tick.
    pub fn with_previous(mut self, pid: Option<Pid>) -> Self {
        self.previous = pid;
        self
    }
}
