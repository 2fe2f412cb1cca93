//! Process model.
//!
//! A process is the unit of work competing for the single simulated CPU.
//! It carries immutable input facts (arrival, burst, optional priority)
//! and the mutable state the simulator advances tick by tick.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// Process identifier: 1-based position in the caller's input.
pub type Pid = u32;

/// Discrete simulation time (integer time units).
pub type Ticks = i64;

/// A process under simulation.
///
/// # Invariants
/// - `0 <= remaining <= burst`
/// - `remaining == 0` exactly when `end` is set
/// - `start <= end` once both are set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier.
    pub pid: Pid,
    /// Time at which the process becomes eligible.
    pub arrival: Ticks,
    /// Total service demand.
    pub burst: Ticks,
    /// Scheduling priority (lower value = more urgent). `None` outside priority disciplines.
    pub priority: Option<i64>,
    /// Service still owed.
    pub remaining: Ticks,
    /// Time of first dispatch.
    pub start: Option<Ticks>,
    /// Completion time.
    pub end: Option<Ticks>,
}

impl Process {
    /// Creates a fresh process with `remaining == burst`.
    pub fn new(pid: Pid, arrival: Ticks, burst: Ticks) -> Self {
        Self {
            pid,
            arrival,
            burst,
            priority: None,
            remaining: burst,
            start: None,
            end: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process may run at `time` (arrived and unfinished).
    #[inline]
    pub fn is_eligible(&self, time: Ticks) -> bool {
        self.arrival <= time && self.remaining > 0
    }

    /// Whether the process has received its full burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.end.is_some()
    }

    /// Completion time minus arrival. `None` until complete.
    pub fn turnaround(&self) -> Option<Ticks> {
        self.end.map(|end| end - self.arrival)
    }

    /// Turnaround minus burst. `None` until complete.
    pub fn waiting(&self) -> Option<Ticks> {
        self.turnaround().map(|turnaround| turnaround - self.burst)
    }

    /// Runs the process for the unit starting at `time`.
    ///
    /// Records the first dispatch and, when the last unit is consumed,
    /// the completion time `time + 1`. Returns `true` on completion.
    pub(crate) fn execute(&mut self, time: Ticks) -> bool {
        debug_assert!(self.remaining > 0, "process {} has no service left", self.pid);
        if self.start.is_none() {
            self.start = Some(time);
        }
        self.remaining -= 1;
        if self.remaining == 0 {
            self.end = Some(time + 1);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_process() {
        let p = Process::new(1, 3, 5).with_priority(2);
        assert_eq!(p.remaining, 5);
        assert_eq!(p.priority, Some(2));
        assert!(p.start.is_none());
        assert!(!p.is_complete());
        assert_eq!(p.turnaround(), None);
    }

    #[test]
    fn test_eligibility() {
        let p = Process::new(1, 3, 1);
        assert!(!p.is_eligible(2));
        assert!(p.is_eligible(3));
        assert!(p.is_eligible(10));
    }

    #[test]
    fn test_execute_to_completion() {
        let mut p = Process::new(1, 1, 2);
        assert!(!p.execute(4));
        assert_eq!(p.start, Some(4));
        assert!(p.execute(7));
        assert_eq!(p.start, Some(4));
        assert_eq!(p.end, Some(8));
        assert!(!p.is_eligible(8));
        assert_eq!(p.turnaround(), Some(7));
        assert_eq!(p.waiting(), Some(5));
    }
}
