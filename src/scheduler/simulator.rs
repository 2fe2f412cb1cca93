//! Tick-driven CPU scheduling simulator.
//!
//! # Algorithm
//!
//! One loop drives every discipline, advancing one time unit per iteration:
//! 1. Admit processes whose arrival time equals the current tick (pid order).
//! 2. Keep the running process if its policy lets it continue
//!    (run-to-completion, or quantum not yet used up); otherwise hand an
//!    expired round-robin slice back to the policy and ask for a new pick
//!    among the eligible processes.
//! 3. Record the ready queue (eligible minus running, in policy order).
//! 4. Execute the chosen process for one unit, or record an idle unit.
//!
//! Run-to-completion disciplines therefore hold the CPU for the whole
//! remaining burst, while tick-mode disciplines are re-evaluated each unit.
//! The loop ends when every process has received its full burst.
//!
//! # Complexity
//! O(T · n log n) where T = makespan, n = processes.

use tracing::{debug, info, instrument, trace, warn};

use super::policy::{policy_for, Preemption, SelectionPolicy};
use super::recorder::TraceRecorder;
use super::summary::summarize;
use crate::dispatching::SchedulingContext;
use crate::error::Result;
use crate::models::{Discipline, Pid, Process, SimulationResult, Ticks};
use crate::validation::validate_processes;

/// The process currently holding the CPU.
#[derive(Debug, Clone, Copy)]
struct Slice {
    index: usize,
    used: Ticks,
}

/// Single-CPU scheduling simulator.
///
/// Holds no state across runs other than its policy; build a fresh
/// simulator per run when the policy keeps a queue.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Discipline, Workload};
/// use u_cpusched::scheduler::Simulator;
///
/// let workload = Workload::new().with_process(0, 3).with_process(1, 1);
/// let result = Simulator::for_discipline(&Discipline::Sjf)
///     .run(workload.processes())
///     .unwrap();
/// assert_eq!(result.completed, vec![1, 2]);
/// ```
#[derive(Debug)]
pub struct Simulator {
    policy: Box<dyn SelectionPolicy>,
}

impl Simulator {
    /// Creates a simulator driven by `policy`.
    pub fn new(policy: Box<dyn SelectionPolicy>) -> Self {
        Self { policy }
    }

    /// Creates a simulator for a discipline.
    pub fn for_discipline(discipline: &Discipline) -> Self {
        Self::new(policy_for(discipline))
    }

    /// The active policy.
    pub fn policy(&self) -> &dyn SelectionPolicy {
        self.policy.as_ref()
    }

    /// Runs the simulation to completion.
    ///
    /// `processes` should be in input order. The set is checked with
    /// [`validate_processes`] first; any process that could never finish
    /// (negative arrival, no service owed, stale run state) is rejected with
    /// [`crate::ScheduleError::InvalidInput`].
    #[instrument(skip_all, fields(policy = self.policy.name(), processes = processes.len()))]
    pub fn run(&mut self, mut processes: Vec<Process>) -> Result<SimulationResult> {
        let preemption = self.policy.preemption();
        if let Err(errors) = validate_processes(&processes, preemption) {
            warn!(errors = errors.len(), "rejected process set");
            return Err(errors.into());
        }

        let mut recorder = TraceRecorder::new();
        let mut unfinished = processes.len();
        let mut slice: Option<Slice> = None;
        let mut time: Ticks = 0;

        while unfinished > 0 {
            let context = SchedulingContext::at_time(time).with_previous(recorder.last_running());

            for process in processes.iter().filter(|p| p.arrival == time && p.remaining > 0) {
                trace!(time, pid = process.pid, "admitted");
                self.policy.admit(process.pid);
            }

            let held = match (slice, preemption) {
                (Some(s), Preemption::RunToCompletion) => Some(s),
                (Some(s), Preemption::Quantum(quantum)) if s.used < quantum => Some(s),
                (Some(s), Preemption::Quantum(_)) => {
                    self.policy.requeue(processes[s.index].pid);
                    None
                }
                _ => None,
            };

            let current = match held {
                Some(s) => Some(s),
                None => {
                    let eligible: Vec<&Process> =
                        processes.iter().filter(|p| p.is_eligible(time)).collect();
                    self.policy
                        .select(&eligible, &context)
                        .and_then(|pid| index_of(&processes, pid))
                        .map(|index| Slice { index, used: 0 })
                }
            };

            if let (Some(prev), Some(next)) = (slice, current) {
                if prev.index != next.index {
                    debug!(
                        time,
                        preempted = processes[prev.index].pid,
                        by = processes[next.index].pid,
                        "preemption"
                    );
                }
            }

            let running = current.map(|s| processes[s.index].pid);
            let waiting: Vec<&Process> = processes
                .iter()
                .filter(|p| p.is_eligible(time) && Some(p.pid) != running)
                .collect();
            recorder.record_ready(time, self.policy.ready_queue(&waiting, &context));

            match current {
                Some(mut s) => {
                    let process = &mut processes[s.index];
                    if context.previous != Some(process.pid) {
                        debug!(time, pid = process.pid, remaining = process.remaining, "dispatch");
                    }
                    recorder.record_running(time, process.pid);
                    s.used += 1;

                    if process.execute(time) {
                        debug!(time = time + 1, pid = process.pid, "completed");
                        recorder.record_completion(process.pid);
                        unfinished -= 1;
                        slice = None;
                    } else {
                        slice = Some(s);
                    }
                }
                None => {
                    trace!(time, "idle");
                    recorder.record_idle(time);
                    slice = None;
                }
            }

            time += 1;
        }

        let result = summarize(&processes, recorder.into_trace())?;
        info!(
            makespan = time,
            switches = result.timeline.len(),
            average_turnaround = result.average_turnaround,
            average_waiting = result.average_waiting,
            "simulation finished"
        );
        Ok(result)
    }
}

fn index_of(processes: &[Process], pid: Pid) -> Option<usize> {
    processes.iter().position(|p| p.pid == pid)
}
