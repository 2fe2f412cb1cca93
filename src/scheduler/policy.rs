//! Selection policies.
//!
//! A policy decides which eligible process gets the CPU for the next unit
//! and in what order waiting processes are listed. Comparator disciplines
//! wrap a [`RuleEngine`]; round robin keeps an explicit FIFO admission queue.

use std::collections::VecDeque;
use std::fmt::Debug;

use crate::dispatching::{rules, RuleEngine, SchedulingContext, TieBreaker};
use crate::models::{Discipline, Pid, Process, Ticks};

/// When the running process may lose the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preemption {
    /// Runs until its burst is exhausted.
    RunToCompletion,
    /// Re-evaluated before every unit.
    EveryTick,
    /// Rotated after at most `quantum` consecutive units.
    Quantum(Ticks),
}

/// Chooses the next process to run.
///
/// Implementations must be deterministic for identical inputs.
pub trait SelectionPolicy: Debug {
    /// Policy name.
    fn name(&self) -> &'static str;

    /// Driving mode for the simulator.
    fn preemption(&self) -> Preemption;

    /// Notified once per process, the tick its arrival time is reached.
    /// Same-tick arrivals are admitted in pid order.
    fn admit(&mut self, _pid: Pid) {}

    /// Hands back a process whose quantum expired with service still owed.
    fn requeue(&mut self, _pid: Pid) {}

    /// Picks the process to run from the eligible set (input order).
    fn select(&mut self, eligible: &[&Process], context: &SchedulingContext) -> Option<Pid>;

    /// Orders the waiting processes (eligible minus the running one).
    fn ready_queue(&self, waiting: &[&Process], context: &SchedulingContext) -> Vec<Pid>;
}

/// A policy driven entirely by a rule engine.
#[derive(Debug, Clone)]
pub struct RulePolicy {
    name: &'static str,
    engine: RuleEngine,
    preemption: Preemption,
}

impl RulePolicy {
    /// Creates a rule-driven policy.
    pub fn new(name: &'static str, engine: RuleEngine, preemption: Preemption) -> Self {
        Self {
            name,
            engine,
            preemption,
        }
    }

    /// Earliest arrival, ties by pid. Never preempted.
    pub fn fcfs() -> Self {
        Self::new(
            "FCFS",
            RuleEngine::new()
                .with_rule(rules::ArrivalTime)
                .with_final_tie_breaker(TieBreaker::ByPid),
            Preemption::RunToCompletion,
        )
    }

    /// Smallest burst, ties by pid. Never preempted.
    pub fn sjf() -> Self {
        Self::new(
            "SJF",
            RuleEngine::new()
                .with_rule(rules::BurstTime)
                .with_final_tie_breaker(TieBreaker::ByPid),
            Preemption::RunToCompletion,
        )
    }

    /// Smallest remaining time, then earliest arrival, then pid. Re-evaluated every tick.
    pub fn srtf() -> Self {
        Self::new(
            "SRTF",
            RuleEngine::new()
                .with_rule(rules::RemainingTime)
                .with_tie_breaker(rules::ArrivalTime)
                .with_final_tie_breaker(TieBreaker::ByPid),
            Preemption::EveryTick,
        )
    }

    /// Smallest priority value, then earliest arrival, then pid. Never preempted.
    pub fn priority() -> Self {
        Self::new("PRIORITY", priority_engine(), Preemption::RunToCompletion)
    }

    /// Same ordering as [`RulePolicy::priority`], re-evaluated every tick.
    pub fn priority_preemptive() -> Self {
        Self::new("PRIORITY-P", priority_engine(), Preemption::EveryTick)
    }

    /// The underlying rule engine.
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }
}

fn priority_engine() -> RuleEngine {
    RuleEngine::new()
        .with_rule(rules::PriorityValue)
        .with_tie_breaker(rules::ArrivalTime)
        .with_final_tie_breaker(TieBreaker::ByPid)
}

impl SelectionPolicy for RulePolicy {
    fn name(&self) -> &'static str {
        self.name
    }

    fn preemption(&self) -> Preemption {
        self.preemption
    }

    fn select(&mut self, eligible: &[&Process], context: &SchedulingContext) -> Option<Pid> {
        self.engine.select_best(eligible, context)
    }

    fn ready_queue(&self, waiting: &[&Process], context: &SchedulingContext) -> Vec<Pid> {
        self.engine.sort_pids(waiting, context)
    }
}

/// Round robin over a FIFO admission queue.
///
/// A process enters the queue once on arrival, leaves it only when
/// dispatched, and re-enters at the back when its quantum expires. Arrivals
/// during a slice are therefore queued ahead of the preempted process.
#[derive(Debug, Clone)]
pub struct RoundRobinPolicy {
    quantum: Ticks,
    queue: VecDeque<Pid>,
}

impl RoundRobinPolicy {
    /// Creates a round-robin policy. A quantum below 1 is rejected when
    /// the simulator starts.
    pub fn new(quantum: Ticks) -> Self {
        Self {
            quantum,
            queue: VecDeque::new(),
        }
    }

    /// The time quantum.
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    /// Queued pids, front first.
    pub fn queued(&self) -> impl Iterator<Item = Pid> + '_ {
        self.queue.iter().copied()
    }
}

impl SelectionPolicy for RoundRobinPolicy {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn preemption(&self) -> Preemption {
        Preemption::Quantum(self.quantum)
    }

    fn admit(&mut self, pid: Pid) {
        self.queue.push_back(pid);
    }

    fn requeue(&mut self, pid: Pid) {
        self.queue.push_back(pid);
    }

    fn select(&mut self, eligible: &[&Process], _context: &SchedulingContext) -> Option<Pid> {
        let pid = self.queue.pop_front()?;
        debug_assert!(
            eligible.iter().any(|p| p.pid == pid),
            "queued process {pid} is not eligible"
        );
        Some(pid)
    }

    fn ready_queue(&self, _waiting: &[&Process], _context: &SchedulingContext) -> Vec<Pid> {
        self.queued().collect()
    }
}

/// Builds the policy for a discipline.
pub fn policy_for(discipline: &Discipline) -> Box<dyn SelectionPolicy> {
    match *discipline {
        Discipline::Fcfs => Box::new(RulePolicy::fcfs()),
        Discipline::Sjf => Box::new(RulePolicy::sjf()),
        Discipline::Srtf => Box::new(RulePolicy::srtf()),
        Discipline::Priority => Box::new(RulePolicy::priority()),
        Discipline::PriorityPreemptive => Box::new(RulePolicy::priority_preemptive()),
        Discipline::RoundRobin { quantum } => Box::new(RoundRobinPolicy::new(quantum)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn refs(processes: &[Process]) -> Vec<&Process> {
        processes.iter().collect()
    }

    #[test]
    fn test_fcfs_prefers_earliest_arrival() {
        let processes = vec![Process::new(1, 3, 1), Process::new(2, 1, 9), Process::new(3, 1, 1)];
        let mut policy = RulePolicy::fcfs();
        let ctx = SchedulingContext::at_time(3);

        assert_eq!(policy.select(&refs(&processes), &ctx), Some(2));
        assert_eq!(policy.ready_queue(&refs(&processes), &ctx), vec![2, 3, 1]);
    }

    #[test]
    fn test_sjf_ties_by_pid() {
        let processes = vec![Process::new(1, 0, 6), Process::new(2, 2, 3), Process::new(3, 1, 3)];
        let mut policy = RulePolicy::sjf();
        assert_eq!(
            policy.select(&refs(&processes), &SchedulingContext::at_time(2)),
            Some(2)
        );
    }

    #[test]
    fn test_srtf_ties_by_arrival_then_pid() {
        let mut processes = vec![
            Process::new(1, 2, 3),
            Process::new(2, 1, 3),
            Process::new(3, 1, 3),
        ];
        let mut policy = RulePolicy::srtf();
        let ctx = SchedulingContext::at_time(2);
        assert_eq!(policy.select(&refs(&processes), &ctx), Some(2));

        processes[0].remaining = 2;
        assert_eq!(policy.select(&refs(&processes), &ctx), Some(1));
    }

    #[test]
    fn test_priority_modes() {
        assert_eq!(RulePolicy::priority().preemption(), Preemption::RunToCompletion);
        assert_eq!(RulePolicy::priority_preemptive().preemption(), Preemption::EveryTick);
        assert_eq!(
            RulePolicy::priority().engine().rule_names(),
            vec!["PRIORITY", "FCFS"]
        );

        let processes = vec![
            Process::new(1, 0, 2).with_priority(3),
            Process::new(2, 0, 2).with_priority(1),
        ];
        let mut policy = RulePolicy::priority();
        assert_eq!(
            policy.select(&refs(&processes), &SchedulingContext::at_time(0)),
            Some(2)
        );
    }

    #[test]
    fn test_round_robin_fifo() {
        let processes = vec![Process::new(1, 0, 2), Process::new(2, 0, 2)];
        let mut policy = RoundRobinPolicy::new(2);
        let ctx = SchedulingContext::at_time(0);
        policy.admit(1);
        policy.admit(2);

        assert_eq!(policy.select(&refs(&processes), &ctx), Some(1));
        assert_eq!(policy.ready_queue(&[], &ctx), vec![2]);

        policy.requeue(1);
        assert_eq!(policy.queued().collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(policy.select(&refs(&processes), &ctx), Some(2));
    }

    #[test]
    fn test_round_robin_empty_queue() {
        let mut policy = RoundRobinPolicy::new(3);
        assert_eq!(policy.quantum(), 3);
        assert_eq!(policy.select(&[], &SchedulingContext::at_time(0)), None);
        assert_eq!(policy.preemption(), Preemption::Quantum(3));
    }

    #[test]
    fn test_policy_for() {
        assert_eq!(policy_for(&Discipline::Fcfs).name(), "FCFS");
        assert_eq!(policy_for(&Discipline::Srtf).preemption(), Preemption::EveryTick);
        assert_eq!(
            policy_for(&Discipline::RoundRobin { quantum: 4 }).preemption(),
            Preemption::Quantum(4)
        );
    }
}
