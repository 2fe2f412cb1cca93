//! Dispatching rules and rule engine for process selection.
//!
//! Provides the integer-keyed rules behind the comparator disciplines
//! (arrival, burst, remaining, priority) and a rule engine that applies
//! them sequentially, falling through to the next rule on ties.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{RuleEngine, SchedulingContext, TieBreaker};
//! use u_cpusched::dispatching::rules;
//! use u_cpusched::models::Process;
//!
//! // Shortest remaining time, then earliest arrival, then lowest pid.
//! let engine = RuleEngine::new()
//!     .with_rule(rules::RemainingTime)
//!     .with_tie_breaker(rules::ArrivalTime)
//!     .with_final_tie_breaker(TieBreaker::ByPid);
//!
//! let processes = vec![Process::new(1, 0, 7), Process::new(2, 1, 4)];
//! let eligible: Vec<&Process> = processes.iter().collect();
//! let best = engine.select_best(&eligible, &SchedulingContext::at_time(1));
//! assert_eq!(best, Some(2));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Haupt (1989), "A Survey of Priority Rule-Based Scheduling"

mod context;
mod engine;
pub mod rules;

pub use context::SchedulingContext;
pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (dispatched first). Integer so that
/// ties are exact.
pub type RuleScore = i64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules should return smaller values
/// for processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "PRIORITY").
    fn name(&self) -> &'static str;

    /// Evaluates a process given the current scheduling context.
    ///
    /// Returns a score where lower = higher priority.
    fn evaluate(&self, process: &Process, context: &SchedulingContext) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
