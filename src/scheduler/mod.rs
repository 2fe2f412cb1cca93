//! Simulation engine, selection policies, and summary metrics.
//!
//! # Algorithm
//!
//! `Simulator` runs a single-CPU, tick-driven loop parameterized by a
//! `SelectionPolicy`. The policy's `Preemption` mode picks the driving
//! style: run-to-completion (FCFS, SJF, Priority), per-tick re-evaluation
//! (SRTF, preemptive Priority), or quantum rotation (Round Robin).
//!
//! # Summary
//!
//! `Summary` computes total and mean turnaround/waiting time.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7

mod policy;
mod recorder;
mod simulator;
mod summary;

pub use policy::{policy_for, Preemption, RoundRobinPolicy, RulePolicy, SelectionPolicy};
pub use recorder::TraceRecorder;
pub use simulator::Simulator;
pub use summary::{summarize, Summary};
