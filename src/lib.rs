//! CPU-scheduling trace engine for the U-Engine ecosystem.
//!
//! Computes the full per-tick execution trace of a fixed set of processes
//! under a classic single-CPU discipline: which process runs, which wait,
//! when context switches happen, and the resulting turnaround and waiting
//! times. The output is the record a visualization or teaching tool replays.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `Workload`, `Discipline`,
//!   `SimulationResult`, `TimelineEvent`, `GanttSegment`
//! - **`dispatching`**: Integer-keyed dispatching rules and a sequential rule engine
//! - **`scheduler`**: Selection policies, the tick-driven `Simulator`, trace
//!   recording, and summary metrics
//! - **`validation`**: Input precondition checks
//!
//! # Disciplines
//!
//! | Function | Policy | Mode |
//! |----------|--------|------|
//! | `fcfs` | earliest arrival | run to completion |
//! | `sjf` | smallest burst | run to completion |
//! | `sjf_preemptive` | smallest remaining | every tick |
//! | `priority` | smallest priority value | run to completion |
//! | `priority_preemptive` | smallest priority value | every tick |
//! | `round_robin` | FIFO queue | fixed quantum |
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Arpaci-Dusseau (2018), "Operating Systems: Three Easy Pieces", Ch. 7-9

mod api;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use api::{fcfs, priority, priority_preemptive, round_robin, simulate, sjf, sjf_preemptive};
pub use error::{Result, ScheduleError};
