//! CPU-scheduling domain models.
//!
//! Provides the input, state, and output types of a simulation run.
//!
//! # Lifecycle
//!
//! | Type | Role |
//! |------|------|
//! | Workload | Caller input: ordered (arrival, burst[, priority]) specs |
//! | Discipline | Which scheduling algorithm to simulate |
//! | Process | Mutable per-run state, owned by the simulator |
//! | Trace | Raw recorder output |
//! | SimulationResult | Wire record consumed by the visualizer |

mod discipline;
mod process;
mod result;
mod trace;
mod workload;

pub use discipline::{Discipline, DEFAULT_QUANTUM};
pub use process::{Pid, Process, Ticks};
pub use result::{format_two_decimals, round_two_decimals, ProcessRecord, SimulationResult};
pub use trace::{GanttSegment, TickState, TimelineEvent, Trace};
pub use workload::{ProcessSpec, RandomWorkloadOptions, Workload};
