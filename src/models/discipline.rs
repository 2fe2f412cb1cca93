//! Scheduling discipline selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::Ticks;
use crate::error::ScheduleError;

/// Quantum used when a round-robin discipline is parsed from a bare name.
pub const DEFAULT_QUANTUM: Ticks = 2;

/// The CPU-scheduling discipline to simulate.
///
/// Serializes as a tagged object, e.g. `{"kind":"round_robin","quantum":2}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Discipline {
    /// First-come, first-served.
    Fcfs,
    /// Shortest job first, non-preemptive.
    Sjf,
    /// Shortest remaining time first (preemptive SJF).
    Srtf,
    /// Priority, non-preemptive.
    Priority,
    /// Priority, preemptive.
    PriorityPreemptive,
    /// Round robin with a fixed time quantum.
    RoundRobin {
        /// Maximum contiguous slice.
        quantum: Ticks,
    },
}

impl Discipline {
    /// Canonical snake_case name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::Priority => "priority",
            Self::PriorityPreemptive => "priority_preemptive",
            Self::RoundRobin { .. } => "round_robin",
        }
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "First-Come First-Served",
            Self::Sjf => "Shortest Job First",
            Self::Srtf => "Shortest Remaining Time First",
            Self::Priority => "Priority",
            Self::PriorityPreemptive => "Preemptive Priority",
            Self::RoundRobin { .. } => "Round Robin",
        }
    }

    /// Whether every process needs a priority value.
    pub const fn requires_priorities(&self) -> bool {
        matches!(self, Self::Priority | Self::PriorityPreemptive)
    }

    /// Whether a running process can lose the CPU before finishing.
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::PriorityPreemptive | Self::RoundRobin { .. }
        )
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "{}(q={quantum})", self.as_str()),
            _ => f.write_str(self.as_str()),
        }
    }
}

impl FromStr for Discipline {
    type Err = ScheduleError;

    /// Parses a discipline name. Round robin accepts an optional `:quantum` suffix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        let (name, quantum) = match lowered.split_once(':') {
            Some((name, q)) => (
                name,
                Some(
                    q.trim()
                        .parse::<Ticks>()
                        .map_err(|_| ScheduleError::UnknownDiscipline(s.to_string()))?,
                ),
            ),
            None => (lowered.as_str(), None),
        };

        let discipline = match name.trim() {
            "fcfs" | "fifo" => Self::Fcfs,
            "sjf" | "spn" => Self::Sjf,
            "srtf" | "sjf_preemptive" | "srt" => Self::Srtf,
            "priority" | "prio" => Self::Priority,
            "priority_preemptive" | "prio_preemptive" => Self::PriorityPreemptive,
            "rr" | "round_robin" | "roundrobin" => Self::RoundRobin {
                quantum: quantum.unwrap_or(DEFAULT_QUANTUM),
            },
            _ => return Err(ScheduleError::UnknownDiscipline(s.to_string())),
        };

        if quantum.is_some() && !matches!(discipline, Self::RoundRobin { .. }) {
            return Err(ScheduleError::UnknownDiscipline(s.to_string()));
        }
        Ok(discipline)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("FCFS".parse::<Discipline>().unwrap(), Discipline::Fcfs);
        assert_eq!("sjf_preemptive".parse::<Discipline>().unwrap(), Discipline::Srtf);
        assert_eq!(
            "rr".parse::<Discipline>().unwrap(),
            Discipline::RoundRobin {
                quantum: DEFAULT_QUANTUM
            }
        );
        assert_eq!(
            "round_robin:4".parse::<Discipline>().unwrap(),
            Discipline::RoundRobin { quantum: 4 }
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            "lottery".parse::<Discipline>(),
            Err(ScheduleError::UnknownDiscipline(_))
        ));
        assert!("sjf:3".parse::<Discipline>().is_err());
        assert!("rr:x".parse::<Discipline>().is_err());
    }

    #[test]
    fn test_flags() {
        assert!(Discipline::Priority.requires_priorities());
        assert!(!Discipline::Priority.is_preemptive());
        assert!(Discipline::RoundRobin { quantum: 1 }.is_preemptive());
        assert!(!Discipline::Fcfs.requires_priorities());
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Discipline::RoundRobin { quantum: 3 }).unwrap();
        assert_eq!(json, r#"{"kind":"round_robin","quantum":3}"#);

        let parsed: Discipline = serde_json::from_str(r#"{"kind":"srtf"}"#).unwrap();
        assert_eq!(parsed, Discipline::Srtf);
    }

    #[test]
    fn test_display() {
        assert_eq!(Discipline::RoundRobin { quantum: 2 }.to_string(), "round_robin(q=2)");
        assert_eq!(Discipline::PriorityPreemptive.to_string(), "priority_preemptive");
    }
}
