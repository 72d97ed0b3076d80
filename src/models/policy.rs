//! Scheduling policy selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Ticks;
use crate::error::ScheduleError;

/// Policy names as accepted on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    #[default]
    Fcfs,
    Sjf,
    Srtf,
    #[serde(rename = "rr")]
    RoundRobin,
    Priority,
    PriorityPreemptive,
}

impl PolicyKind {
    /// All policy kinds, in presentation order.
    pub const ALL: [PolicyKind; 6] = [
        PolicyKind::Fcfs,
        PolicyKind::Sjf,
        PolicyKind::Srtf,
        PolicyKind::RoundRobin,
        PolicyKind::Priority,
        PolicyKind::PriorityPreemptive,
    ];

    /// Wire name (`fcfs`, `sjf`, `srtf`, `rr`, `priority`, `priority_preemptive`).
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Srtf => "srtf",
            Self::RoundRobin => "rr",
            Self::Priority => "priority",
            Self::PriorityPreemptive => "priority_preemptive",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized)
            .ok_or_else(|| ScheduleError::UnknownPolicy(s.to_string()))
    }
}

/// A fully parameterized scheduling policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    Sjf,
    /// Shortest-Remaining-Time-First, preemptive.
    Srtf,
    /// Round-Robin with a fixed time slice.
    RoundRobin { quantum: Ticks },
    /// Priority scheduling (lower value wins).
    Priority { preemptive: bool },
}

impl Policy {
    /// Builds a policy from its name, taking the quantum for round-robin.
    ///
    /// `quantum` is ignored for every other policy.
    pub fn from_kind(kind: PolicyKind, quantum: Option<Ticks>) -> Result<Self, ScheduleError> {
        let policy = match kind {
            PolicyKind::Fcfs => Self::Fcfs,
            PolicyKind::Sjf => Self::Sjf,
            PolicyKind::Srtf => Self::Srtf,
            PolicyKind::RoundRobin => Self::RoundRobin {
                quantum: quantum.ok_or_else(|| {
                    ScheduleError::invalid_parameter("quantum", "required for round-robin")
                })?,
            },
            PolicyKind::Priority => Self::Priority { preemptive: false },
            PolicyKind::PriorityPreemptive => Self::Priority { preemptive: true },
        };
        policy.validate()?;
        Ok(policy)
    }

    /// The six policies, round-robin using `quantum`.
    pub fn all(quantum: Ticks) -> [Policy; 6] {
        [
            Self::Fcfs,
            Self::Sjf,
            Self::Srtf,
            Self::RoundRobin { quantum },
            Self::Priority { preemptive: false },
            Self::Priority { preemptive: true },
        ]
    }

    pub fn kind(&self) -> PolicyKind {
        match self {
            Self::Fcfs => PolicyKind::Fcfs,
            Self::Sjf => PolicyKind::Sjf,
            Self::Srtf => PolicyKind::Srtf,
            Self::RoundRobin { .. } => PolicyKind::RoundRobin,
            Self::Priority { preemptive: false } => PolicyKind::Priority,
            Self::Priority { preemptive: true } => PolicyKind::PriorityPreemptive,
        }
    }

    /// Whether a running process can lose the CPU before completing.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin { .. } | Self::Priority { preemptive: true }
        )
    }

    /// Rejects parameters the engine cannot run with.
    pub fn validate(&self) -> Result<(), ScheduleError> {
        match self {
            Self::RoundRobin { quantum: 0 } => Err(ScheduleError::invalid_parameter(
                "quantum",
                "must be greater than zero",
            )),
            _ => Ok(()),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RoundRobin { quantum } => write!(f, "rr(q={quantum})"),
            other => f.write_str(other.kind().name()),
        }
    }
}
