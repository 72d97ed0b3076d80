//! Process model.
//!
//! A process is a unit of CPU work: it becomes eligible at its arrival time
//! and needs `burst_time` ticks of CPU before it completes.
//!
//! Input and output are kept in separate shapes. [`Process`] is the immutable
//! input record and is only ever borrowed by a simulation run; the run
//! produces one [`ProcessOutcome`] per process with the derived timings.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// Discrete simulation time unit.
pub type Ticks = u64;

/// Priority assigned when none is given. Lower value = higher priority.
pub const DEFAULT_PRIORITY: i32 = 1;

fn default_priority() -> i32 {
    DEFAULT_PRIORITY
}

/// A process to be scheduled.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Process identifier, unique within a run.
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival_time: Ticks,
    /// Total CPU time required (must be > 0).
    pub burst_time: Ticks,
    /// Scheduling priority (lower = more important).
    #[serde(default = "default_priority")]
    pub priority: i32,
}

impl Process {
    /// Creates a process with the default priority.
    pub fn new(id: impl Into<String>, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

/// Timings of a process after it has completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessOutcome {
    pub id: String,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: i32,
    /// Tick of the first dispatch onto the CPU.
    pub start_time: Ticks,
    /// Tick at which the last unit of work finished.
    pub finish_time: Ticks,
    /// `finish_time - arrival_time`.
    pub turnaround_time: Ticks,
    /// `turnaround_time - burst_time`: time spent ready but not running.
    pub waiting_time: Ticks,
    /// `start_time - arrival_time`.
    pub response_time: Ticks,
}

impl ProcessOutcome {
    /// Derives the outcome of a completed process.
    ///
    /// The engine guarantees `arrival <= start` and `finish - arrival >= burst`.
    pub(crate) fn completed(process: &Process, start_time: Ticks, finish_time: Ticks) -> Self {
        debug_assert!(process.arrival_time <= start_time);
        debug_assert!(finish_time - start_time >= process.burst_time);

        let turnaround_time = finish_time - process.arrival_time;
        Self {
            id: process.id.clone(),
            arrival_time: process.arrival_time,
            burst_time: process.burst_time,
            priority: process.priority,
            start_time,
            finish_time,
            turnaround_time,
            waiting_time: turnaround_time - process.burst_time,
            response_time: start_time - process.arrival_time,
        }
    }
}
