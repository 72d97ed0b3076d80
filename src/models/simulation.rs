//! Simulation result model.
//!
//! The terminal artifact of one run: the completed processes and the Gantt
//! timeline that produced them.

use serde::{Deserialize, Serialize};

use super::{Policy, ProcessOutcome, Ticks, Timeline};

/// Result of simulating one policy over a process set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Policy that produced this result.
    pub policy: Policy,
    /// Completed processes in arrival order (stable w.r.t. input order).
    pub processes: Vec<ProcessOutcome>,
    /// CPU timeline.
    pub timeline: Timeline,
}

impl SimulationResult {
    /// Creates a result.
    pub fn new(policy: Policy, processes: Vec<ProcessOutcome>, timeline: Timeline) -> Self {
        Self {
            policy,
            processes,
            timeline,
        }
    }

    /// Finds the outcome of a process by ID.
    pub fn outcome(&self, process_id: &str) -> Option<&ProcessOutcome> {
        self.processes.iter().find(|p| p.id == process_id)
    }

    /// Latest completion time across all processes.
    pub fn last_finish_time(&self) -> Option<Ticks> {
        self.processes.iter().map(|p| p.finish_time).max()
    }

    /// Process IDs in the order they completed.
    pub fn completion_order(&self) -> Vec<&str> {
        let mut done: Vec<&ProcessOutcome> = self.processes.iter().collect();
        done.sort_by_key(|p| p.finish_time);
        done.into_iter().map(|p| p.id.as_str()).collect()
    }

    pub fn process_count(&self) -> usize {
        self.processes.len()
    }
}
