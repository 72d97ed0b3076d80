//! CPU scheduling engine and metrics.
//!
//! Runs one policy over a process set and produces a [`SimulationResult`].
//!
//! # Policies
//!
//! | Policy | Module | Ready queue |
//! |--------|--------|-------------|
//! | FCFS | `fcfs` | arrival order |
//! | SJF | `nonpreemptive` | heap on burst |
//! | Priority | `nonpreemptive` | heap on priority |
//! | SRTF | `preemptive` | heap on remaining |
//! | Priority (preemptive) | `preemptive` | heap on priority |
//! | Round-Robin | `round_robin` | FIFO |
//!
//! Each run borrows its input immutably, so the same process list can be
//! replayed through several policies, or from several threads, without
//! copying.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod fcfs;
mod metrics;
mod nonpreemptive;
mod preemptive;
mod round_robin;
mod state;

pub use metrics::SimulationMetrics;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dispatching::rules;
use crate::error::ScheduleError;
use crate::models::{Policy, Process, SimulationResult};
use crate::validation::validate_processes;

/// Time advancement model for the preemptive policies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stepping {
    /// Re-evaluate the ready queue after every tick.
    Stepwise,
    /// Jump to the next arrival or completion, whichever comes first.
    #[default]
    EventDriven,
}

/// Input container for a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Processes to schedule.
    pub processes: Vec<Process>,
    /// Policy to run.
    pub policy: Policy,
    /// Time advancement model.
    #[serde(default)]
    pub stepping: Stepping,
}

impl SimulationRequest {
    /// Creates a request with event-driven stepping.
    pub fn new(processes: Vec<Process>, policy: Policy) -> Self {
        Self {
            processes,
            policy,
            stepping: Stepping::default(),
        }
    }

    /// Sets the stepping mode.
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }
}

/// Single-CPU scheduling simulator.
///
/// # Example
///
/// ```
/// use u_cpusched::models::{Policy, Process};
/// use u_cpusched::scheduler::{CpuScheduler, SimulationMetrics};
///
/// let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
/// let result = CpuScheduler::new(Policy::Fcfs).simulate(&processes).unwrap();
/// assert_eq!(result.outcome("P2").unwrap().waiting_time, 4);
///
/// let metrics = SimulationMetrics::calculate(&result).unwrap();
/// assert!((metrics.throughput - 0.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuScheduler {
    policy: Policy,
    stepping: Stepping,
}

impl CpuScheduler {
    /// Creates a scheduler for `policy` with event-driven stepping.
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            stepping: Stepping::default(),
        }
    }

    /// Sets the stepping mode used by the preemptive policies.
    pub fn with_stepping(mut self, stepping: Stepping) -> Self {
        self.stepping = stepping;
        self
    }

    pub fn policy(&self) -> Policy {
        self.policy
    }

    pub fn stepping(&self) -> Stepping {
        self.stepping
    }

    /// Simulates the policy over `processes`.
    ///
    /// # Errors
    /// - [`ScheduleError::InvalidParameter`] for a zero round-robin quantum.
    /// - [`ScheduleError::NoProcesses`] for an empty list.
    /// - [`ScheduleError::InvalidInput`] if validation fails.
    pub fn simulate(&self, processes: &[Process]) -> Result<SimulationResult, ScheduleError> {
        self.policy.validate()?;
        if processes.is_empty() {
            return Err(ScheduleError::NoProcesses);
        }
        validate_processes(processes).map_err(ScheduleError::InvalidInput)?;

        info!(
            policy = %self.policy,
            stepping = ?self.stepping,
            processes = processes.len(),
            "simulation started"
        );

        let (outcomes, timeline) = match self.policy {
            Policy::Fcfs => fcfs::run(processes),
            Policy::Sjf => nonpreemptive::run(processes, rules::ShortestBurst),
            Policy::Srtf => preemptive::run(processes, rules::ShortestRemaining, self.stepping),
            Policy::RoundRobin { quantum } => round_robin::run(processes, quantum),
            Policy::Priority { preemptive: false } => {
                nonpreemptive::run(processes, rules::HighestPriority)
            }
            Policy::Priority { preemptive: true } => {
                preemptive::run(processes, rules::HighestPriority, self.stepping)
            }
        };

        info!(
            policy = %self.policy,
            makespan = timeline.makespan(),
            entries = timeline.len(),
            "simulation finished"
        );

        Ok(SimulationResult::new(self.policy, outcomes, timeline))
    }

    /// Simulates from a request.
    pub fn simulate_request(request: &SimulationRequest) -> Result<SimulationResult, ScheduleError> {
        Self::new(request.policy)
            .with_stepping(request.stepping)
            .simulate(&request.processes)
    }
}

/// Simulates `policy` over `processes` with the default stepping.
pub fn simulate(processes: &[Process], policy: Policy) -> Result<SimulationResult, ScheduleError> {
    CpuScheduler::new(policy).simulate(processes)
}

/// One row of a policy comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PolicyComparison {
    pub policy: Policy,
    pub result: SimulationResult,
    pub metrics: SimulationMetrics,
}

/// Runs every policy over the same process list, in the given order.
///
/// Fails on the first policy that cannot run.
pub fn compare_policies(
    processes: &[Process],
    policies: &[Policy],
    stepping: Stepping,
) -> Result<Vec<PolicyComparison>, ScheduleError> {
    policies
        .iter()
        .map(|&policy| {
            let result = CpuScheduler::new(policy)
                .with_stepping(stepping)
                .simulate(processes)?;
            let metrics = SimulationMetrics::calculate(&result)?;
            Ok(PolicyComparison {
                policy,
                result,
                metrics,
            })
        })
        .collect()
}
