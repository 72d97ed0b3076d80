//! Simulation performance metrics.
//!
//! Computes standard CPU scheduling indicators from a completed run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Turnaround | Mean of finish - arrival |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Response | Mean of first dispatch - arrival |
//! | Throughput | Processes / latest finish time |
//! | CPU Utilization | Busy time / makespan |
//! | Dispatches | Number of busy timeline entries |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ScheduleError;
use crate::models::{ProcessOutcome, SimulationResult, Ticks};

/// Aggregate performance of one simulation run.
///
/// Time averages are in ticks; throughput is processes per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationMetrics {
    /// Number of completed processes.
    pub process_count: usize,
    pub avg_turnaround: f64,
    pub avg_waiting: f64,
    pub avg_response: f64,
    /// `process_count / max(finish_time)`.
    pub throughput: f64,
    /// End of the timeline.
    pub makespan: Ticks,
    pub busy_time: Ticks,
    pub idle_time: Ticks,
    /// Fraction of the makespan spent executing (0.0..1.0).
    pub cpu_utilization: f64,
    /// Dispatches, counting re-dispatches after preemption or slice expiry.
    pub dispatch_count: usize,
}

impl SimulationMetrics {
    /// Computes metrics from a completed run.
    ///
    /// The throughput denominator is the latest finish time over all
    /// processes, which differs from the last process in arrival order
    /// whenever completion order differs from arrival order.
    ///
    /// # Errors
    /// [`ScheduleError::NoProcesses`] if the result has no processes.
    pub fn calculate(result: &SimulationResult) -> Result<Self, ScheduleError> {
        let processes = &result.processes;
        if processes.is_empty() {
            return Err(ScheduleError::NoProcesses);
        }

        let count = processes.len() as f64;
        let mean = |f: fn(&ProcessOutcome) -> Ticks| {
            processes.iter().map(|p| f(p) as f64).sum::<f64>() / count
        };

        let last_finish = result.last_finish_time().unwrap_or(0);
        let throughput = if last_finish == 0 {
            0.0
        } else {
            count / last_finish as f64
        };

        let timeline = &result.timeline;
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();
        let cpu_utilization = if makespan == 0 {
            0.0
        } else {
            busy_time as f64 / makespan as f64
        };

        Ok(Self {
            process_count: processes.len(),
            avg_turnaround: mean(|p| p.turnaround_time),
            avg_waiting: mean(|p| p.waiting_time),
            avg_response: mean(|p| p.response_time),
            throughput,
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            dispatch_count: timeline.dispatch_count(),
        })
    }
}

impl fmt::Display for SimulationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Average Turnaround Time: {:.2}", self.avg_turnaround)?;
        writeln!(f, "Average Waiting Time:    {:.2}", self.avg_waiting)?;
        writeln!(f, "Average Response Time:   {:.2}", self.avg_response)?;
        writeln!(
            f,
            "Throughput:              {:.4} processes/unit time",
            self.throughput
        )?;
        write!(
            f,
            "CPU Utilization:         {:.2}% ({} busy, {} idle, {} dispatches)",
            self.cpu_utilization * 100.0,
            self.busy_time,
            self.idle_time,
            self.dispatch_count
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Policy, Process, Timeline};

    fn fcfs_result() -> SimulationResult {
        let p1 = Process::new("P1", 0, 5);
        let p2 = Process::new("P2", 1, 3);
        let mut timeline = Timeline::new();
        timeline.push_busy("P1", 0, 5);
        timeline.push_busy("P2", 5, 8);
        SimulationResult::new(
            Policy::Fcfs,
            vec![
                ProcessOutcome::completed(&p1, 0, 5),
                ProcessOutcome::completed(&p2, 5, 8),
            ],
            timeline,
        )
    }

    #[test]
    fn test_metrics_basic() {
        let m = SimulationMetrics::calculate(&fcfs_result()).unwrap();
        assert_eq!(m.process_count, 2);
        assert!((m.avg_turnaround - 6.0).abs() < 1e-10); // (5 + 7) / 2
        assert!((m.avg_waiting - 2.0).abs() < 1e-10); // (0 + 4) / 2
        assert!((m.avg_response - 2.0).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
        assert_eq!(m.makespan, 8);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert_eq!(m.dispatch_count, 2);
    }

    #[test]
    fn test_metrics_empty_fails() {
        let empty = SimulationResult::new(Policy::Fcfs, Vec::new(), Timeline::new());
        assert_eq!(
            SimulationMetrics::calculate(&empty),
            Err(ScheduleError::NoProcesses)
        );
    }

    #[test]
    fn test_throughput_uses_latest_finish() {
        // SJF order: P1 [0,8), P3 [8,10), P2 [10,14); last in arrival order is P3
        let p1 = Process::new("P1", 0, 8);
        let p2 = Process::new("P2", 1, 4);
        let p3 = Process::new("P3", 2, 2);
        let mut timeline = Timeline::new();
        timeline.push_busy("P1", 0, 8);
        timeline.push_busy("P3", 8, 10);
        timeline.push_busy("P2", 10, 14);
        let result = SimulationResult::new(
            Policy::Sjf,
            vec![
                ProcessOutcome::completed(&p1, 0, 8),
                ProcessOutcome::completed(&p2, 10, 14),
                ProcessOutcome::completed(&p3, 8, 10),
            ],
            timeline,
        );

        let m = SimulationMetrics::calculate(&result).unwrap();
        assert!((m.throughput - 3.0 / 14.0).abs() < 1e-10);
        assert!((m.throughput - 3.0 / 10.0).abs() > 1e-3);
    }

    #[test]
    fn test_utilization_with_idle() {
        let p = Process::new("P1", 2, 2);
        let mut timeline = Timeline::new();
        timeline.push_idle(0, 2);
        timeline.push_busy("P1", 2, 4);
        let result = SimulationResult::new(
            Policy::Fcfs,
            vec![ProcessOutcome::completed(&p, 2, 4)],
            timeline,
        );

        let m = SimulationMetrics::calculate(&result).unwrap();
        assert_eq!(m.idle_time, 2);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((m.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_display_precision() {
        let m = SimulationMetrics::calculate(&fcfs_result()).unwrap();
        let text = m.to_string();
        assert!(text.contains("Average Turnaround Time: 6.00"));
        assert!(text.contains("Average Waiting Time:    2.00"));
        assert!(text.contains("0.2500 processes/unit time"));
        assert!(text.contains("100.00%"));
    }
}
