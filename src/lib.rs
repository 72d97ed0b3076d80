//! Single-CPU scheduling simulator.
//!
//! Simulates classic CPU scheduling policies over a static process set,
//! producing a Gantt timeline and per-process timings (waiting, turnaround,
//! response) plus aggregate metrics (averages, throughput, utilization).
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessOutcome`, `Timeline`,
//!   `GanttEntry`, `Policy`, `SimulationResult`
//! - **`dispatching`**: Selection rules and the heap-backed ready queue
//! - **`scheduler`**: Policy engines, `CpuScheduler`, `SimulationMetrics`
//! - **`validation`**: Input integrity checks (empty/duplicate IDs, zero bursts)
//! - **`config`**: Scenario files (TOML/JSON)
//! - **`workload`**: Seeded random process sets
//!
//! # Example
//!
//! ```
//! use u_cpusched::models::{Policy, Process};
//! use u_cpusched::scheduler::simulate;
//!
//! let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
//! let result = simulate(&processes, Policy::RoundRobin { quantum: 2 }).unwrap();
//! assert_eq!(result.timeline.makespan(), 8);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::{ConfigError, ScheduleError};
