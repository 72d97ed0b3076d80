//! Synthetic workload generation.
//!
//! Produces reproducible random process sets for experiments and
//! property checks. Arrival, burst and priority are drawn uniformly from
//! inclusive ranges using a seeded [`StdRng`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::{Process, Ticks};

/// Parameters of a random workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RandomWorkload {
    /// Number of processes (`P1..Pn`).
    pub count: usize,
    /// Arrivals are drawn from `[0, max_arrival]`.
    pub max_arrival: Ticks,
    pub min_burst: Ticks,
    pub max_burst: Ticks,
    pub min_priority: i32,
    pub max_priority: i32,
    /// RNG seed; equal seeds give equal workloads.
    pub seed: u64,
}

impl Default for RandomWorkload {
    fn default() -> Self {
        Self {
            count: 10,
            max_arrival: 20,
            min_burst: 1,
            max_burst: 10,
            min_priority: 1,
            max_priority: 5,
            seed: 0,
        }
    }
}

impl RandomWorkload {
    /// Creates a workload of `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            ..Self::default()
        }
    }

    pub fn with_max_arrival(mut self, max_arrival: Ticks) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the inclusive burst range. A zero lower bound is raised to 1.
    pub fn with_burst_range(mut self, min: Ticks, max: Ticks) -> Self {
        self.min_burst = min;
        self.max_burst = max;
        self
    }

    /// Sets the inclusive priority range.
    pub fn with_priority_range(mut self, min: i32, max: i32) -> Self {
        self.min_priority = min;
        self.max_priority = max;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the process list in ID order (not sorted by arrival).
    ///
    /// Inverted ranges are swapped rather than rejected.
    pub fn generate(&self) -> Vec<Process> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let min_burst = self.min_burst.max(1);
        let max_burst = self.max_burst.max(1);
        let (burst_lo, burst_hi) = (min_burst.min(max_burst), min_burst.max(max_burst));
        let (prio_lo, prio_hi) = (
            self.min_priority.min(self.max_priority),
            self.min_priority.max(self.max_priority),
        );

        (1..=self.count)
            .map(|n| {
                Process::new(
                    format!("P{n}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(burst_lo..=burst_hi),
                )
                .with_priority(rng.random_range(prio_lo..=prio_hi))
            })
            .collect()
    }
}
