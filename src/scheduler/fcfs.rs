//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Sort processes by arrival time (stable).
//! 2. If the next process arrives after the clock, idle until it arrives.
//! 3. Run it for its full burst as a single timeline entry.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the pass.

use super::state::RunState;
use crate::models::{Process, ProcessOutcome, Timeline};

pub(crate) fn run(processes: &[Process]) -> (Vec<ProcessOutcome>, Timeline) {
    let mut state = RunState::new(processes);

    for job in 0..state.job_count() {
        let arrival = state.process(job).arrival_time;
        if arrival > state.now() {
            state.idle_until(arrival);
        }

        state.dispatch(job);
        let started = state.now();
        state.execute(job, state.remaining(job));
        state.record_busy(job, started);
        state.complete(job);
    }

    state.finish()
}
