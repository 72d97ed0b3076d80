//! Round-Robin with a fixed time quantum.
//!
//! # Algorithm
//!
//! 1. Admit arrivals into a FIFO ready queue.
//! 2. Dispatch the head for `min(quantum, remaining)` ticks as one entry.
//! 3. Admit everything that arrived during the slice, *then* re-enqueue the
//!    dispatched process at the tail if it still has work left.
//! 4. With an empty queue, idle until the next arrival (or stop).
//!
//! The caller must ensure `quantum > 0`.

use std::collections::VecDeque;

use super::state::RunState;
use crate::dispatching::JobIndex;
use crate::models::{Process, ProcessOutcome, Ticks, Timeline};

pub(crate) fn run(processes: &[Process], quantum: Ticks) -> (Vec<ProcessOutcome>, Timeline) {
    debug_assert!(quantum > 0, "round-robin quantum must be positive");

    let mut state = RunState::new(processes);
    let mut ready: VecDeque<JobIndex> = VecDeque::new();

    loop {
        ready.extend(state.take_arrivals());

        let Some(job) = ready.pop_front() else {
            match state.upcoming_arrival() {
                Some(arrival) => {
                    state.idle_until(arrival);
                    continue;
                }
                None => break,
            }
        };

        state.dispatch(job);
        let started = state.now();
        let slice = quantum.min(state.remaining(job));
        state.execute(job, slice);
        state.record_busy(job, started);

        ready.extend(state.take_arrivals());
        if state.remaining(job) > 0 {
            ready.push_back(job);
        } else {
            state.complete(job);
        }
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Span;

    fn order(timeline: &Timeline) -> Vec<(Option<&str>, Ticks, Ticks)> {
        timeline
            .iter()
            .map(|e| (e.process_id(), e.span().start, e.span().end))
            .collect()
    }

    #[test]
    fn test_rr_arrivals_before_requeue() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P2", 1, 3)];
        let (outcomes, timeline) = run(&processes, 2);

        assert_eq!(
            order(&timeline),
            vec![
                (Some("P1"), 0, 2),
                (Some("P2"), 2, 4),
                (Some("P1"), 4, 6),
                (Some("P2"), 6, 7),
                (Some("P1"), 7, 8),
            ]
        );
        assert_eq!(outcomes[0].finish_time, 8);
        assert_eq!(outcomes[1].finish_time, 7);
        assert_eq!(outcomes[1].response_time, 1);
    }

    #[test]
    fn test_rr_arrival_at_slice_end_goes_first() {
        // P2 arrives exactly as P1's slice ends
        let processes = vec![Process::new("P1", 0, 4), Process::new("P2", 2, 2)];
        let (_, timeline) = run(&processes, 2);
        assert_eq!(timeline.spans_for("P2"), vec![Span::new(2, 4)]);
        assert_eq!(timeline.spans_for("P1"), vec![Span::new(0, 2), Span::new(4, 6)]);
    }

    #[test]
    fn test_rr_single_process_keeps_slices() {
        let processes = vec![Process::new("P1", 0, 5)];
        let (_, timeline) = run(&processes, 2);
        assert_eq!(
            timeline.spans_for("P1"),
            vec![Span::new(0, 2), Span::new(2, 4), Span::new(4, 5)]
        );
    }

    #[test]
    fn test_rr_large_quantum_is_fcfs() {
        let processes = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 1, 2),
            Process::new("P3", 8, 1),
        ];
        let (_, rr) = run(&processes, 100);
        let (_, fcfs) = crate::scheduler::fcfs::run(&processes);
        assert_eq!(rr, fcfs);
    }

    #[test]
    fn test_rr_idle_between_arrivals() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P2", 4, 3)];
        let (_, timeline) = run(&processes, 2);
        assert_eq!(
            order(&timeline),
            vec![
                (Some("P1"), 0, 1),
                (None, 1, 4),
                (Some("P2"), 4, 6),
                (Some("P2"), 6, 7),
            ]
        );
    }
}
