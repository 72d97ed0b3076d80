//! Rule-driven non-preemptive dispatching (SJF, non-preemptive priority).
//!
//! # Algorithm
//!
//! 1. Admit every process that has arrived by the current time.
//! 2. If the ready queue is empty, idle until the next arrival.
//! 3. Otherwise dispatch the process with the lowest rule key and run it to
//!    completion, regardless of what arrives meanwhile.
//!
//! # Complexity
//! O(n log n) with the heap-backed ready queue.

use super::state::RunState;
use crate::dispatching::{ReadyQueue, SelectionRule};
use crate::models::{Process, ProcessOutcome, Timeline};

pub(crate) fn run<R: SelectionRule>(
    processes: &[Process],
    rule: R,
) -> (Vec<ProcessOutcome>, Timeline) {
    let mut state = RunState::new(processes);
    let mut ready = ReadyQueue::new(rule);

    loop {
        for job in state.take_arrivals() {
            ready.push(job, state.candidate(job));
        }

        let Some(job) = ready.pop() else {
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
        state.execute(job, state.remaining(job));
        state.record_busy(job, started);
        state.complete(job);
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;
    use crate::models::Span;

    #[test]
    fn test_sjf_no_preemption() {
        let processes = vec![
            Process::new("P1", 0, 8),
            Process::new("P2", 1, 4),
            Process::new("P3", 2, 2),
        ];
        let (outcomes, timeline) = run(&processes, rules::ShortestBurst);

        assert_eq!(timeline.spans_for("P1"), vec![Span::new(0, 8)]);
        assert_eq!(timeline.spans_for("P3"), vec![Span::new(8, 10)]);
        assert_eq!(timeline.spans_for("P2"), vec![Span::new(10, 14)]);

        let p2 = outcomes.iter().find(|o| o.id == "P2").unwrap();
        assert_eq!(p2.waiting_time, 9);
        let p3 = outcomes.iter().find(|o| o.id == "P3").unwrap();
        assert_eq!(p3.waiting_time, 6);
    }

    #[test]
    fn test_sjf_ties_by_arrival() {
        let processes = vec![
            Process::new("P1", 0, 3),
            Process::new("P2", 1, 2),
            Process::new("P3", 1, 2),
        ];
        let (_, timeline) = run(&processes, rules::ShortestBurst);
        let order: Vec<_> = timeline.iter().filter_map(|e| e.process_id()).collect();
        assert_eq!(order, vec!["P1", "P2", "P3"]);
    }

    #[test]
    fn test_sjf_idle_until_next_arrival() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P2", 5, 1)];
        let (_, timeline) = run(&processes, rules::ShortestBurst);
        assert_eq!(timeline.len(), 3);
        assert!(timeline.entries()[1].is_idle());
        assert_eq!(timeline.entries()[1].span(), Span::new(1, 5));
    }

    #[test]
    fn test_priority_nonpreemptive() {
        let processes = vec![
            Process::new("P1", 0, 4).with_priority(3),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 2).with_priority(2),
        ];
        let (outcomes, timeline) = run(&processes, rules::HighestPriority);

        assert_eq!(timeline.spans_for("P1"), vec![Span::new(0, 4)]);
        assert_eq!(timeline.spans_for("P2"), vec![Span::new(4, 7)]);
        assert_eq!(timeline.spans_for("P3"), vec![Span::new(7, 9)]);
        assert_eq!(outcomes[0].waiting_time, 0);
        assert_eq!(outcomes[1].response_time, 3);
    }

    #[test]
    fn test_priority_ties_by_arrival() {
        let processes = vec![
            Process::new("P1", 0, 2),
            Process::new("P2", 1, 1),
            Process::new("P3", 1, 1),
        ];
        let (_, timeline) = run(&processes, rules::HighestPriority);
        let order: Vec<_> = timeline.iter().filter_map(|e| e.process_id()).collect();
        assert_eq!(order, vec!["P1", "P2", "P3"]);
    }
}
