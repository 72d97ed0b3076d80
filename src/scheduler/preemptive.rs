//! Rule-driven preemptive dispatching (SRTF, preemptive priority).
//!
//! # Algorithm
//!
//! Each decision point runs the same cycle:
//!
//! 1. Admit every process that has arrived by the current time.
//! 2. If the best ready key is strictly lower than the running process's key,
//!    close the running span and return the process to the ready queue.
//! 3. If the CPU is free, dispatch the best ready process.
//! 4. If nothing can run, idle until the next arrival (or stop).
//! 5. Execute the running process and close its span on completion.
//!
//! [`Stepping::Stepwise`] executes one tick per cycle. [`Stepping::EventDriven`]
//! executes up to the next arrival or the completion, whichever is sooner.
//! Since rule keys never increase while a process runs and ready keys do not
//! change, no preemption can happen between arrivals, so both modes produce
//! the same timeline.
//!
//! # Complexity
//! Event-driven: O(n log n). Stepwise: O((n + B) log n) where B is total burst.

use tracing::debug;

use super::state::RunState;
use super::Stepping;
use crate::dispatching::{JobIndex, ReadyQueue, SelectionRule};
use crate::models::{Process, ProcessOutcome, Ticks, Timeline};

struct Running {
    job: JobIndex,
    since: Ticks,
}

pub(crate) fn run<R: SelectionRule>(
    processes: &[Process],
    rule: R,
    stepping: Stepping,
) -> (Vec<ProcessOutcome>, Timeline) {
    let mut state = RunState::new(processes);
    let mut ready = ReadyQueue::new(rule);
    let mut running: Option<Running> = None;

    loop {
        for job in state.take_arrivals() {
            ready.push(job, state.candidate(job));
        }

        if let Some(current) = running.take() {
            let current_key = ready.key_for(&state.candidate(current.job));
            match ready.peek_key() {
                Some(best) if best < current_key => {
                    debug!(
                        process = %state.process(current.job).id,
                        now = state.now(),
                        "preempted"
                    );
                    state.record_busy(current.job, current.since);
                    ready.push(current.job, state.candidate(current.job));
                }
                _ => running = Some(current),
            }
        }

        if running.is_none() {
            if let Some(job) = ready.pop() {
                state.dispatch(job);
                running = Some(Running {
                    job,
                    since: state.now(),
                });
            }
        }

        let Some(current) = running.as_ref() else {
            match state.upcoming_arrival() {
                Some(arrival) => {
                    state.idle_until(arrival);
                    continue;
                }
                None => break,
            }
        };

        let job = current.job;
        let remaining = state.remaining(job);
        let slice = match stepping {
            Stepping::Stepwise => 1,
            Stepping::EventDriven => match state.upcoming_arrival() {
                Some(arrival) => remaining.min(arrival - state.now()),
                None => remaining,
            },
        };
        state.execute(job, slice);

        if state.remaining(job) == 0 {
            state.record_busy(job, current.since);
            state.complete(job);
            running = None;
        }
    }

    state.finish()
}
