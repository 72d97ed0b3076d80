//! Run-time state shared by all policy engines.
//!
//! Holds the job table (processes in arrival order with their remaining
//! work), the simulation clock, the arrival cursor and the timeline under
//! construction.

use std::ops::Range;

use tracing::{debug, trace};

use crate::dispatching::{Candidate, JobIndex};
use crate::models::{Process, ProcessOutcome, Ticks, Timeline};

#[derive(Debug)]
struct Job<'a> {
    process: &'a Process,
    remaining: Ticks,
    start: Option<Ticks>,
    outcome: Option<ProcessOutcome>,
}

#[derive(Debug)]
pub(crate) struct RunState<'a> {
    jobs: Vec<Job<'a>>,
    next_arrival: usize,
    now: Ticks,
    timeline: Timeline,
}

impl<'a> RunState<'a> {
    /// Builds the job table sorted by arrival (stable w.r.t. input order).
    pub fn new(processes: &'a [Process]) -> Self {
        let mut jobs: Vec<Job<'a>> = processes
            .iter()
            .map(|process| Job {
                process,
                remaining: process.burst_time,
                start: None,
                outcome: None,
            })
            .collect();
        jobs.sort_by_key(|job| job.process.arrival_time);

        Self {
            jobs,
            next_arrival: 0,
            now: 0,
            timeline: Timeline::new(),
        }
    }

    pub fn now(&self) -> Ticks {
        self.now
    }

    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    pub fn process(&self, job: JobIndex) -> &'a Process {
        self.jobs[job].process
    }

    pub fn remaining(&self, job: JobIndex) -> Ticks {
        self.jobs[job].remaining
    }

    pub fn candidate(&self, job: JobIndex) -> Candidate<'a> {
        let job = &self.jobs[job];
        Candidate::with_remaining(job.process, job.remaining)
    }

    /// Jobs that have arrived by `now` and were not yet admitted.
    ///
    /// Each job is returned exactly once across calls.
    pub fn take_arrivals(&mut self) -> Range<JobIndex> {
        let first = self.next_arrival;
        while self.next_arrival < self.jobs.len()
            && self.jobs[self.next_arrival].process.arrival_time <= self.now
        {
            trace!(
                process = %self.jobs[self.next_arrival].process.id,
                now = self.now,
                "admitted"
            );
            self.next_arrival += 1;
        }
        first..self.next_arrival
    }

    /// Arrival time of the next job not yet admitted.
    pub fn upcoming_arrival(&self) -> Option<Ticks> {
        self.jobs
            .get(self.next_arrival)
            .map(|job| job.process.arrival_time)
    }

    /// Leaves the CPU idle until `until`.
    pub fn idle_until(&mut self, until: Ticks) {
        debug!(from = self.now, until, "cpu idle");
        self.timeline.push_idle(self.now, until);
        self.now = self.now.max(until);
    }

    /// Puts a job on the CPU, recording its first dispatch.
    pub fn dispatch(&mut self, job: JobIndex) {
        let now = self.now;
        let job = &mut self.jobs[job];
        if job.start.is_none() {
            job.start = Some(now);
        }
        debug!(process = %job.process.id, now, remaining = job.remaining, "dispatch");
    }

    /// Advances the clock by `ticks` of execution for `job`.
    pub fn execute(&mut self, job: JobIndex, ticks: Ticks) {
        let job = &mut self.jobs[job];
        debug_assert!(ticks <= job.remaining, "executing past completion");
        job.remaining -= ticks;
        self.now += ticks;
    }

    /// Closes the busy span `[since, now)` for `job`.
    pub fn record_busy(&mut self, job: JobIndex, since: Ticks) {
        self.timeline
            .push_busy(self.jobs[job].process.id.as_str(), since, self.now);
    }

    /// Marks `job` finished at the current time.
    pub fn complete(&mut self, job: JobIndex) {
        let now = self.now;
        let job = &mut self.jobs[job];
        debug_assert_eq!(job.remaining, 0, "completing unfinished job");
        let start = job.start.unwrap_or(now);
        debug!(process = %job.process.id, now, "complete");
        job.outcome = Some(ProcessOutcome::completed(job.process, start, now));
    }

    /// Consumes the state, returning outcomes in arrival order and the timeline.
    pub fn finish(self) -> (Vec<ProcessOutcome>, Timeline) {
        debug_assert!(
            self.jobs.iter().all(|job| job.outcome.is_some()),
            "run ended with unfinished jobs"
        );
        let outcomes = self.jobs.into_iter().filter_map(|job| job.outcome).collect();
        (outcomes, self.timeline)
    }
}
