//! Snapshot of a ready process passed to selection rules.

use crate::models::{Process, Ticks};

/// A ready process together with its remaining work.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub process: &'a Process,
    /// CPU time still needed (`burst_time` before the first dispatch).
    pub remaining: Ticks,
}

impl<'a> Candidate<'a> {
    /// A candidate that has not executed yet.
    pub fn fresh(process: &'a Process) -> Self {
        Self {
            process,
            remaining: process.burst_time,
        }
    }

    /// A candidate with `remaining` ticks of work left.
    pub fn with_remaining(process: &'a Process, remaining: Ticks) -> Self {
        Self { process, remaining }
    }
}
