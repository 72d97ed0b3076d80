//! Built-in selection rules.
//!
//! | Rule | Key | Used by |
//! |------|-----|---------|
//! | `ArrivalOrder` | arrival time | FCFS |
//! | `ShortestBurst` | total burst | SJF |
//! | `ShortestRemaining` | remaining work | SRTF |
//! | `HighestPriority` | priority value | Priority (both variants) |
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.

use super::{Candidate, RuleKey, SelectionRule};
use crate::models::Ticks;

fn ticks_key(ticks: Ticks) -> RuleKey {
    RuleKey::try_from(ticks).unwrap_or(RuleKey::MAX)
}

/// First-come, first-served.
///
/// Earlier arrivals first; equal arrivals keep admission order.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrivalOrder;

impl SelectionRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn key(&self, candidate: &Candidate<'_>) -> RuleKey {
        ticks_key(candidate.process.arrival_time)
    }
}

/// Shortest job first.
///
/// Scores by total burst time, independent of work already done.
///
/// # Reference
/// Smith (1956), optimal for minimizing mean flow time on a single machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, candidate: &Candidate<'_>) -> RuleKey {
        ticks_key(candidate.process.burst_time)
    }
}

/// Shortest remaining time first.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, candidate: &Candidate<'_>) -> RuleKey {
        ticks_key(candidate.remaining)
    }
}

/// Lowest priority value first.
#[derive(Debug, Clone, Copy, Default)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, candidate: &Candidate<'_>) -> RuleKey {
        RuleKey::from(candidate.process.priority)
    }
}
