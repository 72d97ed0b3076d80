//! Selection rules and ready queues for CPU dispatching.
//!
//! A [`SelectionRule`] scores a ready process; the [`ReadyQueue`] always
//! yields the lowest-scoring process, breaking ties by admission order.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{rules, Candidate, ReadyQueue};
//! use u_cpusched::models::Process;
//!
//! let long = Process::new("long", 0, 9);
//! let short = Process::new("short", 0, 2);
//!
//! let mut queue = ReadyQueue::new(rules::ShortestBurst);
//! queue.push(0, Candidate::fresh(&long));
//! queue.push(1, Candidate::fresh(&short));
//! assert_eq!(queue.pop(), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

mod candidate;
mod ready_queue;
pub mod rules;

pub use candidate::Candidate;
pub use ready_queue::{JobIndex, ReadyQueue};

use std::fmt::Debug;

/// Score returned by a selection rule.
///
/// Lower keys = dispatched first.
pub type RuleKey = i64;

/// A rule that orders ready processes.
///
/// # Key Convention
/// **Lower key = dispatched first.** Ties are resolved by the queue in
/// admission order, never by the rule.
///
/// # Preemption
/// Rules used by preemptive policies must return keys that never increase
/// while a process executes. The event-driven engine relies on this to skip
/// straight to the next arrival.
pub trait SelectionRule: Debug {
    /// Rule name (e.g., "SJF").
    fn name(&self) -> &'static str;

    /// Scores a ready process.
    fn key(&self, candidate: &Candidate<'_>) -> RuleKey;
}

impl<R: SelectionRule + ?Sized> SelectionRule for &R {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn key(&self, candidate: &Candidate<'_>) -> RuleKey {
        (**self).key(candidate)
    }
}
