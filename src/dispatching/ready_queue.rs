//! Heap-backed ready queue.
//!
//! Orders entries by `(rule key, admission sequence)`. Every push, including
//! the return of a preempted process, takes a fresh sequence number, so among
//! equal keys the longest-waiting admission wins.
//!
//! # Complexity
//! O(log n) push and pop.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::{Candidate, RuleKey, SelectionRule};

/// Position of a process in the engine's job table.
pub type JobIndex = usize;

/// Priority queue of ready processes under a [`SelectionRule`].
#[derive(Debug, Clone)]
pub struct ReadyQueue<R> {
    rule: R,
    heap: BinaryHeap<Reverse<(RuleKey, u64, JobIndex)>>,
    next_sequence: u64,
}

impl<R: SelectionRule> ReadyQueue<R> {
    /// Creates an empty queue ordered by `rule`.
    pub fn new(rule: R) -> Self {
        Self {
            rule,
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// The ordering rule.
    pub fn rule(&self) -> &R {
        &self.rule
    }

    /// Scores a candidate with this queue's rule.
    pub fn key_for(&self, candidate: &Candidate<'_>) -> RuleKey {
        self.rule.key(candidate)
    }

    /// Admits a job at the tail of its key class.
    pub fn push(&mut self, job: JobIndex, candidate: Candidate<'_>) {
        let key = self.rule.key(&candidate);
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse((key, sequence, job)));
    }

    /// Removes and returns the job to dispatch next.
    pub fn pop(&mut self) -> Option<JobIndex> {
        self.heap.pop().map(|Reverse((_, _, job))| job)
    }

    /// Key of the job that [`pop`](Self::pop) would return.
    pub fn peek_key(&self) -> Option<RuleKey> {
        self.heap.peek().map(|Reverse((key, _, _))| *key)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
