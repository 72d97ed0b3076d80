//! Gantt timeline model.
//!
//! A timeline is the ordered sequence of CPU spans produced by a simulation
//! run. Each span is attributed either to one process or to CPU idleness.
//!
//! # Invariants
//! - Entries are ordered and contiguous: `entry[i].end == entry[i + 1].start`.
//! - Every span is non-empty (`end > start`).
//! - No two idle entries are adjacent; idle time is merged as it is appended.

use serde::{Deserialize, Serialize};

use super::Ticks;

/// Half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: Ticks,
    pub end: Ticks,
}

impl Span {
    /// Creates a span.
    pub fn new(start: Ticks, end: Ticks) -> Self {
        Self { start, end }
    }

    /// Length of the span in ticks.
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end.saturating_sub(self.start)
    }
}

/// A single Gantt chart entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GanttEntry {
    /// The CPU executed `process_id` for the whole span.
    Busy { process_id: String, span: Span },
    /// No process was ready.
    Idle { span: Span },
}

impl GanttEntry {
    /// The time span covered by this entry.
    pub fn span(&self) -> Span {
        match self {
            Self::Busy { span, .. } | Self::Idle { span } => *span,
        }
    }

    /// Process executed during this entry, `None` for idle spans.
    pub fn process_id(&self) -> Option<&str> {
        match self {
            Self::Busy { process_id, .. } => Some(process_id),
            Self::Idle { .. } => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle { .. })
    }

    #[inline]
    pub fn duration(&self) -> Ticks {
        self.span().duration()
    }
}

/// Ordered Gantt sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    entries: Vec<GanttEntry>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an execution span for a process.
    ///
    /// Empty spans are dropped.
    pub fn push_busy(&mut self, process_id: impl Into<String>, start: Ticks, end: Ticks) {
        if end <= start {
            return;
        }
        self.entries.push(GanttEntry::Busy {
            process_id: process_id.into(),
            span: Span::new(start, end),
        });
    }

    /// Appends an idle span, extending the previous entry if it is an idle
    /// span ending at `start`.
    pub fn push_idle(&mut self, start: Ticks, end: Ticks) {
        if end <= start {
            return;
        }
        if let Some(GanttEntry::Idle { span }) = self.entries.last_mut() {
            if span.end == start {
                span.end = end;
                return;
            }
        }
        self.entries.push(GanttEntry::Idle {
            span: Span::new(start, end),
        });
    }

    /// All entries in time order.
    pub fn entries(&self) -> &[GanttEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GanttEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last entry, 0 for an empty timeline.
    pub fn makespan(&self) -> Ticks {
        self.entries.last().map(|e| e.span().end).unwrap_or(0)
    }

    /// Total ticks spent executing processes.
    pub fn busy_time(&self) -> Ticks {
        self.entries
            .iter()
            .filter(|e| !e.is_idle())
            .map(GanttEntry::duration)
            .sum()
    }

    /// Total ticks the CPU spent idle.
    pub fn idle_time(&self) -> Ticks {
        self.entries
            .iter()
            .filter(|e| e.is_idle())
            .map(GanttEntry::duration)
            .sum()
    }

    /// Busy spans of a single process, in time order.
    pub fn spans_for(&self, process_id: &str) -> Vec<Span> {
        self.entries
            .iter()
            .filter(|e| e.process_id() == Some(process_id))
            .map(GanttEntry::span)
            .collect()
    }

    /// Number of busy entries (dispatches).
    pub fn dispatch_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_idle()).count()
    }

    /// Whether entries start at t=0 and each begins where the previous ends.
    pub fn is_contiguous(&self) -> bool {
        let mut cursor = 0;
        for entry in &self.entries {
            let span = entry.span();
            if span.start != cursor || span.end <= span.start {
                return false;
            }
            cursor = span.end;
        }
        true
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a GanttEntry;
    type IntoIter = std::slice::Iter<'a, GanttEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
