//! CPU scheduling domain models.
//!
//! Provides the data types consumed and produced by a simulation run.
//!
//! | Type | Role |
//! |------|------|
//! | `Process` | Immutable input record (arrival, burst, priority) |
//! | `ProcessOutcome` | Derived per-process timings after a run |
//! | `Timeline` / `GanttEntry` | CPU spans, busy or idle |
//! | `Policy` | Selected scheduling policy and its parameters |
//! | `SimulationResult` | Outcomes + timeline of one run |

mod policy;
mod process;
mod simulation;
mod timeline;

pub use policy::{Policy, PolicyKind};
pub use process::{Process, ProcessOutcome, Ticks, DEFAULT_PRIORITY};
pub use simulation::SimulationResult;
pub use timeline::{GanttEntry, Span, Timeline};
