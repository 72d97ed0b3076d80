//! Input validation for process sets.
//!
//! Checks structural integrity of the process list before it reaches the
//! engine. Detects:
//! - Empty IDs
//! - Duplicate IDs
//! - Zero burst times
//! - Time horizons that would overflow [`Ticks`]
//!
//! The engine assumes validated input; [`CpuScheduler`](crate::scheduler::CpuScheduler)
//! runs these checks before every simulation.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Ticks};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// A process has an empty (or whitespace-only) ID.
    EmptyId,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process requires no CPU time.
    ZeroBurst,
    /// Latest arrival plus total burst does not fit in `Ticks`.
    HorizonOverflow,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process list.
///
/// Checks:
/// 1. Every process has a non-empty ID
/// 2. No duplicate IDs
/// 3. Every burst time is positive
/// 4. The simulation horizon fits in `Ticks`
///
/// An empty list is valid here; the scheduler rejects it separately.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for (index, process) in processes.iter().enumerate() {
        if process.id.trim().is_empty() {
            errors.push(ValidationError::new(
                ValidationErrorKind::EmptyId,
                format!("Process at position {index} has an empty ID"),
            ));
        } else if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.burst_time == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a zero burst time", process.id),
            ));
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::HorizonOverflow,
            "Latest arrival plus total burst time overflows the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on the finish time of any schedule over `processes`.
fn horizon(processes: &[Process]) -> Option<Ticks> {
    let latest_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .try_fold(latest_arrival, |acc, p| acc.checked_add(p.burst_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3).with_priority(2),
            Process::new("P3", 4, 1),
        ]
    }

    #[test]
    fn test_valid_input() {
        assert!(validate_processes(&sample_processes()).is_ok());
    }

    #[test]
    fn test_empty_list_is_structurally_valid() {
        assert!(validate_processes(&[]).is_ok());
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 1), Process::new("P1", 2, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateId);
        assert!(errors[0].message.contains("P1"));
    }

    #[test]
    fn test_empty_id() {
        let processes = vec![Process::new("  ", 0, 1)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::EmptyId));
    }

    #[test]
    fn test_zero_burst() {
        let processes = vec![Process::new("P1", 0, 0)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::ZeroBurst));
    }

    #[test]
    fn test_horizon_overflow() {
        let processes = vec![
            Process::new("P1", Ticks::MAX - 1, 1),
            Process::new("P2", 0, 5),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::HorizonOverflow));
    }

    #[test]
    fn test_multiple_errors() {
        let processes = vec![
            Process::new("", 0, 1),
            Process::new("P1", 0, 0),
            Process::new("P1", 1, 2),
        ];
        let errors = validate_processes(&processes).unwrap_err();
        assert_eq!(errors.len(), 3);
    }
}
