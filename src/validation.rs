//! Input validation for simulation setups.
//!
//! Boundary-layer checks on user-supplied process definitions, run before
//! the engine touches them. Detects:
//! - Duplicate pids
//! - Zero burst times (the engine tolerates them as pre-completed, but
//!   user input with a zero burst is almost always a form mistake)
//! - A zero quantum on a Round-Robin setup

use std::collections::HashSet;

use crate::dispatching::Discipline;
use crate::models::Process;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two processes share the same pid.
    DuplicatePid,
    /// A process requires zero CPU ticks.
    ZeroBurst,
    /// Round-Robin configured with a quantum of zero.
    ZeroQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates user-supplied process definitions.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut pids = HashSet::new();

    for p in processes {
        if !pids.insert(p.pid) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePid,
                format!("Duplicate process id: {}", p.pid),
            ));
        }
        if p.burst == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::ZeroBurst,
                format!("Process '{}' has a zero burst time", p.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a discipline/quantum configuration.
pub fn validate_config(discipline: Discipline, quantum: u64) -> ValidationResult {
    if discipline == Discipline::RoundRobin && quantum == 0 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::ZeroQuantum,
            "Round-Robin requires a time quantum of at least 1",
        )]);
    }
    Ok(())
}
