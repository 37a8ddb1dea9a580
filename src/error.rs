//! Engine error types.

use thiserror::Error;

/// Errors reported at the engine boundary.
///
/// The engine core assumes validated input; these errors cover the
/// defensive checks on the mutation surface (`add_process`, quantum
/// configuration, snapshot restore).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A process with the same pid is already in the table.
    #[error("duplicate process id: {0}")]
    DuplicateProcessId(u32),

    /// Round-Robin requires a time quantum of at least 1.
    #[error("time quantum must be at least 1")]
    InvalidQuantum,

    /// Unrecognized discipline name.
    #[error("unknown discipline '{0}' (expected: fcfs, sjf, priority, round_robin)")]
    UnknownDiscipline(String),
}
