//! Completion records.
//!
//! A `CompletedProcess` is a snapshot taken at the moment a process
//! finishes. It is created exactly once per process and never mutated;
//! metrics are derived from these records.

use serde::{Deserialize, Serialize};

/// Immutable record of a finished process.
///
/// `waiting + burst == turnaround` by construction, and `waiting >= 0`
/// since a process cannot finish before receiving its full burst.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedProcess {
    /// Process id.
    pub pid: u32,
    /// Display name.
    pub name: String,
    /// Arrival tick.
    pub arrival: u64,
    /// Total CPU ticks consumed.
    pub burst: u64,
    /// Tick at which the process finished.
    pub finished_at: u64,
    /// Ticks from arrival to completion.
    pub turnaround: u64,
    /// Ticks spent waiting (turnaround minus burst).
    pub waiting: u64,
}

impl CompletedProcess {
    /// Creates a completion record, deriving turnaround and waiting time.
    pub fn new(pid: u32, name: impl Into<String>, arrival: u64, burst: u64, finished_at: u64) -> Self {
        let turnaround = finished_at - arrival;
        Self {
            pid,
            name: name.into(),
            arrival,
            burst,
            finished_at,
            turnaround,
            waiting: turnaround - burst,
        }
    }
}
