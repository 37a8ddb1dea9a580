//! Process model.
//!
//! A process is a unit of CPU work with an arrival time, a total burst
//! requirement, and a scheduling priority. The engine mutates its runtime
//! state (`remaining`, `started_at`, `finished_at`) one dispatch at a time.

use serde::{Deserialize, Serialize};

/// A simulated process.
///
/// # Time Representation
/// All times are in abstract simulation ticks relative to t=0.
/// The consumer defines what one tick means (seconds, milliseconds, ...).
///
/// # Invariants
/// `remaining <= burst` at all times; `started_at <= finished_at` once both
/// are set. A process with `arrival` in the future is never dispatched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier.
    pub pid: u32,
    /// Display label (e.g., "P1").
    pub name: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: u64,
    /// Total CPU ticks required. Immutable once created.
    pub burst: u64,
    /// Scheduling priority (lower value = more urgent).
    pub priority: i32,
    /// CPU ticks still owed. Starts at `burst`; 0 means complete.
    pub remaining: u64,
    /// Tick of the first dispatch, if any.
    pub started_at: Option<u64>,
    /// Tick at which `remaining` reached 0, if it has.
    pub finished_at: Option<u64>,
}

impl Process {
    /// Creates a new process with the given pid, name, and burst.
    ///
    /// Arrival defaults to 0 and priority to 0. A `burst` of 0 yields a
    /// process that is complete from the start and never eligible.
    pub fn new(pid: u32, name: impl Into<String>, burst: u64) -> Self {
        Self {
            pid,
            name: name.into(),
            arrival: 0,
            burst,
            priority: 0,
            remaining: burst,
            started_at: None,
            finished_at: None,
        }
    }

    /// Sets the arrival tick.
    pub fn with_arrival(mut self, arrival: u64) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    /// Whether the process has received all of its burst.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Whether the process can be dispatched at `now`.
    #[inline]
    pub fn is_eligible_at(&self, now: u64) -> bool {
        self.arrival <= now && self.remaining > 0
    }

    /// Restores the initial runtime state.
    pub fn reset(&mut self) {
        self.remaining = self.burst;
        self.started_at = None;
        self.finished_at = None;
    }
}
