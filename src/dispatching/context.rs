//! Dispatch context for rule evaluation.

/// Runtime state passed to dispatching rules.
///
/// Carries the simulation clock and the pid of the most recent dispatch
/// (read from the execution trace). Rules stay pure; everything they can
/// observe arrives through this struct.
#[derive(Debug, Clone, Copy, Default)]
pub struct DispatchContext {
    /// Current simulation tick.
    pub now: u64,
    /// Pid of the most recently dispatched process, if any.
    pub last_dispatched: Option<u32>,
}

impl DispatchContext {
    /// Creates a context at the given tick.
    pub fn at_time(now: u64) -> Self {
        Self {
            now,
            last_dispatched: None,
        }
    }

    /// Sets the last-dispatched pid.
    pub fn with_last_dispatched(mut self, pid: u32) -> Self {
        self.last_dispatched = Some(pid);
        self
    }
}
