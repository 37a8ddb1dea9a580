//! Process table.

use serde::{Deserialize, Serialize};

use crate::models::Process;
use crate::SimError;

/// The authoritative list of processes in a simulation.
///
/// Holds processes in insertion order; that order is the tie-breaker for
/// every discipline, so it is never reshuffled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a process.
    ///
    /// Pids must be unique; a duplicate would corrupt Round-Robin's
    /// last-dispatched lookup, so it is rejected here.
    pub fn add(&mut self, process: Process) -> Result<(), SimError> {
        if self.processes.iter().any(|p| p.pid == process.pid) {
            return Err(SimError::DuplicateProcessId(process.pid));
        }
        self.processes.push(process);
        Ok(())
    }

    /// Indices of processes dispatchable at `now`, in table order.
    ///
    /// Pure query: arrived (`arrival <= now`) and not yet complete.
    pub fn eligible_at(&self, now: u64) -> Vec<usize> {
        self.processes
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_eligible_at(now))
            .map(|(i, _)| i)
            .collect()
    }

    /// Whether every process has finished. An empty table counts as
    /// complete (a 0-process run terminates trivially).
    pub fn all_complete(&self) -> bool {
        self.processes.iter().all(|p| p.is_complete())
    }

    /// Restores every process to its initial runtime state.
    pub fn reset(&mut self) {
        for p in &mut self.processes {
            p.reset();
        }
    }

    /// All processes in insertion order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub(crate) fn processes_mut(&mut self) -> &mut [Process] {
        &mut self.processes
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table holds no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
