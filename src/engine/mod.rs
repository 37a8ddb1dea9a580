//! The simulation engine.
//!
//! `SimulationEngine` owns the process table, the execution trace, the
//! completed-process records, and the clock, and advances them with a
//! single `step()` method. One step is one dispatch decision (or one idle
//! tick); steps are atomic, so stopping between steps always leaves a
//! valid, resumable simulation.
//!
//! # Dispatch cadence
//!
//! FCFS, SJF, and Priority re-select every single tick. This is
//! deliberately not textbook non-preemptive FCFS/SJF: the one-tick
//! cadence keeps the trace at a uniform granularity, and re-evaluating
//! SJF on remaining work makes it behave as SRTF. Round-Robin allocates
//! `min(quantum, remaining)` per dispatch.

mod table;

pub use table::ProcessTable;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dispatching::{self, rules, DispatchContext, DispatchRule, Discipline};
use crate::metrics::SimMetrics;
use crate::models::{CompletedProcess, ExecutionEvent, ExecutionTrace, Process};
use crate::SimError;

/// Result of one engine step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// A process ran for `ran_for` ticks.
    Dispatched { pid: u32, ran_for: u64 },
    /// No process was eligible; the clock advanced by one tick.
    Idle,
    /// Every process has finished; the clock did not move.
    Complete,
}

/// Serializable capture of a full simulation state.
///
/// Everything needed to resume a run: table, trace, completion records,
/// clock, and configuration. This is the "save experiment" payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationSnapshot {
    pub table: ProcessTable,
    pub trace: ExecutionTrace,
    pub completed: Vec<CompletedProcess>,
    pub clock: u64,
    pub discipline: Discipline,
    pub quantum: u64,
}

/// Deterministic, single-stepped scheduling simulation.
#[derive(Debug, Clone)]
pub struct SimulationEngine {
    table: ProcessTable,
    trace: ExecutionTrace,
    completed: Vec<CompletedProcess>,
    clock: u64,
    discipline: Discipline,
    quantum: u64,
}

impl SimulationEngine {
    /// Creates an engine with the given discipline and a quantum of 1.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            table: ProcessTable::new(),
            trace: ExecutionTrace::new(),
            completed: Vec::new(),
            clock: 0,
            discipline,
            quantum: 1,
        }
    }

    /// Sets the Round-Robin time quantum.
    pub fn with_quantum(mut self, quantum: u64) -> Result<Self, SimError> {
        self.set_quantum(quantum)?;
        Ok(self)
    }

    /// Adds a process to the table.
    pub fn add_process(&mut self, process: Process) -> Result<(), SimError> {
        self.table.add(process)
    }

    /// Switches the discipline. Takes effect on the next step.
    pub fn set_discipline(&mut self, discipline: Discipline) {
        self.discipline = discipline;
    }

    /// Sets the time quantum. Must be at least 1.
    pub fn set_quantum(&mut self, quantum: u64) -> Result<(), SimError> {
        if quantum == 0 {
            return Err(SimError::InvalidQuantum);
        }
        self.quantum = quantum;
        Ok(())
    }

    /// Current simulation tick.
    pub fn clock(&self) -> u64 {
        self.clock
    }

    /// Active discipline.
    pub fn discipline(&self) -> Discipline {
        self.discipline
    }

    /// Round-Robin time quantum.
    pub fn quantum(&self) -> u64 {
        self.quantum
    }

    /// The process table.
    pub fn table(&self) -> &ProcessTable {
        &self.table
    }

    /// The execution trace.
    pub fn trace(&self) -> &ExecutionTrace {
        &self.trace
    }

    /// Completion records, in finish order.
    pub fn completed(&self) -> &[CompletedProcess] {
        &self.completed
    }

    /// Whether every process has finished.
    pub fn is_complete(&self) -> bool {
        self.table.all_complete()
    }

    /// Metrics over the processes completed so far.
    pub fn metrics(&self) -> SimMetrics {
        SimMetrics::calculate(&self.completed)
    }

    /// Advances the simulation by one dispatch decision.
    ///
    /// Per step: check completion, query eligibility, idle-advance on an
    /// empty set, otherwise select a process, log the dispatch, apply the
    /// allocation, and record completion when the last tick is consumed.
    pub fn step(&mut self) -> StepOutcome {
        if self.table.all_complete() {
            return StepOutcome::Complete;
        }

        let eligible = self.table.eligible_at(self.clock);
        if eligible.is_empty() {
            // Gap before the next arrival: advance time, no dispatch.
            self.clock += 1;
            return StepOutcome::Idle;
        }

        let (idx, allocation) = self.select(&eligible);
        let now = self.clock;

        let process = &mut self.table.processes_mut()[idx];
        let ran_for = allocation.min(process.remaining);

        self.trace
            .append(ExecutionEvent::new(process.pid, process.name.clone(), now, ran_for));

        if process.started_at.is_none() {
            process.started_at = Some(now);
        }

        process.remaining -= ran_for;
        let pid = process.pid;
        if process.remaining == 0 {
            process.finished_at = Some(now + ran_for);
            self.completed.push(CompletedProcess::new(
                process.pid,
                process.name.clone(),
                process.arrival,
                process.burst,
                now + ran_for,
            ));
        }

        self.clock = now + ran_for;
        StepOutcome::Dispatched { pid, ran_for }
    }

    /// Runs until every process has finished, returning the final metrics.
    ///
    /// Terminates for any finite process set: every step either consumes
    /// burst or moves the clock toward the next arrival.
    pub fn run_to_completion(&mut self) -> SimMetrics {
        while self.step() != StepOutcome::Complete {}
        self.metrics()
    }

    /// Returns the simulation to its initial state.
    ///
    /// Processes keep their definitions; runtime state, the trace, the
    /// completion records, and the clock are cleared.
    pub fn reset(&mut self) {
        self.table.reset();
        self.trace.clear();
        self.completed.clear();
        self.clock = 0;
    }

    /// Captures the full simulation state.
    pub fn snapshot(&self) -> SimulationSnapshot {
        SimulationSnapshot {
            table: self.table.clone(),
            trace: self.trace.clone(),
            completed: self.completed.clone(),
            clock: self.clock,
            discipline: self.discipline,
            quantum: self.quantum,
        }
    }

    /// Restores an engine from a snapshot.
    ///
    /// Rejects snapshots that violate the boundary invariants (zero
    /// quantum, duplicate pids), which protects against hand-edited
    /// payloads.
    pub fn from_snapshot(snapshot: SimulationSnapshot) -> Result<Self, SimError> {
        if snapshot.quantum == 0 {
            return Err(SimError::InvalidQuantum);
        }
        let mut seen = HashSet::new();
        for p in snapshot.table.processes() {
            if !seen.insert(p.pid) {
                return Err(SimError::DuplicateProcessId(p.pid));
            }
        }
        Ok(Self {
            table: snapshot.table,
            trace: snapshot.trace,
            completed: snapshot.completed,
            clock: snapshot.clock,
            discipline: snapshot.discipline,
            quantum: snapshot.quantum,
        })
    }

    /// Picks the next process and its allocation from the eligible set.
    ///
    /// Returns a table index plus the tick budget for this dispatch.
    fn select(&self, eligible: &[usize]) -> (usize, u64) {
        let processes = self.table.processes();

        if self.discipline == Discipline::RoundRobin {
            // Rotate so the most recently dispatched process goes to the
            // back of the eligible queue, then take the head.
            let mut queue = eligible.to_vec();
            if let Some(last) = self.trace.last_dispatched() {
                if let Some(pos) = queue.iter().position(|&i| processes[i].pid == last) {
                    let rotated = queue.remove(pos);
                    queue.push(rotated);
                }
            }
            let idx = queue[0];
            return (idx, self.quantum.min(processes[idx].remaining));
        }

        let rule: &dyn DispatchRule = match self.discipline {
            Discipline::Fcfs => &rules::Fcfs,
            Discipline::Sjf => &rules::Sjf,
            Discipline::Priority => &rules::Priority,
            Discipline::RoundRobin => unreachable!("handled above"),
        };

        let candidates: Vec<&Process> = eligible.iter().map(|&i| &processes[i]).collect();
        let context = DispatchContext::at_time(self.clock);
        let best = dispatching::select_best(&candidates, rule, &context).unwrap_or(0);
        // Score-based disciplines run one tick per dispatch.
        (eligible[best], 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(discipline: Discipline, processes: &[(u32, u64, u64)]) -> SimulationEngine {
        let mut engine = SimulationEngine::new(discipline);
        for &(pid, arrival, burst) in processes {
            engine
                .add_process(Process::new(pid, format!("P{pid}"), burst).with_arrival(arrival))
                .unwrap();
        }
        engine
    }

    #[test]
    fn test_empty_table_completes_immediately() {
        let mut engine = SimulationEngine::new(Discipline::Fcfs);
        assert_eq!(engine.step(), StepOutcome::Complete);
        assert_eq!(engine.clock(), 0);
        assert!(engine.trace().is_empty());

        let metrics = engine.run_to_completion();
        assert_eq!(metrics.avg_waiting, 0.0);
        assert_eq!(metrics.avg_turnaround, 0.0);
    }

    #[test]
    fn test_idle_advance_before_first_arrival() {
        let mut engine = engine_with(Discipline::Fcfs, &[(1, 3, 2)]);
        assert_eq!(engine.step(), StepOutcome::Idle);
        assert_eq!(engine.step(), StepOutcome::Idle);
        assert_eq!(engine.step(), StepOutcome::Idle);
        assert_eq!(engine.clock(), 3);
        assert!(engine.trace().is_empty());

        assert_eq!(
            engine.step(),
            StepOutcome::Dispatched { pid: 1, ran_for: 1 }
        );
    }

    #[test]
    fn test_fcfs_reference_run() {
        // The canonical FCFS example: P1 (0,5), P2 (1,3).
        let mut engine = engine_with(Discipline::Fcfs, &[(1, 0, 5), (2, 1, 3)]);
        engine.run_to_completion();

        let segments = engine.trace().segments();
        assert_eq!(segments.len(), 2);
        assert_eq!((segments[0].pid, segments[0].start, segments[0].end), (1, 0, 5));
        assert_eq!((segments[1].pid, segments[1].start, segments[1].end), (2, 5, 8));

        let p1 = &engine.completed()[0];
        let p2 = &engine.completed()[1];
        assert_eq!((p1.pid, p1.waiting), (1, 0));
        assert_eq!((p2.pid, p2.waiting), (2, 4));
    }

    #[test]
    fn test_sjf_preempts_for_shorter_job() {
        // P1 (0,8) and P2 (0,4): SJF runs P2 to completion first.
        let mut engine = engine_with(Discipline::Sjf, &[(1, 0, 8), (2, 0, 4)]);
        let metrics = engine.run_to_completion();

        let segments = engine.trace().segments();
        assert_eq!((segments[0].pid, segments[0].start, segments[0].end), (2, 0, 4));
        assert_eq!((segments[1].pid, segments[1].start, segments[1].end), (1, 4, 12));
        assert!((metrics.avg_waiting - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_robin_alternates_quantum_blocks() {
        let mut engine = engine_with(Discipline::RoundRobin, &[(1, 0, 4), (2, 0, 4)]);
        engine.set_quantum(2).unwrap();
        engine.run_to_completion();

        let order: Vec<(u32, u64)> = engine
            .trace()
            .events()
            .iter()
            .map(|e| (e.pid, e.ran))
            .collect();
        assert_eq!(order, vec![(1, 2), (2, 2), (1, 2), (2, 2)]);

        // P1 finishes at 6 (waits 2), P2 at 8 (waits 4).
        assert_eq!(engine.clock(), 8);
        let p1 = &engine.completed()[0];
        let p2 = &engine.completed()[1];
        assert_eq!((p1.pid, p1.finished_at, p1.waiting), (1, 6, 2));
        assert_eq!((p2.pid, p2.finished_at, p2.waiting), (2, 8, 4));
    }

    #[test]
    fn test_round_robin_final_slice_shorter_than_quantum() {
        let mut engine = engine_with(Discipline::RoundRobin, &[(1, 0, 5)]);
        engine.set_quantum(3).unwrap();
        engine.run_to_completion();

        let slices: Vec<u64> = engine.trace().events().iter().map(|e| e.ran).collect();
        assert_eq!(slices, vec![3, 2]);
        assert_eq!(engine.clock(), 5);
    }

    #[test]
    fn test_priority_selects_lowest_value() {
        let mut engine = SimulationEngine::new(Discipline::Priority);
        engine
            .add_process(Process::new(1, "P1", 3).with_priority(5))
            .unwrap();
        engine
            .add_process(Process::new(2, "P2", 3).with_priority(1))
            .unwrap();
        engine.run_to_completion();

        let segments = engine.trace().segments();
        assert_eq!(segments[0].pid, 2);
        assert_eq!(segments[1].pid, 1);
    }

    #[test]
    fn test_started_and_finished_timestamps() {
        let mut engine = engine_with(Discipline::Fcfs, &[(1, 0, 2), (2, 0, 2)]);
        engine.run_to_completion();

        let processes = engine.table().processes();
        assert_eq!(processes[0].started_at, Some(0));
        assert_eq!(processes[0].finished_at, Some(2));
        assert_eq!(processes[1].started_at, Some(2));
        assert_eq!(processes[1].finished_at, Some(4));
    }

    #[test]
    fn test_invalid_quantum_rejected() {
        let mut engine = SimulationEngine::new(Discipline::RoundRobin);
        assert_eq!(engine.set_quantum(0), Err(SimError::InvalidQuantum));
        assert!(SimulationEngine::new(Discipline::RoundRobin)
            .with_quantum(0)
            .is_err());
    }

    #[test]
    fn test_switching_discipline_mid_run() {
        let mut engine = engine_with(Discipline::Fcfs, &[(1, 0, 4), (2, 0, 1)]);
        engine.step(); // FCFS runs P1 for one tick
        engine.set_discipline(Discipline::Sjf);
        engine.step(); // SJF now prefers P2 (remaining 1 < 3)

        let pids: Vec<u32> = engine.trace().events().iter().map(|e| e.pid).collect();
        assert_eq!(pids, vec![1, 2]);
    }

    #[test]
    fn test_reset_clears_run_state() {
        let mut engine = engine_with(Discipline::Fcfs, &[(1, 0, 3)]);
        engine.run_to_completion();
        assert!(engine.is_complete());

        engine.reset();
        assert_eq!(engine.clock(), 0);
        assert!(engine.trace().is_empty());
        assert!(engine.completed().is_empty());
        assert!(!engine.is_complete());
        assert_eq!(engine.table().processes()[0].remaining, 3);

        // A reset run reproduces the original result.
        engine.run_to_completion();
        assert_eq!(engine.completed().len(), 1);
        assert_eq!(engine.completed()[0].finished_at, 3);
    }

    #[test]
    fn test_snapshot_round_trip_resumes() {
        let mut engine = engine_with(Discipline::RoundRobin, &[(1, 0, 4), (2, 0, 4)]);
        engine.set_quantum(2).unwrap();
        engine.step();
        engine.step();

        let snapshot = engine.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let restored: SimulationSnapshot = serde_json::from_str(&json).unwrap();
        let mut resumed = SimulationEngine::from_snapshot(restored).unwrap();

        engine.run_to_completion();
        resumed.run_to_completion();
        assert_eq!(engine.trace(), resumed.trace());
        assert_eq!(engine.completed(), resumed.completed());
    }

    #[test]
    fn test_from_snapshot_rejects_bad_state() {
        let mut snapshot = engine_with(Discipline::Fcfs, &[(1, 0, 2)]).snapshot();
        snapshot.quantum = 0;
        assert_eq!(
            SimulationEngine::from_snapshot(snapshot).unwrap_err(),
            SimError::InvalidQuantum
        );
    }
}
