//! CPU process-scheduling simulation engine.
//!
//! Models a single-CPU scheduling simulation: a process table, four
//! dispatching disciplines (FCFS, SJF, Priority, Round-Robin), an
//! append-only execution trace (Gantt data), and waiting/turnaround
//! metrics. Pure in-memory computation — no I/O, no internal
//! concurrency; consumers drive the engine one atomic `step()` at a
//! time, manually or through a tick-paced runner.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ExecutionTrace`, `CompletedProcess`,
//!   workload generation
//! - **`dispatching`**: `Discipline`, dispatching rules, selection logic
//! - **`engine`**: `ProcessTable`, `SimulationEngine`, snapshots
//! - **`metrics`**: waiting/turnaround averages
//! - **`runner`**: tick-driven automatic stepping with cancellation
//! - **`validation`**: boundary checks on user input
//!
//! # Example
//!
//! ```
//! use schedsim::dispatching::Discipline;
//! use schedsim::engine::SimulationEngine;
//! use schedsim::models::Process;
//!
//! let mut engine = SimulationEngine::new(Discipline::Fcfs);
//! engine.add_process(Process::new(1, "P1", 5)).unwrap();
//! engine.add_process(Process::new(2, "P2", 3).with_arrival(1)).unwrap();
//!
//! let metrics = engine.run_to_completion();
//! assert_eq!(metrics.avg_waiting, 2.0);
//! ```

pub mod dispatching;
pub mod engine;
pub mod metrics;
pub mod models;
pub mod runner;
pub mod validation;

mod error;

pub use error::SimError;
