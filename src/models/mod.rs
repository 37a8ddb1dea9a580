//! Simulation domain models.
//!
//! Core data types for the scheduling simulation: the mutable `Process`
//! runtime record, the append-only `ExecutionTrace` (Gantt data), the
//! immutable `CompletedProcess` snapshot, and synthetic workload
//! generation.

mod completion;
mod process;
mod trace;
mod workload;

pub use completion::CompletedProcess;
pub use process::Process;
pub use trace::{ExecutionEvent, ExecutionTrace, GanttSegment};
pub use workload::WorkloadSpec;
