//! Built-in dispatching rules.
//!
//! # Rules
//!
//! - **FCFS**: earliest arrival first
//! - **SJF**: least remaining work first (re-evaluated per tick, i.e. SRTF)
//! - **PRIORITY**: lowest priority value first
//!
//! # Score Convention
//! All rules return lower scores for processes that should run sooner.
//! Round-Robin is not a score rule; see the engine's queue rotation.

use super::{DispatchContext, DispatchRule, RuleScore};
use crate::models::Process;

/// First come, first served.
///
/// Scores by arrival tick. The engine still re-selects every tick, so two
/// FCFS processes with the same arrival interleave only through the
/// stable tie-break, never by preemption.
#[derive(Debug, Clone, Copy)]
pub struct Fcfs;

impl DispatchRule for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.arrival as f64
    }
}

/// Shortest job first.
///
/// Scores by remaining work rather than total burst, so a long process
/// is preempted as soon as a shorter one arrives (SRTF behavior).
#[derive(Debug, Clone, Copy)]
pub struct Sjf;

impl DispatchRule for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.remaining as f64
    }
}

/// Priority scheduling.
///
/// Lower priority value = more urgent.
#[derive(Debug, Clone, Copy)]
pub struct Priority;

impl DispatchRule for Priority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn evaluate(&self, process: &Process, _context: &DispatchContext) -> RuleScore {
        process.priority as f64
    }
}
