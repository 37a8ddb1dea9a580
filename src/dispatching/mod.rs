//! Dispatching disciplines and selection logic.
//!
//! The score-based disciplines (FCFS, SJF, Priority) are expressed as
//! `DispatchRule` implementations; Round-Robin is a queue rotation and is
//! handled by the engine directly on top of the trace's last-dispatched
//! pid.
//!
//! # Score Convention
//! Lower score = dispatched sooner. Ties preserve process-table insertion
//! order (stable sort), which makes every discipline deterministic.

mod context;
pub mod rules;

pub use context::DispatchContext;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::models::Process;
use crate::SimError;

/// Score returned by a dispatching rule. Lower = higher urgency.
pub type RuleScore = f64;

/// A pure dispatching rule.
///
/// Rules never mutate state; they map a process and the current context
/// to a score. Re-evaluated on every step, so a rule over `remaining`
/// yields shortest-remaining-time behavior.
pub trait DispatchRule: Send + Sync + fmt::Debug {
    /// Rule name (e.g., "FCFS").
    fn name(&self) -> &'static str;

    /// Scores a process; lower scores are dispatched first.
    fn evaluate(&self, process: &Process, context: &DispatchContext) -> RuleScore;
}

/// The four scheduling disciplines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Discipline {
    /// First come, first served (by arrival tick).
    #[default]
    Fcfs,
    /// Shortest job first, re-evaluated per tick (shortest remaining time).
    Sjf,
    /// Lowest priority value first.
    Priority,
    /// Fixed time quantum, rotating queue.
    RoundRobin,
}

impl Discipline {
    /// String form used in snapshots and display.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::Sjf => "sjf",
            Self::Priority => "priority",
            Self::RoundRobin => "round_robin",
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Discipline {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fcfs" => Ok(Self::Fcfs),
            "sjf" | "srtf" => Ok(Self::Sjf),
            "priority" => Ok(Self::Priority),
            "round_robin" | "roundrobin" | "rr" => Ok(Self::RoundRobin),
            _ => Err(SimError::UnknownDiscipline(s.to_string())),
        }
    }
}

impl Serialize for Discipline {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Discipline {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Sorts processes by rule score, keeping insertion order on ties.
///
/// Returns indices into the input slice; stable sort makes the table
/// order the tie-breaker.
pub fn sort_indices(
    processes: &[&Process],
    rule: &dyn DispatchRule,
    context: &DispatchContext,
) -> Vec<usize> {
    let scores: Vec<RuleScore> = processes
        .iter()
        .map(|p| rule.evaluate(p, context))
        .collect();

    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by(|&a, &b| {
        scores[a]
            .partial_cmp(&scores[b])
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    indices
}

/// Index of the process the rule would dispatch next.
pub fn select_best(
    processes: &[&Process],
    rule: &dyn DispatchRule,
    context: &DispatchContext,
) -> Option<usize> {
    sort_indices(processes, rule, context).first().copied()
}
