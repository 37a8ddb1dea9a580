//! Synthetic workload generation.
//!
//! Produces random process sets for demos and stress tests, in the
//! builder style of the other models. Generation is deterministic for a
//! fixed RNG, so seeded runs are reproducible.

use std::ops::RangeInclusive;

use rand::Rng;

use super::Process;

/// Parameters for a randomly generated process set.
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    /// Number of processes to generate.
    pub count: usize,
    /// Arrival tick range.
    pub arrival: RangeInclusive<u64>,
    /// Burst tick range. Values below 1 are clamped to 1.
    pub burst: RangeInclusive<u64>,
    /// Priority range (lower = more urgent).
    pub priority: RangeInclusive<i32>,
}

impl WorkloadSpec {
    /// Creates a spec for `count` processes with default ranges.
    pub fn new(count: usize) -> Self {
        Self {
            count,
            arrival: 0..=0,
            burst: 1..=10,
            priority: 0..=0,
        }
    }

    /// Sets the arrival window.
    pub fn with_arrival(mut self, arrival: RangeInclusive<u64>) -> Self {
        self.arrival = arrival;
        self
    }

    /// Sets the burst range.
    pub fn with_burst(mut self, burst: RangeInclusive<u64>) -> Self {
        self.burst = burst;
        self
    }

    /// Sets the priority range.
    pub fn with_priority(mut self, priority: RangeInclusive<i32>) -> Self {
        self.priority = priority;
        self
    }

    /// Generates the process set.
    ///
    /// Pids are assigned 1..=count with names "P1".."Pn".
    pub fn generate<R: Rng>(&self, rng: &mut R) -> Vec<Process> {
        let burst_lo = (*self.burst.start()).max(1);
        let burst_hi = (*self.burst.end()).max(burst_lo);

        (1..=self.count as u32)
            .map(|pid| {
                Process::new(pid, format!("P{pid}"), rng.random_range(burst_lo..=burst_hi))
                    .with_arrival(rng.random_range(self.arrival.clone()))
                    .with_priority(rng.random_range(self.priority.clone()))
            })
            .collect()
    }
}
