//! Simulation performance metrics.
//!
//! Derives aggregate statistics from `CompletedProcess` records once a
//! run (or part of one) has finished.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg Waiting | mean(turnaround - burst) |
//! | Avg Turnaround | mean(finish - arrival) |
//! | Makespan | latest finish tick |
//!
//! Averages keep full f64 precision; use [`round2`] only at the display
//! boundary.

use crate::models::CompletedProcess;

/// Aggregate statistics over completed processes.
#[derive(Debug, Clone, PartialEq)]
pub struct SimMetrics {
    /// Mean waiting time in ticks. 0 when nothing has completed.
    pub avg_waiting: f64,
    /// Mean turnaround time in ticks. 0 when nothing has completed.
    pub avg_turnaround: f64,
    /// Latest completion tick. 0 when nothing has completed.
    pub makespan: u64,
    /// Number of records the averages cover.
    pub completed_count: usize,
}

impl SimMetrics {
    /// Computes metrics from completion records.
    pub fn calculate(completed: &[CompletedProcess]) -> Self {
        if completed.is_empty() {
            return Self {
                avg_waiting: 0.0,
                avg_turnaround: 0.0,
                makespan: 0,
                completed_count: 0,
            };
        }

        let n = completed.len() as f64;
        let total_waiting: u64 = completed.iter().map(|r| r.waiting).sum();
        let total_turnaround: u64 = completed.iter().map(|r| r.turnaround).sum();
        let makespan = completed.iter().map(|r| r.finished_at).max().unwrap_or(0);

        Self {
            avg_waiting: total_waiting as f64 / n,
            avg_turnaround: total_turnaround as f64 / n,
            makespan,
            completed_count: completed.len(),
        }
    }
}

/// Rounds to two decimal places for display.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(pid: u32, arrival: u64, burst: u64, finished_at: u64) -> CompletedProcess {
        CompletedProcess::new(pid, format!("P{pid}"), arrival, burst, finished_at)
    }

    #[test]
    fn test_metrics_basic() {
        let completed = vec![record(1, 0, 5, 5), record(2, 1, 3, 8)];
        let metrics = SimMetrics::calculate(&completed);

        // Waiting: P1 = 0, P2 = (8-1) - 3 = 4.
        assert!((metrics.avg_waiting - 2.0).abs() < 1e-10);
        // Turnaround: P1 = 5, P2 = 7.
        assert!((metrics.avg_turnaround - 6.0).abs() < 1e-10);
        assert_eq!(metrics.makespan, 8);
        assert_eq!(metrics.completed_count, 2);
    }

    #[test]
    fn test_metrics_empty_guard() {
        let metrics = SimMetrics::calculate(&[]);
        assert_eq!(metrics.avg_waiting, 0.0);
        assert_eq!(metrics.avg_turnaround, 0.0);
        assert_eq!(metrics.makespan, 0);
        assert_eq!(metrics.completed_count, 0);
    }

    #[test]
    fn test_conservation_per_record() {
        let completed = vec![record(1, 2, 4, 9), record(2, 0, 7, 12)];
        for r in &completed {
            assert_eq!(r.waiting + r.burst, r.turnaround);
        }
    }

    #[test]
    fn test_full_precision_until_rounding() {
        let completed = vec![record(1, 0, 1, 1), record(2, 0, 1, 2), record(3, 0, 1, 3)];
        let metrics = SimMetrics::calculate(&completed);
        // (0 + 1 + 2) / 3 = 1.0, but turnaround (1+2+3)/3 = 2.0; use a
        // case that doesn't divide evenly:
        assert!((metrics.avg_waiting - 1.0).abs() < 1e-10);

        let uneven = vec![record(1, 0, 1, 1), record(2, 0, 1, 3)];
        let m = SimMetrics::calculate(&uneven);
        assert!((m.avg_turnaround - 2.0).abs() < 1e-10);
        assert!((m.avg_waiting - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(1.005_000_1), 1.01);
        assert_eq!(round2(4.0), 4.0);
    }
}
