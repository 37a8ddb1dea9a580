//! Tick-driven simulation runners.
//!
//! The engine's `step()` is invocation-agnostic; this module supplies the
//! "automatic" mode: a runner that steps once per tick until the run
//! completes or a stop is requested. Manual mode is simply calling
//! `step()` yourself.
//!
//! The ticker is injectable so tests drive the loop without wall-clock
//! delays.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::engine::{SimulationEngine, StepOutcome};

/// Paces an automatic run.
pub trait Ticker {
    /// Blocks until the next step should fire.
    fn wait(&mut self);
}

/// Wall-clock pacing: one step per fixed interval.
#[derive(Debug, Clone)]
pub struct FixedInterval {
    period: Duration,
}

impl FixedInterval {
    /// Creates a ticker firing every `period`.
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Ticker for FixedInterval {
    fn wait(&mut self) {
        thread::sleep(self.period);
    }
}

/// No-delay pacing, for tests and batch runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Immediate;

impl Ticker for Immediate {
    fn wait(&mut self) {}
}

/// How an automatic run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every process finished.
    Completed,
    /// A stop was requested; the engine is valid and resumable.
    Stopped,
}

/// Cancels an [`AutoRunner`] run.
///
/// The stop flag is checked before every step, so once `stop()` returns,
/// no further step executes.
#[derive(Debug, Clone)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    /// Requests the run to stop.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether a stop has been requested.
    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Drives an engine one step per tick until completion or stop.
#[derive(Debug)]
pub struct AutoRunner<T: Ticker> {
    ticker: T,
    stop: Arc<AtomicBool>,
}

impl<T: Ticker> AutoRunner<T> {
    /// Creates a runner paced by the given ticker.
    pub fn new(ticker: T) -> Self {
        Self {
            ticker,
            stop: Arc::new(AtomicBool::new(false)),
        }
    }

    /// A handle for stopping this runner, usable from another thread.
    pub fn handle(&self) -> StopHandle {
        StopHandle(Arc::clone(&self.stop))
    }

    /// Runs the engine until it completes or a stop is requested.
    ///
    /// Each step is atomic; stopping between steps leaves the engine in a
    /// valid state from which `run` or manual stepping can resume. A
    /// fresh run after a stop requires no reset.
    pub fn run(&mut self, engine: &mut SimulationEngine) -> RunOutcome {
        loop {
            if self.stop.load(Ordering::Acquire) {
                return RunOutcome::Stopped;
            }
            if engine.step() == StepOutcome::Complete {
                return RunOutcome::Completed;
            }
            self.ticker.wait();
        }
    }
}
