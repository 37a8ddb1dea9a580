//! Execution trace (Gantt data).
//!
//! An append-only log of dispatch decisions. The trace serves two roles:
//! it is the data behind Gantt rendering, and Round-Robin reads its last
//! entry to decide queue rotation.

use serde::{Deserialize, Serialize};

/// One dispatch decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionEvent {
    /// Dispatched process id.
    pub pid: u32,
    /// Process display name (denormalized for rendering).
    pub name: String,
    /// Tick at which the dispatch happened.
    pub at: u64,
    /// Ticks allocated by this dispatch.
    pub ran: u64,
}

impl ExecutionEvent {
    /// Creates a new event.
    pub fn new(pid: u32, name: impl Into<String>, at: u64, ran: u64) -> Self {
        Self {
            pid,
            name: name.into(),
            at,
            ran,
        }
    }
}

/// A contiguous execution block, for Gantt rendering.
///
/// Covers `[start, end)` on the time axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttSegment {
    pub pid: u32,
    pub name: String,
    pub start: u64,
    pub end: u64,
}

/// Append-only, time-ordered log of dispatch events.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionTrace {
    events: Vec<ExecutionEvent>,
}

impl ExecutionTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dispatch event.
    ///
    /// Event times must be non-decreasing; violating this is an engine
    /// bug, checked in debug builds.
    pub fn append(&mut self, event: ExecutionEvent) {
        debug_assert!(
            self.events.last().map_or(true, |last| last.at <= event.at),
            "trace time must be non-decreasing"
        );
        self.events.push(event);
    }

    /// The pid of the most recent dispatch, if any.
    ///
    /// This is the one piece of trace state Round-Robin depends on.
    pub fn last_dispatched(&self) -> Option<u32> {
        self.events.last().map(|e| e.pid)
    }

    /// All events in dispatch order.
    pub fn events(&self) -> &[ExecutionEvent] {
        &self.events
    }

    /// Number of recorded dispatches.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether no dispatch has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Removes all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Coalesces consecutive same-process events into Gantt blocks.
    ///
    /// Adjacent events for the same pid merge into one segment; an idle
    /// gap or a switch to another process starts a new one.
    pub fn segments(&self) -> Vec<GanttSegment> {
        let mut segments: Vec<GanttSegment> = Vec::new();
        for event in &self.events {
            match segments.last_mut() {
                Some(seg) if seg.pid == event.pid && seg.end == event.at => {
                    seg.end = event.at + event.ran;
                }
                _ => segments.push(GanttSegment {
                    pid: event.pid,
                    name: event.name.clone(),
                    start: event.at,
                    end: event.at + event.ran,
                }),
            }
        }
        segments
    }
}
