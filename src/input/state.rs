//! Stroke state machine: begin, continue, end.

use crate::draw::Segment;

/// Current stroke state.
///
/// The pad is either idle or tracing exactly one stroke; there is no other
/// mode. Transitions happen on pointer/touch press, motion, and release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StrokeState {
    /// No stroke in progress - waiting for input
    Idle,
    /// A stroke is in progress (pointer or touch held down)
    Drawing {
        /// Last recorded pointer position
        last: (f64, f64),
        /// Current path endpoint (the previous segment's midpoint)
        path: (f64, f64),
    },
}

/// Tracks one in-progress stroke and derives smoothed segments from
/// successive pointer positions.
///
/// Positions are surface-local. The tracker is pure geometry: it never
/// touches a surface, which keeps the interpolation unit-testable.
#[derive(Debug)]
pub struct StrokeTracker {
    state: StrokeState,
}

impl Default for StrokeTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokeTracker {
    /// Creates an idle tracker.
    pub fn new() -> Self {
        Self {
            state: StrokeState::Idle,
        }
    }

    /// Starts a stroke at the given position.
    ///
    /// Returns `false` without changing state when a stroke is already in
    /// progress (repeated press events are a no-op).
    pub fn begin(&mut self, x: f64, y: f64) -> bool {
        if matches!(self.state, StrokeState::Drawing { .. }) {
            return false;
        }
        self.state = StrokeState::Drawing {
            last: (x, y),
            path: (x, y),
        };
        true
    }

    /// Advances the stroke to a new position.
    ///
    /// Returns the segment to render: a quadratic curve from the current
    /// path endpoint, controlled by the last position, ending at the midpoint
    /// between the last and new positions. Returns `None` when no stroke is
    /// active, so stray move events have no effect.
    pub fn motion(&mut self, x: f64, y: f64) -> Option<Segment> {
        let StrokeState::Drawing { last, path } = &mut self.state else {
            return None;
        };

        let mid = ((last.0 + x) / 2.0, (last.1 + y) / 2.0);
        let segment = Segment {
            from: *path,
            control: *last,
            to: mid,
        };

        *path = mid;
        *last = (x, y);

        Some(segment)
    }

    /// Ends the stroke. Idempotent.
    pub fn end(&mut self) {
        self.state = StrokeState::Idle;
    }

    /// Returns true while a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, StrokeState::Drawing { .. })
    }

    /// Current stroke state.
    pub fn state(&self) -> StrokeState {
        self.state
    }
}
