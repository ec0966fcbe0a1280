//! Input handling and the stroke state machine.
//!
//! This module translates host pointer and touch events into drawing actions.
//! [`events`] defines the generic event vocabulary hosts deliver; [`state`]
//! holds the begin/continue/end stroke state machine and the midpoint
//! interpolation that smooths raw pointer positions into curve segments.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{ControlEvent, Event, InputEvent, TouchPoint};
pub use state::{StrokeState, StrokeTracker};
