//! Generic input event types for host-agnostic delivery.
//!
//! Hosts map their native pointer/touch/resize notifications to these values
//! and feed them to the pad. The serde tags mirror the platform event names,
//! which keeps recorded event traces readable.

use serde::{Deserialize, Serialize};

/// A single touch contact point in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub x: f64,
    pub y: f64,
}

/// Pointer, touch, and viewport events consumed by the pad.
///
/// Touch variants carry the full active contact list; the pad reads
/// coordinates from the first contact point only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum InputEvent {
    /// Primary pointer pressed over the surface
    PointerDown { x: f64, y: f64 },
    /// Pointer moved (only meaningful while a stroke is active)
    PointerMove { x: f64, y: f64 },
    /// Primary pointer released
    PointerUp,
    /// Pointer left the surface
    PointerLeave,
    /// Touch contact started
    TouchStart { touches: Vec<TouchPoint> },
    /// Touch contact moved
    TouchMove { touches: Vec<TouchPoint> },
    /// Touch contact ended
    TouchEnd,
    /// Touch contact cancelled by the platform
    TouchCancel,
    /// Host viewport resized to the given width in pixels
    Resize { width: u32 },
}

/// UI control actions (the pad's buttons and inputs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ControlEvent {
    /// Erase the surface to blank
    Clear,
    /// Flip between light and dark theme
    ToggleTheme,
    /// Use the given line width for subsequent strokes
    SetThickness { value: f64 },
}

/// Any event a host can deliver to the pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Event {
    Input(InputEvent),
    Control(ControlEvent),
}
