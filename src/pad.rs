//! The signature pad component.
//!
//! [`SignaturePad`] owns the drawing surface, the stroke state machine, the
//! theme, and the configured thickness, and translates host-delivered events
//! into rendered stroke segments. All handlers run to completion
//! synchronously within the triggering event; the pad owns every piece of
//! mutable state, so there is nothing to lock and nothing to leak - dropping
//! the pad releases everything it acquired.

use crate::config::{Config, SurfaceConfig};
use crate::draw::{Color, DrawingSurface, SurfaceError};
use crate::input::events::{ControlEvent, Event, InputEvent, TouchPoint};
use crate::input::state::StrokeTracker;
use crate::theme::Theme;
use thiserror::Error;

/// Errors raised while handling pad events.
#[derive(Debug, Error)]
pub enum PadError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

/// Signature capture pad.
///
/// Created sized for the host viewport; driven by [`Event`]s afterwards.
pub struct SignaturePad {
    surface: DrawingSurface,
    tracker: StrokeTracker,
    theme: Theme,
    thickness: f64,
    /// Offset of the surface within the host viewport
    origin: (f64, f64),
    layout: SurfaceConfig,
}

impl SignaturePad {
    /// Creates a pad sized for the given viewport width.
    ///
    /// Width comes from the configured breakpoint buckets; height is fixed.
    pub fn new(config: &Config, viewport_width: u32) -> Result<Self, PadError> {
        let layout = config.surface.clone();
        let width = layout.width_for_viewport(viewport_width);
        let surface = DrawingSurface::new(width, layout.height)?;

        log::debug!(
            "pad created: {}x{} (viewport {viewport_width}), theme {:?}, thickness {:.1}px",
            width,
            layout.height,
            config.drawing.default_theme,
            config.drawing.default_thickness
        );

        Ok(Self {
            surface,
            tracker: StrokeTracker::new(),
            theme: config.drawing.default_theme,
            thickness: config.drawing.default_thickness,
            origin: (0.0, 0.0),
            layout,
        })
    }

    /// Sets the surface's offset within the host viewport.
    ///
    /// Incoming pointer/touch coordinates are viewport-relative; the pad
    /// subtracts this origin to obtain surface-local coordinates. Assumes
    /// the surface is neither scrolled nor transformed by the host.
    pub fn set_origin(&mut self, x: f64, y: f64) {
        self.origin = (x, y);
    }

    fn to_local(&self, x: f64, y: f64) -> (f64, f64) {
        (x - self.origin.0, y - self.origin.1)
    }

    /// Handles one host event.
    pub fn handle_event(&mut self, event: &Event) -> Result<(), PadError> {
        match event {
            Event::Input(input) => self.handle_input(input),
            Event::Control(control) => self.handle_control(control),
        }
    }

    /// Handles a pointer, touch, or viewport event.
    pub fn handle_input(&mut self, event: &InputEvent) -> Result<(), PadError> {
        match event {
            InputEvent::PointerDown { x, y } => {
                self.begin_stroke(*x, *y);
                Ok(())
            }
            InputEvent::PointerMove { x, y } => self.continue_stroke(*x, *y),
            InputEvent::PointerUp | InputEvent::PointerLeave => {
                self.end_stroke();
                Ok(())
            }
            InputEvent::TouchStart { touches } => {
                if let Some(touch) = first_touch(touches) {
                    self.begin_stroke(touch.x, touch.y);
                }
                Ok(())
            }
            InputEvent::TouchMove { touches } => {
                if let Some(touch) = first_touch(touches) {
                    self.continue_stroke(touch.x, touch.y)
                } else {
                    Ok(())
                }
            }
            InputEvent::TouchEnd | InputEvent::TouchCancel => {
                self.end_stroke();
                Ok(())
            }
            InputEvent::Resize { width } => self.resize_viewport(*width),
        }
    }

    /// Handles a UI control action.
    pub fn handle_control(&mut self, event: &ControlEvent) -> Result<(), PadError> {
        match event {
            ControlEvent::Clear => self.clear(),
            ControlEvent::ToggleTheme => {
                self.toggle_theme();
                Ok(())
            }
            ControlEvent::SetThickness { value } => {
                self.set_thickness(*value);
                Ok(())
            }
        }
    }

    /// Starts a stroke at viewport coordinates. No-op when already drawing.
    pub fn begin_stroke(&mut self, x: f64, y: f64) {
        let (x, y) = self.to_local(x, y);
        if !self.tracker.begin(x, y) {
            log::debug!("begin ignored: stroke already in progress");
        }
    }

    /// Advances the in-progress stroke, rendering one smoothed segment.
    ///
    /// Stroke color is resolved from the theme here, at move-time, so a
    /// theme toggle mid-stroke changes the ink of the remaining segments.
    /// Ignored entirely when no stroke is active.
    pub fn continue_stroke(&mut self, x: f64, y: f64) -> Result<(), PadError> {
        let (x, y) = self.to_local(x, y);
        if let Some(segment) = self.tracker.motion(x, y) {
            self.surface
                .stroke_segment(&segment, self.theme.stroke_color(), self.thickness)?;
        }
        Ok(())
    }

    /// Ends the in-progress stroke. Idempotent.
    pub fn end_stroke(&mut self) {
        self.tracker.end();
    }

    /// Erases the entire surface to blank. Always succeeds; no confirmation.
    pub fn clear(&mut self) -> Result<(), PadError> {
        self.surface.clear()?;
        log::info!("surface cleared");
        Ok(())
    }

    /// Sets the line width for subsequent strokes.
    ///
    /// Non-finite values are rejected with a warning; finite values clamp to
    /// a minimum of 1.0.
    pub fn set_thickness(&mut self, value: f64) {
        if !value.is_finite() {
            log::warn!("Ignoring non-finite thickness {value}");
            return;
        }
        if value < 1.0 {
            log::warn!("Thickness {value:.1} below minimum, clamping to 1.0");
        }
        self.thickness = value.max(1.0);
        log::debug!("Thickness set to {:.1}px", self.thickness);
    }

    /// Flips between light and dark theme and returns the new value.
    ///
    /// Affects the ink of subsequent segments and the styling class the host
    /// should apply to its document body.
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        log::info!(
            "Theme switched to {:?} ({})",
            self.theme,
            self.theme.body_class()
        );
        self.theme
    }

    /// Re-buckets the surface width for a new viewport width.
    ///
    /// When the bucket changes, the bitmap is recreated, which clears it -
    /// including mid-stroke content. The stroke state machine itself is left
    /// untouched, so a held pointer keeps drawing onto the fresh bitmap.
    pub fn resize_viewport(&mut self, viewport_width: u32) -> Result<(), PadError> {
        let width = self.layout.width_for_viewport(viewport_width);
        if width != self.surface.width() {
            self.surface.resize(width, self.layout.height)?;
            log::info!(
                "Surface resized to {}x{} (viewport {viewport_width}); drawing cleared",
                width,
                self.layout.height
            );
        }
        Ok(())
    }

    /// Encodes the current surface contents as a PNG image.
    ///
    /// Exports whatever is rendered, including a blank surface.
    pub fn export_png(&self) -> Result<Vec<u8>, PadError> {
        Ok(self.surface.encode_png()?)
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Styling class for the host's document body.
    pub fn body_class(&self) -> &'static str {
        self.theme.body_class()
    }

    /// Current stroke thickness in pixels.
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Returns true while a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.tracker.is_drawing()
    }

    /// Returns true when any pixel differs from the blank state.
    pub fn has_ink(&mut self) -> bool {
        self.surface.has_ink()
    }

    /// Returns true when any fully-opaque pixel matches the given ink color.
    pub fn has_ink_of(&mut self, color: Color) -> bool {
        self.surface.has_ink_of(color)
    }
}

fn first_touch(touches: &[TouchPoint]) -> Option<TouchPoint> {
    touches.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_pad() -> SignaturePad {
        SignaturePad::new(&Config::default(), 800).unwrap()
    }

    #[test]
    fn thickness_rejects_non_finite_and_clamps_low_values() {
        let mut pad = make_pad();
        assert_eq!(pad.thickness(), 3.0);

        pad.set_thickness(f64::NAN);
        assert_eq!(pad.thickness(), 3.0);

        pad.set_thickness(f64::INFINITY);
        assert_eq!(pad.thickness(), 3.0);

        pad.set_thickness(0.0);
        assert_eq!(pad.thickness(), 1.0);

        pad.set_thickness(-4.0);
        assert_eq!(pad.thickness(), 1.0);

        pad.set_thickness(7.5);
        assert_eq!(pad.thickness(), 7.5);
    }

    #[test]
    fn begin_while_drawing_preserves_the_active_stroke() {
        let mut pad = make_pad();
        pad.begin_stroke(10.0, 10.0);
        assert!(pad.is_drawing());

        pad.begin_stroke(200.0, 200.0);
        assert!(pad.is_drawing());

        // The stroke continues from the original press position, so ink
        // lands near it rather than near the second press.
        pad.continue_stroke(12.0, 12.0).unwrap();
        assert!(pad.has_ink());
    }

    #[test]
    fn origin_offsets_incoming_coordinates() {
        let mut pad = make_pad();
        pad.set_origin(100.0, 50.0);

        // Press outside the surface once mapped; the stroke still tracks,
        // but segments land at local coordinates.
        pad.begin_stroke(110.0, 60.0);
        pad.continue_stroke(140.0, 90.0).unwrap();
        assert!(pad.has_ink());
    }
}
