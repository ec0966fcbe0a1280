//! Raster drawing surface backed by a Cairo image surface.

use super::color::Color;
use super::render::{self, Segment};
use std::fmt;
use thiserror::Error;

/// Errors raised by drawing surface operations.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("cairo operation failed: {0}")]
    Cairo(#[from] cairo::Error),

    #[error("PNG encoding failed: {0}")]
    Png(#[from] cairo::IoError),
}

/// Fixed-size ARGB raster bitmap receiving rendered strokes.
///
/// Owned exclusively by the pad for its lifetime, mutated in place by stroke
/// rendering, and cleared on demand. A Cairo context is created per operation
/// rather than stored so the surface keeps exclusive ownership of its pixel
/// data, which `data()` inspection requires.
pub struct DrawingSurface {
    surface: cairo::ImageSurface,
}

impl DrawingSurface {
    /// Creates a blank (fully transparent) surface of the given pixel size.
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(Self { surface })
    }

    /// Surface width in pixels.
    pub fn width(&self) -> i32 {
        self.surface.width()
    }

    /// Surface height in pixels.
    pub fn height(&self) -> i32 {
        self.surface.height()
    }

    /// Erases the entire surface back to fully transparent.
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(&self.surface)?;
        ctx.set_operator(cairo::Operator::Clear);
        let _ = ctx.paint();
        Ok(())
    }

    /// Replaces the bitmap with a fresh one of the given size.
    ///
    /// The previous contents are dropped. This reproduces raster-canvas
    /// resize semantics: resizing the surface clears the drawing, including
    /// anything drawn mid-stroke.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), SurfaceError> {
        self.surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)?;
        Ok(())
    }

    /// Renders one smoothed stroke segment with the given ink and thickness.
    pub fn stroke_segment(
        &mut self,
        segment: &Segment,
        color: Color,
        thick: f64,
    ) -> Result<(), SurfaceError> {
        let ctx = cairo::Context::new(&self.surface)?;
        render::render_segment(&ctx, segment, color, thick);
        Ok(())
    }

    /// Encodes the current surface contents as PNG bytes.
    ///
    /// Encodes whatever is rendered, including a fully blank surface.
    pub fn encode_png(&self) -> Result<Vec<u8>, SurfaceError> {
        self.surface.flush();
        let mut buffer = Vec::new();
        self.surface.write_to_png(&mut buffer)?;
        Ok(buffer)
    }

    /// Returns true when any pixel differs from fully transparent.
    pub fn has_ink(&mut self) -> bool {
        self.surface.flush();
        self.surface
            .data()
            .map(|data| data.iter().any(|byte| *byte != 0))
            .unwrap_or(false)
    }

    /// Returns true when any fully-opaque pixel matches the given ink color.
    ///
    /// Anti-aliased stroke edges blend toward transparent, so only the solid
    /// interior of a stroke matches. The color's own alpha is ignored; the
    /// comparison is against opaque ink.
    pub fn has_ink_of(&mut self, color: Color) -> bool {
        let expected = opaque_pixel(color);
        self.surface.flush();
        self.surface
            .data()
            .map(|data| {
                data.chunks_exact(4)
                    .any(|px| u32::from_ne_bytes([px[0], px[1], px[2], px[3]]) == expected)
            })
            .unwrap_or(false)
    }
}

/// Packs a color into a fully-opaque ARGB32 pixel word.
///
/// ARGB32 pixels are premultiplied 32-bit native-endian words; at full alpha
/// premultiplication leaves the channels unchanged.
fn opaque_pixel(color: Color) -> u32 {
    let r = (color.r * 255.0).round() as u32;
    let g = (color.g * 255.0).round() as u32;
    let b = (color.b * 255.0).round() as u32;
    0xff00_0000 | (r << 16) | (g << 8) | b
}

impl fmt::Debug for DrawingSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DrawingSurface")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, WHITE};

    fn diagonal_segment() -> Segment {
        Segment {
            from: (10.0, 10.0),
            control: (30.0, 30.0),
            to: (50.0, 50.0),
        }
    }

    #[test]
    fn new_surface_is_blank() {
        let mut surface = DrawingSurface::new(64, 64).unwrap();
        assert!(!surface.has_ink());
    }

    #[test]
    fn stroke_leaves_ink_and_clear_removes_it() {
        let mut surface = DrawingSurface::new(64, 64).unwrap();
        surface
            .stroke_segment(&diagonal_segment(), BLACK, 3.0)
            .unwrap();
        assert!(surface.has_ink());

        surface.clear().unwrap();
        assert!(!surface.has_ink());
    }

    #[test]
    fn resize_drops_previous_contents() {
        let mut surface = DrawingSurface::new(64, 64).unwrap();
        surface
            .stroke_segment(&diagonal_segment(), BLACK, 3.0)
            .unwrap();

        surface.resize(32, 64).unwrap();
        assert_eq!(surface.width(), 32);
        assert_eq!(surface.height(), 64);
        assert!(!surface.has_ink());
    }

    #[test]
    fn ink_color_inspection_distinguishes_black_from_white() {
        let mut surface = DrawingSurface::new(64, 64).unwrap();
        surface
            .stroke_segment(&diagonal_segment(), BLACK, 3.0)
            .unwrap();
        assert!(surface.has_ink_of(BLACK));
        assert!(!surface.has_ink_of(WHITE));

        surface
            .stroke_segment(&diagonal_segment(), WHITE, 3.0)
            .unwrap();
        assert!(surface.has_ink_of(WHITE));
    }

    #[test]
    fn encode_png_emits_signature_bytes() {
        let surface = DrawingSurface::new(40, 20).unwrap();
        let png = surface.encode_png().unwrap();
        assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }
}
