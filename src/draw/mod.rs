//! Rendering primitives (Cairo-based).
//!
//! This module defines the core drawing types for signature capture:
//! - [`Color`]: RGBA color representation with stroke color constants
//! - [`DrawingSurface`]: the raster bitmap receiving rendered strokes
//! - [`Segment`] and its rendering function for smoothed freehand curves

pub mod color;
pub mod render;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use color::{BLACK, TRANSPARENT, WHITE};
pub use render::Segment;
pub use surface::{DrawingSurface, SurfaceError};
