//! Configuration type definitions.

use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// Drawing defaults applied when the pad is created.
///
/// Users can change thickness and theme at runtime through the pad's
/// controls; these values only seed the initial state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Default stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,

    /// Initial theme: "light" or "dark"
    #[serde(default)]
    pub default_theme: Theme,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_thickness: default_thickness(),
            default_theme: Theme::default(),
        }
    }
}

/// Surface sizing: a fixed height plus three width buckets keyed on the
/// host viewport width.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface height in pixels (always fixed, never re-bucketed)
    #[serde(default = "default_height")]
    pub height: i32,

    /// Surface width when the viewport is wider than `wide_min`
    #[serde(default = "default_wide_width")]
    pub wide_width: i32,

    /// Surface width between the two breakpoints
    #[serde(default = "default_medium_width")]
    pub medium_width: i32,

    /// Surface width when the viewport is narrower than `narrow_max`
    #[serde(default = "default_narrow_width")]
    pub narrow_width: i32,

    /// Viewport width above which the wide bucket applies
    #[serde(default = "default_wide_min")]
    pub wide_min: u32,

    /// Viewport width below which the narrow bucket applies
    #[serde(default = "default_narrow_max")]
    pub narrow_max: u32,
}

impl SurfaceConfig {
    /// Picks the surface width bucket for a viewport width.
    pub fn width_for_viewport(&self, viewport_width: u32) -> i32 {
        if viewport_width > self.wide_min {
            self.wide_width
        } else if viewport_width < self.narrow_max {
            self.narrow_width
        } else {
            self.medium_width
        }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            height: default_height(),
            wide_width: default_wide_width(),
            medium_width: default_medium_width(),
            narrow_width: default_narrow_width(),
            wide_min: default_wide_min(),
            narrow_max: default_narrow_max(),
        }
    }
}

/// Export destination settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory exported signatures are saved to (supports a leading ~)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// Exported file name
    #[serde(default = "default_filename")]
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename: default_filename(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_thickness() -> f64 {
    3.0
}

fn default_height() -> i32 {
    400
}

fn default_wide_width() -> i32 {
    600
}

fn default_medium_width() -> i32 {
    400
}

fn default_narrow_width() -> i32 {
    300
}

fn default_wide_min() -> u32 {
    750
}

fn default_narrow_max() -> u32 {
    500
}

fn default_save_directory() -> String {
    "~/Pictures/sigpad".to_string()
}

fn default_filename() -> String {
    "signature.png".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_buckets_follow_the_breakpoints() {
        let surface = SurfaceConfig::default();
        assert_eq!(surface.width_for_viewport(800), 600);
        assert_eq!(surface.width_for_viewport(751), 600);
        assert_eq!(surface.width_for_viewport(750), 400);
        assert_eq!(surface.width_for_viewport(600), 400);
        assert_eq!(surface.width_for_viewport(500), 400);
        assert_eq!(surface.width_for_viewport(499), 300);
        assert_eq!(surface.width_for_viewport(320), 300);
    }
}
