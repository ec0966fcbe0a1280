//! Light/dark theme state and the styling it derives.

use crate::draw::color::{self, Color};
use serde::{Deserialize, Serialize};

/// Visual theme of the pad.
///
/// Selects the stroke color for subsequent segments and the styling class
/// the host applies to its document body. Held as component-local state with
/// explicit setters; there is exactly one pad instance, so no process-wide
/// singleton exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Dark strokes on a light page
    #[default]
    Light,
    /// Light strokes on a dark page
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Stroke color for this theme.
    ///
    /// Resolved by the pad at move-time, not at stroke start, so toggling the
    /// theme mid-stroke changes the color of the remaining segments.
    pub fn stroke_color(self) -> Color {
        match self {
            Theme::Light => color::BLACK,
            Theme::Dark => color::WHITE,
        }
    }

    /// Styling class for the host's document body.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Light => "light-theme",
            Theme::Dark => "dark-theme",
        }
    }

    /// Parses a theme name ("light" or "dark", case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, WHITE};

    #[test]
    fn toggling_twice_restores_color_and_class() {
        let theme = Theme::Light;
        let flipped = theme.toggled();
        assert_eq!(flipped, Theme::Dark);
        assert_eq!(flipped.toggled(), theme);
        assert_eq!(flipped.toggled().stroke_color(), theme.stroke_color());
        assert_eq!(flipped.toggled().body_class(), theme.body_class());
    }

    #[test]
    fn stroke_colors_match_theme() {
        assert_eq!(Theme::Light.stroke_color(), BLACK);
        assert_eq!(Theme::Dark.stroke_color(), WHITE);
    }

    #[test]
    fn body_classes_match_theme() {
        assert_eq!(Theme::Light.body_class(), "light-theme");
        assert_eq!(Theme::Dark.body_class(), "dark-theme");
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        assert_eq!(Theme::from_name("Dark"), Some(Theme::Dark));
        assert!(Theme::from_name("sepia").is_none());
    }
}
