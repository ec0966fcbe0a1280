//! Library exports for reusing sigpad subsystems.
//!
//! Exposes the pad component alongside the configuration, drawing, and input
//! modules it relies on so that hosts and tests can drive the widget
//! directly.

pub mod config;
pub mod draw;
pub mod export;
pub mod input;
pub mod pad;
pub mod theme;

pub use config::Config;
pub use pad::SignaturePad;
pub use theme::Theme;
