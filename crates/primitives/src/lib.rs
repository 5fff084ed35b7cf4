//! Core value types for line decorations: positions, line ranges, colors and styles.

/// Background colors with opacity.
pub mod color;
/// Text positions and whole-line ranges.
pub mod range;
/// Decoration style specifications handed to the host.
pub mod style;

pub use color::{ParseColorError, Rgb, Rgba};
pub use range::{LineIdx, LineRange, Position};
pub use style::StyleSpec;
