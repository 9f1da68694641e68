//! Highlight color type.

use std::fmt;

use rand::Rng;

/// Number of representable 24-bit RGB colors.
const COLOR_SPACE: u32 = 0x100_0000;

/// A 24-bit RGB highlight color.
///
/// Assigned once per selection and never reassigned. Colors are drawn
/// uniformly at random over the full space with no uniqueness
/// registry; two selections landing on the same color is accepted and
/// simply indistinguishable visually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HighlightColor(u32);

impl HighlightColor {
    /// Create a color from a packed `0xRRGGBB` value.
    ///
    /// Bits above the low 24 are masked off.
    pub fn from_rgb(rgb: u32) -> Self {
        Self(rgb & (COLOR_SPACE - 1))
    }

    /// Draw a color uniformly at random from the full RGB space.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(0..COLOR_SPACE))
    }

    /// The packed `0xRRGGBB` value.
    pub fn as_rgb(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for HighlightColor {
    /// Format as a CSS hex color, always six digits (`#0000ff`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}
