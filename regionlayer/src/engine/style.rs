//! Render styling derived from selection state.

use crate::color::HighlightColor;

/// Outline width for every region, selected or not.
pub const STROKE_WIDTH: u32 = 2;

/// Outline opacity for every region.
pub const STROKE_OPACITY: f64 = 1.0;

/// Fill opacity for every region. The fill color is always
/// transparent, so this only matters if a renderer substitutes one.
pub const FILL_OPACITY: f64 = 0.7;

/// Style descriptor for one catalog feature.
///
/// Only the outline conveys selection: `stroke_color` is `None`
/// (fully transparent) for unselected regions and the latest
/// selection's color otherwise. `fill_color` is always `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub stroke_width: u32,
    pub stroke_opacity: f64,
    pub fill_opacity: f64,
    /// Outline color; `None` means fully transparent.
    pub stroke_color: Option<HighlightColor>,
    /// Fill color; always `None` in this design.
    pub fill_color: Option<HighlightColor>,
}

impl RegionStyle {
    /// Style for a region with no active selection.
    pub fn unselected() -> Self {
        Self {
            stroke_width: STROKE_WIDTH,
            stroke_opacity: STROKE_OPACITY,
            fill_opacity: FILL_OPACITY,
            stroke_color: None,
            fill_color: None,
        }
    }

    /// Style for a region outlined in the given selection color.
    pub fn outlined(color: HighlightColor) -> Self {
        Self {
            stroke_color: Some(color),
            ..Self::unselected()
        }
    }

    /// Whether this style draws a visible outline.
    pub fn is_highlighted(&self) -> bool {
        self.stroke_color.is_some()
    }
}
