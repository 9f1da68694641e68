//! Selection and marker records.

use crate::catalog::Feature;
use crate::color::HighlightColor;
use crate::coord::DisplayCoord;

/// One user selection: a catalog feature plus its assigned identity.
///
/// The feature is shared by reference, never copied; color and
/// position are fixed at creation. Selecting the same region twice
/// produces two independent records with independent colors.
#[derive(Debug, Clone, Copy)]
pub struct Selection<'c> {
    /// The catalog feature this selection was created from.
    pub feature: &'c Feature,
    /// Highlight color assigned at creation, never reassigned.
    pub color: HighlightColor,
    /// Display coordinate derived from the feature at creation.
    pub position: DisplayCoord,
}

/// One map marker, derived from a selection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker<'c> {
    /// Where to place the marker, `(latitude, longitude)`.
    pub position: DisplayCoord,
    /// The selected feature's name, shown in the marker popup.
    pub label: &'c str,
}

impl<'c> Selection<'c> {
    /// The marker this selection contributes to a render pass.
    pub fn marker(&self) -> Marker<'c> {
        Marker {
            position: self.position,
            label: &self.feature.name,
        }
    }
}
