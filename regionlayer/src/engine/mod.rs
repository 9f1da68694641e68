//! Selection engine — region selection and highlight state.
//!
//! The engine sits between the immutable [`FeatureCatalog`] and a
//! render surface. One command, [`SelectionEngine::select_region`],
//! resolves a chosen name against the catalog's valid subset and
//! appends a colored selection; two queries,
//! [`SelectionEngine::style_for`] and [`SelectionEngine::markers`],
//! answer what the render surface should draw. The engine never
//! draws and never mutates the catalog.
//!
//! Failures never escape the command boundary. A not-found name or an
//! unusable geometry becomes the engine's latest error message,
//! cleared by the next successful selection; the selection sequence
//! itself only ever grows.

mod error;
mod selection;
mod style;

pub use error::SelectError;
pub use selection::{Marker, Selection};
pub use style::{RegionStyle, FILL_OPACITY, STROKE_OPACITY, STROKE_WIDTH};

use tracing::{debug, warn};

use crate::catalog::{Feature, FeatureCatalog};
use crate::color::HighlightColor;
use crate::coord::DisplayCoord;

/// Session-scoped selection state over a borrowed catalog.
///
/// Single-threaded and synchronous by design: one command per user
/// action, completed before the next is accepted.
#[derive(Debug)]
pub struct SelectionEngine<'c> {
    catalog: &'c FeatureCatalog,
    selections: Vec<Selection<'c>>,
    last_coordinate: Option<DisplayCoord>,
    error: Option<SelectError>,
}

impl<'c> SelectionEngine<'c> {
    /// Create an engine with empty state over the given catalog.
    pub fn new(catalog: &'c FeatureCatalog) -> Self {
        Self {
            catalog,
            selections: Vec::new(),
            last_coordinate: None,
            error: None,
        }
    }

    /// The catalog this engine resolves names against.
    pub fn catalog(&self) -> &'c FeatureCatalog {
        self.catalog
    }

    /// Select a region by name.
    ///
    /// The name must match a valid feature's name byte-exactly;
    /// dropdown picks and direct map clicks both arrive here and are
    /// indistinguishable. On success the selection sequence grows by
    /// one, with a fresh random color and the derived
    /// `(latitude, longitude)` coordinate; on failure the sequence is
    /// untouched and the failure becomes the engine's current error.
    pub fn select_region(&mut self, name: &str) {
        let Some(feature) = self.catalog.find_valid(name) else {
            warn!(name = %name, "selected region not found");
            self.error = Some(SelectError::RegionNotFound);
            return;
        };

        // The valid subset guarantees a derivable coordinate, but the
        // original behavior re-checks the vertex here and reports a
        // distinct error if it is unusable.
        let Some(position) = feature
            .geometry
            .first_vertex()
            .and_then(DisplayCoord::from_vertex)
        else {
            warn!(name = %name, "coordinates not found for selected region");
            self.last_coordinate = None;
            self.error = Some(SelectError::CoordinatesUnavailable);
            return;
        };

        let color = HighlightColor::random();
        debug!(name = %name, %color, %position, "region selected");

        self.error = None;
        self.last_coordinate = Some(position);
        self.selections.push(Selection {
            feature,
            color,
            position,
        });
    }

    /// Style for any catalog feature, selected or not.
    ///
    /// The outline takes the color of the most recently created
    /// selection sharing this feature's name, so re-selecting a
    /// region visually overrides its earlier color. The fill is
    /// always transparent.
    pub fn style_for(&self, feature: &Feature) -> RegionStyle {
        self.selections
            .iter()
            .rev()
            .find(|s| s.feature.name == feature.name)
            .map(|s| RegionStyle::outlined(s.color))
            .unwrap_or_else(RegionStyle::unselected)
    }

    /// One marker per selection, in creation order.
    ///
    /// Recomputed fresh from current state on every call.
    pub fn markers(&self) -> Vec<Marker<'c>> {
        self.selections.iter().map(Selection::marker).collect()
    }

    /// All selections in creation order.
    pub fn selections(&self) -> &[Selection<'c>] {
        &self.selections
    }

    /// The most recently derived display coordinate, if any.
    pub fn last_coordinate(&self) -> Option<DisplayCoord> {
        self.last_coordinate
    }

    /// The currently active error, if any.
    pub fn error(&self) -> Option<SelectError> {
        self.error
    }

    /// The current user-visible error message, verbatim.
    pub fn error_message(&self) -> Option<String> {
        self.error.map(|e| e.to_string())
    }
}
