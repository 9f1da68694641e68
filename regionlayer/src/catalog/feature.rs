//! Feature and geometry types for the catalog.

use std::fmt;

/// Polygon geometry as nested coordinate rings.
///
/// Rings hold vertices in the GeoJSON-native `(longitude, latitude)`
/// component order. The engine only ever reads the outer ring's first
/// vertex, so nothing here interprets the full ring topology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Geometry {
    /// Outer ring first, holes after, per GeoJSON polygon convention.
    pub rings: Vec<Vec<Vec<f64>>>,
}

impl Geometry {
    /// Create a geometry from raw rings.
    pub fn new(rings: Vec<Vec<Vec<f64>>>) -> Self {
        Self { rings }
    }

    /// Geometry with no rings at all (used for malformed source data).
    pub fn empty() -> Self {
        Self { rings: Vec::new() }
    }

    /// The outer ring's first vertex, if the geometry has one.
    pub fn first_vertex(&self) -> Option<&[f64]> {
        self.rings.first()?.first().map(Vec::as_slice)
    }

    /// Whether the geometry can yield a display coordinate.
    ///
    /// True iff the outer ring's first vertex exists and carries at
    /// least two numeric components. Covers all three malformation
    /// cases: no rings, empty outer ring, short vertex.
    pub fn is_well_formed(&self) -> bool {
        self.first_vertex().is_some_and(|v| v.len() >= 2)
    }
}

/// One administrative region record.
///
/// Read-only to the engine; the catalog owns these for the lifetime
/// of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    /// Human-readable name, also the lookup key for selection.
    pub name: String,
    /// Opaque upstream identifier (e.g. a GADM GID), forwarded but
    /// never interpreted.
    pub external_id: String,
    /// Polygon boundary of the region.
    pub geometry: Geometry,
}

impl Feature {
    /// Create a feature from its parts.
    pub fn new(
        name: impl Into<String>,
        external_id: impl Into<String>,
        geometry: Geometry,
    ) -> Self {
        Self {
            name: name.into(),
            external_id: external_id.into(),
            geometry,
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.external_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_vertex_of_valid_polygon() {
        let geometry = Geometry::new(vec![vec![vec![74.35, 31.55], vec![74.4, 31.6]]]);
        assert_eq!(geometry.first_vertex(), Some([74.35, 31.55].as_slice()));
    }

    #[test]
    fn test_empty_geometry_has_no_vertex() {
        assert_eq!(Geometry::empty().first_vertex(), None);
    }

    #[test]
    fn test_empty_outer_ring_has_no_vertex() {
        let geometry = Geometry::new(vec![vec![]]);
        assert_eq!(geometry.first_vertex(), None);
    }

    #[test]
    fn test_well_formed_requires_two_components() {
        let valid = Geometry::new(vec![vec![vec![69.0, 30.0]]]);
        assert!(valid.is_well_formed());

        let short_vertex = Geometry::new(vec![vec![vec![69.0]]]);
        assert!(!short_vertex.is_well_formed());
    }

    #[test]
    fn test_well_formed_rejects_all_malformation_cases() {
        assert!(!Geometry::empty().is_well_formed());
        assert!(!Geometry::new(vec![vec![]]).is_well_formed());
        assert!(!Geometry::new(vec![vec![vec![]]]).is_well_formed());
    }

    #[test]
    fn test_extra_components_are_allowed() {
        // Some datasets carry an altitude third component.
        let geometry = Geometry::new(vec![vec![vec![74.35, 31.55, 0.0]]]);
        assert!(geometry.is_well_formed());
    }

    #[test]
    fn test_feature_display() {
        let feature = Feature::new("Lahore", "PAK.7.2.4_1", Geometry::empty());
        assert_eq!(format!("{}", feature), "Lahore (PAK.7.2.4_1)");
    }
}
