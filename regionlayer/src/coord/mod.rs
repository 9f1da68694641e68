//! Display coordinate type.
//!
//! Catalog geometry stores vertices in GeoJSON's native
//! `(longitude, latitude)` component order, while map rendering wants
//! `(latitude, longitude)`. The swap happens exactly once, here, when
//! a display coordinate is derived from a geometry vertex.

use std::fmt;

/// A `(latitude, longitude)` point used to place a marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayCoord {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lon: f64,
}

impl DisplayCoord {
    /// Create a coordinate directly from latitude and longitude.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Derive a display coordinate from a geometry vertex.
    ///
    /// The vertex is `(longitude, latitude)`; the components swap
    /// here. Returns `None` for vertices with fewer than two
    /// components.
    pub fn from_vertex(vertex: &[f64]) -> Option<Self> {
        if vertex.len() < 2 {
            return None;
        }
        Some(Self {
            lat: vertex[1],
            lon: vertex[0],
        })
    }
}

impl fmt::Display for DisplayCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}
