//! GeoJSON catalog ingestion.
//!
//! Parses a GeoJSON FeatureCollection into [`Feature`] records. The
//! parser is deliberately lenient about geometry: upstream boundary
//! datasets routinely contain features with `null` or truncated
//! coordinates, and those must survive loading so the valid-subset
//! filter can exclude them from lookup later. Only I/O failures and
//! documents that are not JSON abort the load.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use super::feature::{Feature, Geometry};
use super::keys::CatalogKeys;

/// Errors that can occur while loading a catalog document.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read the catalog file.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] io::Error),

    /// The document is not parseable JSON.
    #[error("Failed to parse catalog document: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct FeatureCollectionDoc {
    #[serde(default)]
    features: Vec<FeatureDoc>,
}

#[derive(Debug, Deserialize)]
struct FeatureDoc {
    #[serde(default)]
    properties: serde_json::Map<String, Value>,
    #[serde(default)]
    geometry: Option<GeometryDoc>,
}

#[derive(Debug, Deserialize)]
struct GeometryDoc {
    #[serde(rename = "type", default)]
    kind: String,
    #[serde(default)]
    coordinates: Value,
}

/// Parse a GeoJSON FeatureCollection string into features.
///
/// Property values for the name and external-id keys are read as
/// strings; features missing either property get an empty string
/// (catalog data quality is the upstream dataset's problem).
pub fn parse_geojson(document: &str, keys: &CatalogKeys) -> Result<Vec<Feature>, CatalogError> {
    let doc: FeatureCollectionDoc = serde_json::from_str(document)?;
    let mut features = Vec::with_capacity(doc.features.len());

    for raw in doc.features {
        let name = string_property(&raw.properties, &keys.name);
        let external_id = string_property(&raw.properties, &keys.external_id);
        let geometry = match raw.geometry {
            Some(g) => extract_geometry(&g),
            None => Geometry::empty(),
        };

        if !geometry.is_well_formed() {
            warn!(name = %name, "catalog feature has unusable geometry");
        }
        features.push(Feature::new(name, external_id, geometry));
    }

    debug!(count = features.len(), "parsed catalog features");
    Ok(features)
}

/// Load and parse a GeoJSON catalog file.
pub fn load_geojson_file(
    path: impl AsRef<Path>,
    keys: &CatalogKeys,
) -> Result<Vec<Feature>, CatalogError> {
    let document = fs::read_to_string(path)?;
    parse_geojson(&document, keys)
}

fn string_property(properties: &serde_json::Map<String, Value>, key: &str) -> String {
    match properties.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) if !other.is_null() => other.to_string(),
        _ => String::new(),
    }
}

/// Extract polygon rings from a geometry object.
///
/// `Polygon` coordinates are used as-is; for `MultiPolygon` the first
/// polygon's rings are taken, since only the outer ring's first
/// vertex matters downstream. Anything unreadable becomes an empty
/// geometry rather than a load failure.
fn extract_geometry(doc: &GeometryDoc) -> Geometry {
    let polygon = match doc.kind.as_str() {
        "Polygon" => Some(&doc.coordinates),
        "MultiPolygon" => doc.coordinates.get(0),
        _ => None,
    };
    let Some(polygon) = polygon else {
        return Geometry::empty();
    };

    match rings_from_value(polygon) {
        Some(rings) => Geometry::new(rings),
        None => Geometry::empty(),
    }
}

fn rings_from_value(value: &Value) -> Option<Vec<Vec<Vec<f64>>>> {
    let rings = value.as_array()?;
    let mut out = Vec::with_capacity(rings.len());
    for ring in rings {
        let vertices = ring.as_array()?;
        let mut ring_out = Vec::with_capacity(vertices.len());
        for vertex in vertices {
            let components = vertex.as_array()?;
            let mut vertex_out = Vec::with_capacity(components.len());
            for component in components {
                vertex_out.push(component.as_f64()?);
            }
            ring_out.push(vertex_out);
        }
        out.push(ring_out);
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_keys() -> CatalogKeys {
        CatalogKeys::default()
    }

    #[test]
    fn test_parses_polygon_feature() {
        let doc = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"NAME_3": "Lahore", "GID_3": "PAK.7.2.4_1"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[74.35, 31.55], [74.4, 31.6], [74.35, 31.55]]]
                }
            }]
        }"#;

        let features = parse_geojson(doc, &default_keys()).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].name, "Lahore");
        assert_eq!(features[0].external_id, "PAK.7.2.4_1");
        assert_eq!(
            features[0].geometry.first_vertex(),
            Some([74.35, 31.55].as_slice())
        );
    }

    #[test]
    fn test_multipolygon_uses_first_polygon() {
        let doc = r#"{
            "features": [{
                "properties": {"NAME_3": "Gwadar", "GID_3": "PAK.2.4.1_1"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [
                        [[[62.3, 25.1], [62.4, 25.2]]],
                        [[[63.0, 25.5], [63.1, 25.6]]]
                    ]
                }
            }]
        }"#;

        let features = parse_geojson(doc, &default_keys()).unwrap();
        assert_eq!(
            features[0].geometry.first_vertex(),
            Some([62.3, 25.1].as_slice())
        );
    }

    #[test]
    fn test_null_coordinates_survive_as_empty_geometry() {
        let doc = r#"{
            "features": [{
                "properties": {"NAME_3": "Broken", "GID_3": "X"},
                "geometry": {"type": "Polygon", "coordinates": null}
            }]
        }"#;

        let features = parse_geojson(doc, &default_keys()).unwrap();
        assert_eq!(features.len(), 1);
        assert!(!features[0].geometry.is_well_formed());
    }

    #[test]
    fn test_missing_geometry_survives_as_empty_geometry() {
        let doc = r#"{"features": [{"properties": {"NAME_3": "NoShape"}}]}"#;

        let features = parse_geojson(doc, &default_keys()).unwrap();
        assert_eq!(features[0].name, "NoShape");
        assert!(!features[0].geometry.is_well_formed());
    }

    #[test]
    fn test_missing_properties_default_to_empty_strings() {
        let doc = r#"{
            "features": [{
                "properties": {},
                "geometry": {"type": "Polygon", "coordinates": [[[1.0, 2.0]]]}
            }]
        }"#;

        let features = parse_geojson(doc, &default_keys()).unwrap();
        assert_eq!(features[0].name, "");
        assert_eq!(features[0].external_id, "");
    }

    #[test]
    fn test_custom_property_keys() {
        let doc = r#"{
            "features": [{
                "properties": {"name": "Quetta", "id": "Q1"},
                "geometry": {"type": "Polygon", "coordinates": [[[66.9, 30.2]]]}
            }]
        }"#;

        let keys = CatalogKeys::new("name", "id");
        let features = parse_geojson(doc, &keys).unwrap();
        assert_eq!(features[0].name, "Quetta");
        assert_eq!(features[0].external_id, "Q1");
    }

    #[test]
    fn test_catalog_order_is_document_order() {
        let doc = r#"{
            "features": [
                {"properties": {"NAME_3": "First"}, "geometry": {"type": "Polygon", "coordinates": [[[1.0, 1.0]]]}},
                {"properties": {"NAME_3": "Second"}, "geometry": {"type": "Polygon", "coordinates": [[[2.0, 2.0]]]}}
            ]
        }"#;

        let features = parse_geojson(doc, &default_keys()).unwrap();
        assert_eq!(features[0].name, "First");
        assert_eq!(features[1].name, "Second");
    }

    #[test]
    fn test_invalid_json_is_a_parse_error() {
        let result = parse_geojson("not json at all", &default_keys());
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }
}
