//! Feature catalog — the immutable collection of region features.
//!
//! Loaded once at session start and never mutated afterwards. The
//! catalog preserves document order, which is load-bearing: name
//! lookup is first-match-wins, so duplicate names (a data-quality
//! defect in some datasets) resolve deterministically.

mod feature;
mod keys;
mod loader;

pub use feature::{Feature, Geometry};
pub use keys::{CatalogKeys, DEFAULT_ID_KEY, DEFAULT_NAME_KEY};
pub use loader::CatalogError;

use std::path::Path;

/// The immutable, ordered collection of region features.
#[derive(Debug, Clone, Default)]
pub struct FeatureCatalog {
    features: Vec<Feature>,
}

impl FeatureCatalog {
    /// Build a catalog from already-constructed features.
    pub fn from_features(features: Vec<Feature>) -> Self {
        Self { features }
    }

    /// Parse a catalog from a GeoJSON FeatureCollection string.
    pub fn from_geojson_str(document: &str, keys: &CatalogKeys) -> Result<Self, CatalogError> {
        Ok(Self::from_features(loader::parse_geojson(document, keys)?))
    }

    /// Load a catalog from a GeoJSON file on disk.
    pub fn from_geojson_file(
        path: impl AsRef<Path>,
        keys: &CatalogKeys,
    ) -> Result<Self, CatalogError> {
        Ok(Self::from_features(loader::load_geojson_file(path, keys)?))
    }

    /// All features in catalog order, including malformed ones.
    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    /// The valid subset: features whose geometry can yield a display
    /// coordinate, in catalog order.
    ///
    /// Malformed features are invisible to lookup, as if they did not
    /// exist. Recomputed per call; the catalog is immutable, so
    /// callers may cache the result if they care.
    pub fn valid_features(&self) -> impl Iterator<Item = &Feature> {
        self.features.iter().filter(|f| f.geometry.is_well_formed())
    }

    /// First valid feature whose name matches `name` byte-exactly.
    ///
    /// First match in catalog order wins when names are duplicated.
    pub fn find_valid(&self, name: &str) -> Option<&Feature> {
        self.valid_features().find(|f| f.name == name)
    }

    /// Total number of features, valid or not.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    /// Whether the catalog holds no features at all.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid(name: &str, lon: f64, lat: f64) -> Feature {
        Feature::new(name, format!("{name}-id"), Geometry::new(vec![vec![vec![lon, lat]]]))
    }

    fn malformed(name: &str) -> Feature {
        Feature::new(name, format!("{name}-id"), Geometry::empty())
    }

    #[test]
    fn test_valid_subset_excludes_malformed_features() {
        let catalog = FeatureCatalog::from_features(vec![
            valid("Lahore", 74.35, 31.55),
            malformed("Ghost"),
            valid("Multan", 71.45, 30.2),
        ]);

        let names: Vec<_> = catalog.valid_features().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Lahore", "Multan"]);
    }

    #[test]
    fn test_find_valid_skips_malformed_features() {
        let catalog = FeatureCatalog::from_features(vec![malformed("Ghost")]);
        assert!(catalog.find_valid("Ghost").is_none());
    }

    #[test]
    fn test_find_valid_is_case_sensitive() {
        let catalog = FeatureCatalog::from_features(vec![valid("Lahore", 74.35, 31.55)]);
        assert!(catalog.find_valid("Lahore").is_some());
        assert!(catalog.find_valid("lahore").is_none());
    }

    #[test]
    fn test_find_valid_first_match_wins_under_duplicate_names() {
        let catalog = FeatureCatalog::from_features(vec![
            valid("Ravi", 74.0, 31.0),
            valid("Ravi", 75.0, 32.0),
        ]);

        let found = catalog.find_valid("Ravi").unwrap();
        assert_eq!(found.geometry.first_vertex(), Some([74.0, 31.0].as_slice()));
    }

    #[test]
    fn test_malformed_duplicate_does_not_shadow_valid_one() {
        // A malformed feature earlier in catalog order is invisible,
        // so the later valid one with the same name is found.
        let catalog = FeatureCatalog::from_features(vec![
            malformed("Ravi"),
            valid("Ravi", 75.0, 32.0),
        ]);

        let found = catalog.find_valid("Ravi").unwrap();
        assert_eq!(found.geometry.first_vertex(), Some([75.0, 32.0].as_slice()));
    }

    #[test]
    fn test_len_counts_all_features() {
        let catalog =
            FeatureCatalog::from_features(vec![valid("A", 1.0, 1.0), malformed("B")]);
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(FeatureCatalog::default().is_empty());
    }
}
