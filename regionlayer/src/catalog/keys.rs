//! Property keys used to read feature metadata from catalog documents.

/// GADM level-3 name property, the default name key.
pub const DEFAULT_NAME_KEY: &str = "NAME_3";

/// GADM level-3 identifier property, the default external-id key.
pub const DEFAULT_ID_KEY: &str = "GID_3";

/// Which GeoJSON properties supply a feature's name and external id.
///
/// Defaults match the GADM administrative level-3 dataset the map was
/// built around; other datasets can override both keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogKeys {
    /// Property holding the human-readable region name.
    pub name: String,
    /// Property holding the opaque upstream identifier.
    pub external_id: String,
}

impl CatalogKeys {
    /// Create keys for a dataset with custom property names.
    pub fn new(name: impl Into<String>, external_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            external_id: external_id.into(),
        }
    }
}

impl Default for CatalogKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAME_KEY, DEFAULT_ID_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys_are_gadm_level_3() {
        let keys = CatalogKeys::default();
        assert_eq!(keys.name, "NAME_3");
        assert_eq!(keys.external_id, "GID_3");
    }

    #[test]
    fn test_custom_keys() {
        let keys = CatalogKeys::new("name", "osm_id");
        assert_eq!(keys.name, "name");
        assert_eq!(keys.external_id, "osm_id");
    }
}
