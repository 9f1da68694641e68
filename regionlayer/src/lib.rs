//! RegionLayer — region selection and highlight-state engine.
//!
//! Renders nothing itself: the library resolves user-chosen region
//! names against an immutable GeoJSON-backed [`catalog`], maintains
//! the ordered, append-only list of colored selections, and answers a
//! render surface's two queries — a style per catalog feature and the
//! marker list.
//!
//! # Typical use
//!
//! ```
//! use regionlayer::catalog::{CatalogKeys, FeatureCatalog};
//! use regionlayer::engine::SelectionEngine;
//!
//! let document = r#"{
//!     "features": [{
//!         "properties": {"NAME_3": "Lahore", "GID_3": "PAK.7.2.4_1"},
//!         "geometry": {"type": "Polygon", "coordinates": [[[74.35, 31.55]]]}
//!     }]
//! }"#;
//!
//! let catalog = FeatureCatalog::from_geojson_str(document, &CatalogKeys::default())?;
//! let mut engine = SelectionEngine::new(&catalog);
//!
//! engine.select_region("Lahore");
//! assert_eq!(engine.markers().len(), 1);
//! # Ok::<(), regionlayer::catalog::CatalogError>(())
//! ```

pub mod catalog;
pub mod color;
pub mod coord;
pub mod engine;
pub mod logging;

/// Version of the regionlayer library and CLI.
///
/// Synchronized across the workspace and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
