//! Regions command - list the selectable region names.

use regionlayer::catalog::FeatureCatalog;

/// Print every valid region name in catalog order.
///
/// This is exactly the set of names the selection dropdown offered:
/// features with unusable geometry are omitted.
pub fn run(catalog: &FeatureCatalog) {
    let mut count = 0;
    for feature in catalog.valid_features() {
        println!("{}", feature.name);
        count += 1;
    }
    eprintln!("{} selectable regions ({} features in catalog)", count, catalog.len());
}
