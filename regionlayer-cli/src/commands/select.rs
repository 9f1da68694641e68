//! Select command - apply selections in order and render one pass.

use regionlayer::catalog::FeatureCatalog;
use regionlayer::engine::SelectionEngine;

use crate::render;

/// Select each name in order, then render the resulting state.
///
/// Failed selections do not abort the run; like the interactive UI,
/// only the latest error remains visible in the rendered pass.
pub fn run(catalog: &FeatureCatalog, names: &[String]) {
    let mut engine = SelectionEngine::new(catalog);
    for name in names {
        engine.select_region(name);
    }

    render::render_viewport();
    render::render_pass(&engine);
}
