//! Text render surface.
//!
//! Plays the role the Leaflet map played in the original UI: per
//! render pass it asks the engine for a style for every catalog
//! feature and for the marker list, and prints what a map would draw.
//! It reads engine state only through the query API and never mutates
//! it.

use regionlayer::coord::DisplayCoord;
use regionlayer::engine::SelectionEngine;

/// Initial map viewport center (roughly the centroid of Pakistan).
pub const MAP_CENTER: DisplayCoord = DisplayCoord {
    lat: 30.3753,
    lon: 69.3451,
};

/// Initial map viewport zoom level.
pub const MAP_ZOOM: u8 = 6;

/// Render one full pass of the current engine state to stdout.
pub fn render_pass(engine: &SelectionEngine<'_>) {
    if let Some(message) = engine.error_message() {
        println!("! {}", message);
    }

    if engine.selections().is_empty() {
        println!("No regions selected.");
        return;
    }

    println!("Selected regions:");
    for selection in engine.selections() {
        println!(
            "  {} [{}] {}",
            selection.feature.name, selection.feature.external_id, selection.color
        );
    }

    // One style query per catalog feature, exactly as a map layer
    // restyling every polygon would issue them.
    println!("Highlighted outlines:");
    for feature in engine.catalog().features() {
        let style = engine.style_for(feature);
        if let Some(color) = style.stroke_color {
            println!(
                "  {} stroke {} width {} fill transparent",
                feature.name, color, style.stroke_width
            );
        }
    }

    println!("Markers:");
    for marker in engine.markers() {
        println!("  ({}) {}", marker.position, marker.label);
    }
}

/// Print the viewport header shown once at session start.
pub fn render_viewport() {
    println!(
        "Map centered at ({}) zoom {}",
        MAP_CENTER, MAP_ZOOM
    );
}
