//! Session command - interactive selection loop.

use std::io::{self, BufRead, Write};

use regionlayer::catalog::FeatureCatalog;
use regionlayer::engine::SelectionEngine;

use crate::error::CliError;
use crate::render;

/// Run an interactive session reading one region name per line.
///
/// Each entered name goes through the same selection path a dropdown
/// pick or map click would; after every command the full state is
/// re-rendered. An empty line or EOF ends the session. Nothing is
/// persisted: the selection list lives and dies with the session.
pub fn run(catalog: &FeatureCatalog) -> Result<(), CliError> {
    let mut engine = SelectionEngine::new(catalog);

    render::render_viewport();
    println!("Enter a region name to select it; blank line to quit.");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("> ");
        io::stdout().flush().map_err(CliError::Input)?;

        let line = match lines.next() {
            Some(line) => line.map_err(CliError::Input)?,
            None => break,
        };
        let name = line.trim();
        if name.is_empty() {
            break;
        }

        engine.select_region(name);
        render::render_pass(&engine);
    }

    println!(
        "Session ended with {} selection(s).",
        engine.selections().len()
    );
    Ok(())
}
