//! RegionLayer CLI - command-line shell for the selection engine.
//!
//! Loads a GeoJSON catalog of administrative regions and drives the
//! selection engine, rendering highlight state as text.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use regionlayer::catalog::{CatalogKeys, FeatureCatalog, DEFAULT_ID_KEY, DEFAULT_NAME_KEY};
use regionlayer::logging::{init_logging, DEFAULT_LOG_DIR, DEFAULT_LOG_FILE};

mod commands;
mod error;
mod render;

use error::CliError;

#[derive(Parser)]
#[command(name = "regionlayer")]
#[command(version = regionlayer::VERSION)]
#[command(about = "Select and highlight administrative regions from a GeoJSON catalog", long_about = None)]
struct Cli {
    /// Path to the GeoJSON FeatureCollection catalog
    #[arg(long)]
    catalog: PathBuf,

    /// Property holding each feature's region name
    #[arg(long, default_value = DEFAULT_NAME_KEY)]
    name_key: String,

    /// Property holding each feature's external identifier
    #[arg(long, default_value = DEFAULT_ID_KEY)]
    id_key: String,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the selectable region names
    Regions,
    /// Select one or more regions by name, then render the result
    Select {
        /// Region name to select; repeat to select several in order
        #[arg(long = "name", required = true)]
        names: Vec<String>,
    },
    /// Interactively select regions, one name per line
    Session,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let filter = cli.debug.then_some("debug");
    let _logging_guard = init_logging(DEFAULT_LOG_DIR, DEFAULT_LOG_FILE, filter)
        .map_err(CliError::LoggingInit)?;

    let keys = CatalogKeys::new(&cli.name_key, &cli.id_key);
    let catalog = FeatureCatalog::from_geojson_file(&cli.catalog, &keys)?;
    info!(
        path = %cli.catalog.display(),
        features = catalog.len(),
        valid = catalog.valid_features().count(),
        "catalog loaded"
    );

    match cli.command {
        Command::Regions => commands::regions::run(&catalog),
        Command::Select { names } => commands::select::run(&catalog, &names),
        Command::Session => commands::session::run(&catalog)?,
    }

    Ok(())
}
