//! CLI error handling with user-friendly messages.

use std::fmt;
use std::io;
use std::process;

use regionlayer::catalog::CatalogError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging.
    LoggingInit(io::Error),
    /// Failed to load the catalog document.
    Catalog(CatalogError),
    /// Failed to read user input in an interactive session.
    Input(io::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        if let CliError::Catalog(_) = self {
            eprintln!();
            eprintln!("The catalog must be a GeoJSON FeatureCollection. If your");
            eprintln!("dataset uses property names other than NAME_3/GID_3, pass");
            eprintln!("--name-key and --id-key.");
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(e) => write!(f, "Failed to initialize logging: {}", e),
            CliError::Catalog(e) => write!(f, "Failed to load catalog: {}", e),
            CliError::Input(e) => write!(f, "Failed to read input: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::LoggingInit(e) => Some(e),
            CliError::Catalog(e) => Some(e),
            CliError::Input(e) => Some(e),
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(e: CatalogError) -> Self {
        CliError::Catalog(e)
    }
}
