//! Error types for the selection engine.

use thiserror::Error;

/// Recoverable failures of a selection command.
///
/// Neither variant escapes the command boundary; the engine captures
/// the latest failure as state and the render surface shows its
/// message verbatim until the next successful selection clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// The requested name matched no valid catalog feature.
    #[error("Selected region not found.")]
    RegionNotFound,

    /// The matched feature's geometry yields no display coordinate.
    #[error("Coordinates not found for the selected region.")]
    CoordinatesUnavailable,
}
