//! Error types for gridform library.

use thiserror::Error;

/// Result type alias for gridform operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which coordinate axis a boundary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal boundaries (column starts, X coordinates).
    Column,
    /// Vertical boundaries (row starts, Y coordinates).
    Row,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Column => write!(f, "column"),
            Axis::Row => write!(f, "row"),
        }
    }
}

/// Error types that can occur while building a table grid.
///
/// Ordinary data-quality conditions (degenerate shapes, overlapping cells,
/// too little structure for a table) are not errors; see
/// [`Diagnostics`](crate::Diagnostics) and the `Option`-wrapped table in
/// [`BuildOutcome`](crate::BuildOutcome). Only invariant violations and
/// invalid configuration surface here.
#[derive(Error, Debug)]
pub enum Error {
    /// A shape edge that contributed a boundary could not be located again
    /// during grid mapping. This indicates an internal inconsistency (for
    /// example a tolerance mismatch between extraction and mapping) and is
    /// never absorbed.
    #[error("no {axis} boundary found for coordinate {coordinate}")]
    BoundaryNotFound {
        /// Axis on which the lookup failed.
        axis: Axis,
        /// The shape edge coordinate that had no matching boundary.
        coordinate: f64,
    },

    /// The configured tolerance is not a finite, non-negative number.
    #[error("invalid tolerance: {0}")]
    InvalidTolerance(f64),
}
