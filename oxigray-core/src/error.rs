//! Error types for raster operations.

use thiserror::Error;

/// The error type for raster operations.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Cell access outside the raster's declared dimensions.
    #[error("Cell ({row}, {col}) out of bounds for {rows}x{cols} raster")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Number of rows in the raster.
        rows: usize,
        /// Number of columns in the raster.
        cols: usize,
    },

    /// Flat symbol sequence does not match the target dimensions.
    #[error("Size mismatch: expected {expected} symbols, got {actual}")]
    SizeMismatch {
        /// Cell count implied by the target dimensions.
        expected: usize,
        /// Length of the supplied symbol sequence.
        actual: usize,
    },
}

/// Result type alias for raster operations.
pub type Result<T> = std::result::Result<T, RasterError>;

impl RasterError {
    /// Create an out-of-bounds error.
    pub fn out_of_bounds(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self::OutOfBounds {
            row,
            col,
            rows,
            cols,
        }
    }

    /// Create a size mismatch error.
    pub fn size_mismatch(expected: usize, actual: usize) -> Self {
        Self::SizeMismatch { expected, actual }
    }
}
