//! Grayscale pixel raster.
//!
//! [`GrayRaster`] owns a fixed-dimension 2-D grid of grayscale cells and
//! defines the row-major linearization that the codec operates on.

use crate::error::{RasterError, Result};

/// A fixed-dimension grayscale pixel raster.
///
/// Cells are stored row-major as `u16`. A grayscale symbol is a value in
/// `0..=255`; the wider cell type exists so that [`fill`](Self::fill) and
/// [`set`](Self::set) can store out-of-range values verbatim without
/// validation. Range enforcement is the codec's job, at the point where
/// cells become symbols.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayRaster {
    /// Number of rows (height).
    rows: usize,
    /// Number of columns (width).
    cols: usize,
    /// Row-major cell storage, `rows * cols` long.
    cells: Vec<u16>,
}

impl GrayRaster {
    /// Create a raster with all cells set to 0.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Reshape a flat row-major symbol sequence into a raster.
    ///
    /// Fails with [`RasterError::SizeMismatch`] unless
    /// `symbols.len() == rows * cols`.
    pub fn from_symbols(rows: usize, cols: usize, symbols: &[u8]) -> Result<Self> {
        if symbols.len() != rows * cols {
            return Err(RasterError::size_mismatch(rows * cols, symbols.len()));
        }
        Ok(Self {
            rows,
            cols,
            cells: symbols.iter().map(|&s| u16::from(s)).collect(),
        })
    }

    /// Width of the raster (number of columns).
    pub fn width(&self) -> usize {
        self.cols
    }

    /// Height of the raster (number of rows).
    pub fn height(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the raster has zero cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Set every cell to `value`.
    ///
    /// No range validation: values above 255 are stored as-is and will be
    /// rejected later by the encoder.
    pub fn fill(&mut self, value: u16) {
        self.cells.fill(value);
    }

    /// Get the cell at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<u16> {
        let index = self.index_of(row, col)?;
        Ok(self.cells[index])
    }

    /// Set the cell at `(row, col)` to `value`.
    ///
    /// Like [`fill`](Self::fill), accepts any `u16` without range checks.
    pub fn set(&mut self, row: usize, col: usize, value: u16) -> Result<()> {
        let index = self.index_of(row, col)?;
        self.cells[index] = value;
        Ok(())
    }

    /// Row-major cell slice, the canonical linearization for the codec.
    pub fn pixels(&self) -> &[u16] {
        &self.cells
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(RasterError::out_of_bounds(row, col, self.rows, self.cols));
        }
        Ok(row * self.cols + col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_zeroed() {
        let raster = GrayRaster::new(3, 5);
        assert_eq!(raster.height(), 3);
        assert_eq!(raster.width(), 5);
        assert_eq!(raster.len(), 15);
        assert!(raster.pixels().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_get_set() {
        let mut raster = GrayRaster::new(2, 2);
        raster.set(1, 0, 200).unwrap();
        assert_eq!(raster.get(1, 0).unwrap(), 200);
        assert_eq!(raster.get(0, 0).unwrap(), 0);

        // Row-major: (1, 0) is index 2
        assert_eq!(raster.pixels(), &[0, 0, 200, 0]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut raster = GrayRaster::new(4, 4);
        assert!(matches!(
            raster.get(4, 0),
            Err(RasterError::OutOfBounds { row: 4, .. })
        ));
        assert!(matches!(
            raster.set(0, 7, 1),
            Err(RasterError::OutOfBounds { col: 7, .. })
        ));
    }

    #[test]
    fn test_fill_keeps_dimensions() {
        let mut raster = GrayRaster::new(4, 6);
        raster.fill(7);
        assert_eq!(raster.height(), 4);
        assert_eq!(raster.width(), 6);
        assert!(raster.pixels().iter().all(|&c| c == 7));

        // Out-of-range values are stored verbatim
        raster.fill(1000);
        assert_eq!(raster.get(0, 0).unwrap(), 1000);
        assert_eq!(raster.height(), 4);
        assert_eq!(raster.width(), 6);
    }

    #[test]
    fn test_from_symbols() {
        let raster = GrayRaster::from_symbols(2, 3, &[1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(raster.get(0, 2).unwrap(), 3);
        assert_eq!(raster.get(1, 0).unwrap(), 4);
    }

    #[test]
    fn test_from_symbols_size_mismatch() {
        let err = GrayRaster::from_symbols(2, 3, &[1, 2, 3]).unwrap_err();
        assert!(matches!(
            err,
            RasterError::SizeMismatch {
                expected: 6,
                actual: 3
            }
        ));
    }
}
