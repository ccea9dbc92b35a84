//! # OxiGray-LZW: Pure Rust LZW Compression for Grayscale Rasters
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! over grayscale symbol sequences.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Fixed-width codes**: Codes are plain `u32` values, no bit packing
//! - **Unbounded dictionary**: No 12-bit cap, no clear codes, no resets
//! - **Single-call dictionaries**: Each encode/decode call owns its own
//!   freshly seeded dictionary, so calls can never contaminate each other
//!
//! ## Dialect
//!
//! This is deliberately not the TIFF or GIF wire dialect:
//!
//! - Codes 0-255 are the seeded single-symbol phrases; 256 and up are
//!   assigned to discovered phrases in order, with no reserved clear/EOI
//!   codes
//! - The code sequence is an in-process artifact, not a packed bitstream
//! - Dictionary growth is unbounded; a width cap or reset policy would be
//!   an extension, not implied by current behavior
//!
//! ## Example
//!
//! ```rust
//! use oxigray_core::GrayRaster;
//! use oxigray_lzw::{compress, decompress};
//!
//! let mut raster = GrayRaster::new(4, 4);
//! raster.fill(7);
//!
//! // Compress the row-major symbol sequence
//! let codes = compress(&raster).unwrap();
//! assert!(codes.len() < raster.len());
//!
//! // Decompress and reshape with the known dimensions
//! let symbols = decompress(&codes).unwrap();
//! let restored = GrayRaster::from_symbols(4, 4, &symbols).unwrap();
//! assert_eq!(restored, raster);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use decoder::LzwDecoder;
pub use dictionary::{ALPHABET_SIZE, LzwDictionary};
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};

use oxigray_core::GrayRaster;

/// Compress a raster's row-major symbol sequence with LZW.
///
/// # Returns
///
/// The code sequence, at most one code per input cell.
///
/// # Example
///
/// ```rust
/// use oxigray_core::GrayRaster;
/// use oxigray_lzw::compress;
///
/// let mut raster = GrayRaster::new(2, 8);
/// raster.fill(200);
/// let codes = compress(&raster).unwrap();
/// assert!(codes.len() < 16);
/// ```
pub fn compress(raster: &GrayRaster) -> Result<Vec<u32>> {
    let mut encoder = LzwEncoder::new();
    encoder.encode(raster.pixels())
}

/// Decompress an LZW code sequence into the flat symbol sequence.
///
/// The caller reshapes the result into a raster of known dimensions with
/// [`GrayRaster::from_symbols`].
///
/// # Example
///
/// ```rust
/// use oxigray_core::GrayRaster;
/// use oxigray_lzw::{compress, decompress};
///
/// let raster = GrayRaster::from_symbols(1, 4, &[9, 9, 9, 9]).unwrap();
/// let codes = compress(&raster).unwrap();
/// let symbols = decompress(&codes).unwrap();
/// assert_eq!(symbols, vec![9, 9, 9, 9]);
/// ```
pub fn decompress(codes: &[u32]) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new();
    decoder.decode(codes)
}
