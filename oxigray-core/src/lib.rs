//! # OxiGray Core
//!
//! Core components for the OxiGray grayscale codec library.
//!
//! This crate provides the building blocks shared by the codec and the CLI:
//!
//! - [`raster`]: Fixed-dimension grayscale pixel raster with row-major order
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! OxiGray is a small layered stack:
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ CLI driver                                  │
//! │     image file <-> raster, ratio reporting  │
//! ├─────────────────────────────────────────────┤
//! │ Codec (oxigray-lzw)                         │
//! │     LZW encoder/decoder over symbol slices  │
//! ├─────────────────────────────────────────────┤
//! │ Raster (this crate)                         │
//! │     GrayRaster, row-major flatten, errors   │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxigray_core::GrayRaster;
//!
//! let mut raster = GrayRaster::new(2, 3);
//! raster.set(0, 2, 128).unwrap();
//! assert_eq!(raster.width(), 3);
//! assert_eq!(raster.pixels(), &[0, 0, 128, 0, 0, 0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod raster;

// Re-exports for convenience
pub use error::{RasterError, Result};
pub use raster::GrayRaster;
