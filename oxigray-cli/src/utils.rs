//! Utility functions for the CLI.

use image::{GrayImage, ImageError};
use oxigray_core::GrayRaster;
use serde::Serialize;
use std::path::Path;

/// Compression statistics for one image, serializable for `--json` output.
#[derive(Debug, Serialize)]
pub struct RatioReport {
    /// Source image path.
    pub file: String,
    /// Raster width in pixels.
    pub width: usize,
    /// Raster height in pixels.
    pub height: usize,
    /// Total cell count.
    pub pixels: usize,
    /// Emitted LZW code count.
    pub codes: usize,
    /// Code count as a percentage of the cell count, two decimals.
    pub ratio_percent: f64,
}

/// Load an image file as a grayscale raster.
///
/// Any input format the `image` crate can open is accepted; color images
/// are converted to 8-bit luma first. Loader failures (missing file,
/// unsupported format) propagate unchanged.
pub fn load_gray(path: &Path) -> Result<GrayRaster, ImageError> {
    let img = image::open(path)?.into_luma8();
    let (width, height) = img.dimensions();
    let raster = GrayRaster::from_symbols(height as usize, width as usize, img.as_raw())
        .expect("luma8 buffer length matches its dimensions");
    Ok(raster)
}

/// Write a raster to an image file, format chosen by extension.
///
/// Cells are clamped to the 0-255 symbol range; a raster that has been
/// through the codec only holds in-range values.
pub fn save_gray(raster: &GrayRaster, path: &Path) -> Result<(), ImageError> {
    let bytes: Vec<u8> = raster.pixels().iter().map(|&c| c.min(255) as u8).collect();
    let img = GrayImage::from_raw(raster.width() as u32, raster.height() as u32, bytes)
        .expect("pixel buffer length matches raster dimensions");
    img.save(path)
}

/// Compression ratio as a percentage of the original cell count,
/// rounded to two decimals.
pub fn compression_ratio(code_count: usize, pixel_count: usize) -> f64 {
    let percent = code_count as f64 / pixel_count as f64 * 100.0;
    (percent * 100.0).round() / 100.0
}
