//! OxiGray CLI - grayscale LZW compression driver
//!
//! A Pure Rust driver wiring an image file through the LZW codec:
//! image file -> grayscale raster -> encode -> decode -> reshape -> image file.

mod utils;

use clap::{Parser, Subcommand};
use log::info;
use oxigray_core::GrayRaster;
use oxigray_lzw::{compress, decompress};
use std::path::{Path, PathBuf};
use utils::{RatioReport, compression_ratio, load_gray, save_gray};

#[derive(Parser)]
#[command(name = "oxigray")]
#[command(
    author,
    version,
    about = "Grayscale LZW compression - Pure Rust image codec driver"
)]
#[command(long_about = "
OxiGray runs a grayscale image through a fixed-width LZW codec.

The codec keeps the compressed code sequence in memory only: roundtrip
verifies that decoding reproduces the image exactly, ratio reports how
many codes the encoder needed relative to the pixel count.

Examples:
  oxigray ratio photo.png
  oxigray ratio photo.jpg --json
  oxigray roundtrip photo.png
  oxigray roundtrip photo.png -o restored.png
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the compression ratio for an image
    #[command(alias = "r")]
    Ratio {
        /// Image file to compress
        image: PathBuf,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Encode, decode, verify, and write the reconstructed image
    #[command(alias = "rt")]
    Roundtrip {
        /// Image file to run through the codec
        image: PathBuf,

        /// Output path for the reconstructed image
        /// (default: <stem>_roundtrip.png next to the input)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Ratio { image, json } => cmd_ratio(&image, json),
        Commands::Roundtrip { image, output } => cmd_roundtrip(&image, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn cmd_ratio(image: &Path, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let raster = load_gray(image)?;
    info!(
        "loaded {} as {}x{} grayscale",
        image.display(),
        raster.width(),
        raster.height()
    );

    let codes = compress(&raster)?;
    let ratio = compression_ratio(codes.len(), raster.len());

    if json {
        let report = RatioReport {
            file: image.display().to_string(),
            width: raster.width(),
            height: raster.height(),
            pixels: raster.len(),
            codes: codes.len(),
            ratio_percent: ratio,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Image: {}", image.display());
    println!("Dimensions: {}x{}", raster.width(), raster.height());
    println!("Pixels: {}", raster.len());
    println!("Codes: {}", codes.len());
    println!("Compression ratio: {:.2}%", ratio);

    Ok(())
}

fn cmd_roundtrip(image: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let raster = load_gray(image)?;
    info!(
        "loaded {} as {}x{} grayscale",
        image.display(),
        raster.width(),
        raster.height()
    );

    let codes = compress(&raster)?;
    let symbols = decompress(&codes)?;
    let restored = GrayRaster::from_symbols(raster.height(), raster.width(), &symbols)?;

    if restored != raster {
        return Err("round trip mismatch: decoded raster differs from input".into());
    }

    let output = match output {
        Some(path) => path.to_path_buf(),
        None => default_output_path(image),
    };
    save_gray(&restored, &output)?;

    println!("Image: {}", image.display());
    println!("Dimensions: {}x{}", raster.width(), raster.height());
    println!(
        "Compression ratio: {:.2}%",
        compression_ratio(codes.len(), raster.len())
    );
    println!("Round trip: OK ({} pixels verified)", raster.len());
    println!("Reconstructed image written to {}", output.display());

    Ok(())
}

/// Default reconstruction path: `<stem>_roundtrip.png` next to the input.
fn default_output_path(image: &Path) -> PathBuf {
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    image.with_file_name(format!("{}_roundtrip.png", stem))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_path() {
        let out = default_output_path(Path::new("shots/photo.jpg"));
        assert_eq!(out, Path::new("shots/photo_roundtrip.png"));
    }
}
