//! LZW-specific error types.

use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// Input cell value outside the seeded single-symbol alphabet (0-255).
    #[error("Invalid symbol: {0} (grayscale symbols are 0-255)")]
    InvalidSymbol(u16),

    /// Decoder received an empty code sequence.
    #[error("Empty code stream: decoding requires at least one code")]
    EmptyStream,

    /// Code is neither a dictionary entry nor the next code to be assigned.
    #[error("Invalid LZW code: {0}")]
    InvalidCode(u32),
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
