//! LZW decoder (decompression).

use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use log::debug;

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    /// Dictionary for code lookup.
    dict: LzwDictionary,
}

impl LzwDecoder {
    /// Create a new LZW decoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Self {
            dict: LzwDictionary::new(),
        }
    }

    /// Decode an LZW code sequence into the flat symbol sequence.
    ///
    /// The decoder rebuilds the encoder's dictionary as it goes, lagging
    /// one entry behind. A code equal to `next_code` is the one phrase the
    /// encoder emitted exactly one step ahead of dictionary completion; its
    /// phrase is the previous phrase extended with its own first symbol.
    ///
    /// The output is flat: reshaping into a raster of known dimensions is
    /// the caller's step (`GrayRaster::from_symbols`), since the dimensions
    /// are not data the decoder intrinsically knows.
    ///
    /// # Errors
    ///
    /// - [`LzwError::EmptyStream`] if `codes` is empty.
    /// - [`LzwError::InvalidCode`] if the first code is not a seeded
    ///   single-symbol code, or any later code is neither a dictionary
    ///   entry nor equal to `next_code`.
    pub fn decode(&mut self, codes: &[u32]) -> Result<Vec<u8>> {
        let (&first, rest) = codes.split_first().ok_or(LzwError::EmptyStream)?;

        // The first code must be a seeded single-symbol code; the table
        // holds nothing else yet, so the lookup enforces that directly.
        let mut previous = self.dict.get_phrase(first)?.to_vec();

        let mut output = Vec::with_capacity(codes.len());
        output.extend_from_slice(&previous);

        for &code in rest {
            let phrase = if code < self.dict.next_code() {
                // Code exists in dictionary - this is the common case
                self.dict.get_phrase(code)?.to_vec()
            } else if code == self.dict.next_code() {
                // Special case: code not yet in dictionary
                // This happens for patterns like "ABABAB..."
                // The phrase is: previous + previous[0]
                let mut phrase = previous.clone();
                phrase.push(previous[0]);
                phrase
            } else {
                // Code is beyond next_code - the stream is invalid
                return Err(LzwError::InvalidCode(code));
            };

            output.extend_from_slice(&phrase);

            // Grow the dictionary: previous + phrase[0]
            let mut entry = previous;
            entry.push(phrase[0]);
            self.dict.add_phrase_decode(entry);

            previous = phrase;
        }

        debug!(
            "lzw decode: {} codes -> {} symbols, dictionary size {}",
            codes.len(),
            output.len(),
            self.dict.next_code()
        );

        Ok(output)
    }
}

impl Default for LzwDecoder {
    fn default() -> Self {
        Self::new()
    }
}
