//! LZW encoder (compression).

use crate::dictionary::LzwDictionary;
use crate::error::{LzwError, Result};
use log::debug;

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    /// Dictionary for phrase lookup.
    dict: LzwDictionary,
}

impl LzwEncoder {
    /// Create a new LZW encoder with a freshly seeded dictionary.
    pub fn new() -> Self {
        Self {
            dict: LzwDictionary::new(),
        }
    }

    /// Encode a row-major symbol sequence with LZW compression.
    ///
    /// # Algorithm
    ///
    /// The LZW encoding algorithm:
    /// 1. Initialize dictionary with single-symbol codes (0-255)
    /// 2. Read input symbol by symbol
    /// 3. Build longest matching phrase in dictionary
    /// 4. Output code for that phrase
    /// 5. Add phrase + next symbol to dictionary
    /// 6. Repeat until all input processed
    ///
    /// Codes are emitted as plain `u32` values, one per output element;
    /// there is no bit packing and no code-width limit.
    ///
    /// # Errors
    ///
    /// Fails with [`LzwError::InvalidSymbol`] on any cell value above 255,
    /// since the seeded single-symbol alphabet cannot map it.
    pub fn encode(&mut self, input: &[u16]) -> Result<Vec<u32>> {
        let mut output = Vec::new();

        // Current phrase being built
        let mut current: Vec<u8> = Vec::new();

        for &cell in input {
            let symbol = u8::try_from(cell).map_err(|_| LzwError::InvalidSymbol(cell))?;

            // Try to extend the current phrase
            let mut candidate = current.clone();
            candidate.push(symbol);

            if self.dict.find_code(&candidate).is_some() {
                // Phrase exists in dictionary - continue building
                current = candidate;
            } else {
                // Phrase not in dictionary
                // Output code for current phrase
                let code = self.dict.find_code(&current).expect(
                    "BUG: Current phrase should always exist in dictionary - it was either seeded or found in a previous iteration",
                );
                output.push(code);

                // Add the extended phrase to the dictionary
                self.dict.add_phrase(candidate);

                // Start a new phrase with the current symbol
                current.clear();
                current.push(symbol);
            }
        }

        // Output code for the final phrase
        if !current.is_empty() {
            let code = self.dict.find_code(&current).expect(
                "BUG: Final phrase should always exist in dictionary - it was built from valid dictionary entries",
            );
            output.push(code);
        }

        debug!(
            "lzw encode: {} symbols -> {} codes, dictionary size {}",
            input.len(),
            output.len(),
            self.dict.next_code()
        );

        Ok(output)
    }
}

impl Default for LzwEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::LzwDecoder;

    fn widen(bytes: &[u8]) -> Vec<u16> {
        bytes.iter().map(|&b| u16::from(b)).collect()
    }

    #[test]
    fn test_encode_simple() {
        let mut encoder = LzwEncoder::new();

        let original = b"TOBEORNOTTOBEORTOBEORNOT";
        let codes = encoder.encode(&widen(original)).unwrap();

        // Repetition means fewer codes than input symbols
        assert!(codes.len() < original.len());

        // Verify round-trip
        let mut decoder = LzwDecoder::new();
        let decoded = decoder.decode(&codes).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_empty() {
        let mut encoder = LzwEncoder::new();
        let codes = encoder.encode(&[]).unwrap();
        assert!(codes.is_empty());
    }

    #[test]
    fn test_encode_single_symbol() {
        let mut encoder = LzwEncoder::new();
        let codes = encoder.encode(&[65]).unwrap();
        assert_eq!(codes, vec![65]);
    }

    #[test]
    fn test_encode_repeating() {
        let mut encoder = LzwEncoder::new();

        let original = vec![7u16; 16];
        let codes = encoder.encode(&original).unwrap();

        // Runs collapse into progressively longer phrases: 7, 77, 777, ...
        assert!(codes.len() <= 6);
        assert_eq!(codes[0], 7);

        let mut decoder = LzwDecoder::new();
        let decoded = decoder.decode(&codes).unwrap();
        assert_eq!(decoded, vec![7u8; 16]);
    }

    #[test]
    fn test_encode_novel_symbols_do_not_compress() {
        let mut encoder = LzwEncoder::new();

        // No phrase ever repeats, so every code is a raw symbol code
        let original: Vec<u16> = (0..256).collect();
        let codes = encoder.encode(&original).unwrap();

        assert_eq!(codes.len(), 256);
        for (code, symbol) in codes.iter().zip(original.iter()) {
            assert_eq!(*code, u32::from(*symbol));
        }
    }

    #[test]
    fn test_encode_invalid_symbol() {
        let mut encoder = LzwEncoder::new();

        let err = encoder.encode(&[1, 2, 300, 4]).unwrap_err();
        assert!(matches!(err, LzwError::InvalidSymbol(300)));
    }

    #[test]
    fn test_encode_alternating() {
        let mut encoder = LzwEncoder::new();

        let original = b"ABABABABABABABABAB";
        let codes = encoder.encode(&widen(original)).unwrap();

        let mut decoder = LzwDecoder::new();
        let decoded = decoder.decode(&codes).unwrap();
        assert_eq!(decoded, original);
    }
}
