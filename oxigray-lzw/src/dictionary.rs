//! LZW dictionary (code table) management.

use crate::error::{LzwError, Result};
use std::collections::HashMap;

/// The number of seeded single-symbol phrases.
pub const ALPHABET_SIZE: u32 = 256;

/// LZW dictionary for encoding and decoding.
///
/// The dictionary maintains a mapping between codes and phrases (symbol
/// sequences). For encoding, we also maintain a reverse mapping
/// (phrase -> code). Codes are dense: the table index is the code, and
/// `next_code` always equals the table length.
///
/// Growth is unbounded by design: there is no maximum code width, no table
/// reset, and no clear code. A dictionary lives for exactly one encode or
/// decode call.
#[derive(Debug)]
pub struct LzwDictionary {
    /// Code table: code -> phrase.
    table: Vec<Vec<u8>>,
    /// Reverse lookup: phrase -> code (for encoding only).
    reverse: HashMap<Vec<u8>, u32>,
}

impl LzwDictionary {
    /// Create a dictionary seeded with the 256 single-symbol phrases
    /// mapped to codes 0-255.
    pub fn new() -> Self {
        let mut table = Vec::with_capacity(ALPHABET_SIZE as usize);
        let mut reverse = HashMap::with_capacity(ALPHABET_SIZE as usize);
        for i in 0..ALPHABET_SIZE {
            let phrase = vec![i as u8];
            table.push(phrase.clone());
            reverse.insert(phrase, i);
        }
        Self { table, reverse }
    }

    /// Add a new phrase to the dictionary (for encoding).
    ///
    /// Returns the assigned code.
    pub fn add_phrase(&mut self, phrase: Vec<u8>) -> u32 {
        let code = self.next_code();
        self.table.push(phrase.clone());
        self.reverse.insert(phrase, code);
        code
    }

    /// Add a phrase to the dictionary (for decoding).
    ///
    /// Similar to `add_phrase` but doesn't update the reverse map, which
    /// the decoder never consults.
    pub fn add_phrase_decode(&mut self, phrase: Vec<u8>) -> u32 {
        let code = self.next_code();
        self.table.push(phrase);
        code
    }

    /// Get the phrase for a code.
    pub fn get_phrase(&self, code: u32) -> Result<&[u8]> {
        self.table
            .get(code as usize)
            .map(|v| v.as_slice())
            .ok_or(LzwError::InvalidCode(code))
    }

    /// Find the code for a phrase (for encoding).
    pub fn find_code(&self, phrase: &[u8]) -> Option<u32> {
        self.reverse.get(phrase).copied()
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> u32 {
        self.table.len() as u32
    }
}

impl Default for LzwDictionary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_init() {
        let dict = LzwDictionary::new();

        // Check seeded single-symbol codes
        for i in 0..256u32 {
            let phrase = dict.get_phrase(i).unwrap();
            assert_eq!(phrase, &[i as u8]);
        }

        assert_eq!(dict.next_code(), 256);
    }

    #[test]
    fn test_add_phrase() {
        let mut dict = LzwDictionary::new();

        let code = dict.add_phrase(vec![7, 7]);
        assert_eq!(code, 256);
        assert_eq!(dict.get_phrase(code).unwrap(), &[7, 7]);
        assert_eq!(dict.find_code(&[7, 7]), Some(256));
        assert_eq!(dict.next_code(), 257);
    }

    #[test]
    fn test_add_phrase_decode_skips_reverse() {
        let mut dict = LzwDictionary::new();

        let code = dict.add_phrase_decode(vec![1, 2]);
        assert_eq!(code, 256);
        assert_eq!(dict.get_phrase(code).unwrap(), &[1, 2]);
        assert_eq!(dict.find_code(&[1, 2]), None);
    }

    #[test]
    fn test_find_code() {
        let mut dict = LzwDictionary::new();

        // Seeded single-symbol phrases are findable
        assert_eq!(dict.find_code(&[65]), Some(65));

        let code = dict.add_phrase(vec![65, 66]);
        assert_eq!(dict.find_code(&[65, 66]), Some(code));

        assert_eq!(dict.find_code(&[65, 66, 67]), None);
    }

    #[test]
    fn test_unknown_code() {
        let dict = LzwDictionary::new();
        assert!(matches!(
            dict.get_phrase(999),
            Err(LzwError::InvalidCode(999))
        ));
    }
}
