//! Move-to-Front Transform.
//!
//! MTF replaces each byte with its position in a recency list of all 256
//! byte values, then moves that byte to the front of the list. Runs produced
//! by the BWT turn into runs of zeros.

use crate::ALPHABET_SIZE;
use log::debug;
use oxibwt_core::{ByteTransform, OxiBwtError, Result};

/// Recency-ordered list of every byte value.
///
/// Always a permutation of `0..=255`. Each encode or decode call owns a fresh
/// list in identity order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolList {
    symbols: [u8; ALPHABET_SIZE],
}

impl SymbolList {
    /// A list in identity order `[0, 1, ..., 255]`.
    pub fn new() -> Self {
        let mut symbols = [0u8; ALPHABET_SIZE];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            *symbol = i as u8;
        }
        Self { symbols }
    }

    /// Current position of `byte`.
    pub fn position(&self, byte: u8) -> u8 {
        // The list holds every byte value, so the scan always stops in range.
        let mut pos = 0;
        while self.symbols[pos] != byte {
            pos += 1;
        }
        pos as u8
    }

    /// Byte at `index`.
    pub fn get(&self, index: u8) -> u8 {
        self.symbols[index as usize]
    }

    /// Move the byte at `index` to the front, shifting the ones before it
    /// back by one. Returns the moved byte.
    pub fn promote(&mut self, index: u8) -> u8 {
        let index = index as usize;
        let byte = self.symbols[index];
        self.symbols.copy_within(0..index, 1);
        self.symbols[0] = byte;
        byte
    }

    /// The list in current order.
    pub fn as_slice(&self) -> &[u8] {
        &self.symbols
    }
}

impl Default for SymbolList {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform Move-to-Front encoding.
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut list = SymbolList::new();
    let result: Vec<u8> = data
        .iter()
        .map(|&byte| {
            let pos = list.position(byte);
            list.promote(pos);
            pos
        })
        .collect();

    debug!("mtf encode: {} bytes", result.len());
    result
}

/// Perform Move-to-Front decoding.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut list = SymbolList::new();
    let result: Vec<u8> = data.iter().map(|&pos| list.promote(pos)).collect();

    debug!("mtf decode: {} bytes", result.len());
    result
}

/// Decode a stream of wide symbol indices.
///
/// Every index must be below 256; the whole input is checked before
/// anything is decoded.
pub fn decode_indices(indices: &[u16]) -> Result<Vec<u8>> {
    let narrow = indices
        .iter()
        .map(|&index| {
            u8::try_from(index).map_err(|_| {
                OxiBwtError::out_of_range("symbol index", index as usize, ALPHABET_SIZE)
            })
        })
        .collect::<Result<Vec<u8>>>()?;
    Ok(decode(&narrow))
}

/// Move-to-Front as a pipeline stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct MoveToFront;

impl ByteTransform for MoveToFront {
    fn name(&self) -> &'static str {
        "mtf"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(encode(input))
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        Ok(decode(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mtf_empty() {
        assert!(encode(b"").is_empty());
        assert!(decode(b"").is_empty());
    }

    #[test]
    fn test_mtf_single() {
        let result = encode(b"a");
        assert_eq!(result, vec![b'a']); // 'a' is at position 97
    }

    #[test]
    fn test_mtf_known_vector() {
        assert_eq!(encode(b"AABA"), vec![65, 0, 66, 1]);
        assert_eq!(decode(&[65, 0, 66, 1]), b"AABA");
    }

    #[test]
    fn test_mtf_repeated() {
        // Repeated bytes should produce zeros after the first
        let result = encode(b"aaaa");
        assert_eq!(result, vec![b'a', 0, 0, 0]);
    }

    #[test]
    fn test_mtf_roundtrip() {
        let test_cases = [
            b"hello".as_slice(),
            b"banana",
            b"abracadabra",
            b"the quick brown fox",
            b"\xff\x00\xff\x00\x80",
        ];

        for data in test_cases {
            let transformed = encode(data);
            assert_eq!(transformed.len(), data.len());
            let recovered = decode(&transformed);
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_mtf_produces_low_values() {
        let data = b"bbbbbaaaacccc";
        let transformed = encode(data);

        let zeros = transformed.iter().filter(|&&b| b == 0).count();
        assert!(
            zeros > data.len() / 2,
            "MTF should produce many zeros for runs"
        );
    }

    #[test]
    fn test_symbol_list_stays_permutation() {
        let mut list = SymbolList::new();
        assert_eq!(list.position(200), 200);
        assert_eq!(list.promote(200), 200);
        assert_eq!(list.get(0), 200);
        assert_eq!(list.get(1), 0);
        assert_eq!(list.get(200), 199);
        assert_eq!(list.promote(255), 255);

        let mut seen = [false; ALPHABET_SIZE];
        for &byte in list.as_slice() {
            assert!(!seen[byte as usize], "duplicate {byte}");
            seen[byte as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_decode_indices() {
        assert_eq!(decode_indices(&[65, 0, 66, 1]).unwrap(), b"AABA");

        let err = decode_indices(&[1, 2, 256]).unwrap_err();
        assert!(matches!(
            err,
            OxiBwtError::OutOfRange {
                index: 256,
                len: 256,
                ..
            }
        ));
    }

    #[test]
    fn test_stage() {
        let stage = MoveToFront;
        let encoded = stage.forward(b"mississippi").unwrap();
        assert_eq!(stage.inverse(&encoded).unwrap(), b"mississippi");
        assert_eq!(stage.name(), "mtf");
    }
}
