//! Burrows-Wheeler Transform.
//!
//! The forward transform emits, for every rotation in sorted order, the byte
//! that circularly precedes it (the last column of the sorted rotation
//! matrix), plus the row at which the unrotated block sits. The inverse
//! rebuilds the block from those two alone.

use crate::ALPHABET_SIZE;
use crate::suffix::CircularSuffixArray;
use log::debug;
use oxibwt_core::{OxiBwtError, Result};

/// A transformed block: the last column of the sorted rotation matrix and
/// the row holding the original block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BwtBlock {
    pub(crate) first: u32,
    pub(crate) data: Vec<u8>,
}

impl BwtBlock {
    /// Wrap an already transformed block, checking that `first` names a row.
    pub fn new(first: u32, data: Vec<u8>) -> Result<Self> {
        if data.is_empty() {
            return Err(OxiBwtError::invalid_argument(
                "a transformed block cannot be empty",
            ));
        }
        if first as usize >= data.len() {
            return Err(OxiBwtError::out_of_range(
                "row index",
                first as usize,
                data.len(),
            ));
        }
        Ok(Self { first, data })
    }

    /// Row of the sorted matrix that holds the original block.
    pub fn first(&self) -> u32 {
        self.first
    }

    /// Transformed bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Block length.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always `false`; blocks are never empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Split into `(first, data)`.
    pub fn into_parts(self) -> (u32, Vec<u8>) {
        (self.first, self.data)
    }

    /// Reconstruct the original block.
    pub fn invert(&self) -> Result<Vec<u8>> {
        inverse_transform(self.first, &self.data)
    }
}

/// Perform the Burrows-Wheeler Transform.
///
/// Empty input is rejected.
pub fn transform(data: &[u8]) -> Result<BwtBlock> {
    if data.is_empty() {
        return Err(OxiBwtError::invalid_argument(
            "cannot transform an empty block",
        ));
    }
    let suffixes = CircularSuffixArray::new(data);
    transform_with_suffixes(data, &suffixes)
}

/// Perform the Burrows-Wheeler Transform using a precomputed suffix order.
///
/// `suffixes` must have been built from `data`.
pub fn transform_with_suffixes(data: &[u8], suffixes: &CircularSuffixArray) -> Result<BwtBlock> {
    let n = data.len();
    if n == 0 {
        return Err(OxiBwtError::invalid_argument(
            "cannot transform an empty block",
        ));
    }
    if suffixes.len() != n {
        return Err(OxiBwtError::invalid_argument(format!(
            "suffix order covers {} rotations but the block has {} bytes",
            suffixes.len(),
            n
        )));
    }

    let mut first = None;
    let mut last_column = Vec::with_capacity(n);
    for (row, start) in suffixes.iter().enumerate() {
        if start == 0 {
            first = Some(row);
        }
        last_column.push(data[(start + n - 1) % n]);
    }

    let first = first
        .ok_or_else(|| OxiBwtError::invalid_argument("suffix order has no rotation at 0"))?;
    let first = u32::try_from(first).map_err(|_| {
        OxiBwtError::invalid_argument(format!("block of {n} bytes exceeds the 32-bit row index"))
    })?;

    debug!("bwt forward: {n} bytes, first = {first}");
    Ok(BwtBlock {
        first,
        data: last_column,
    })
}

fn byte_counts(data: &[u8]) -> [usize; ALPHABET_SIZE] {
    let mut counts = [0usize; ALPHABET_SIZE];
    for &byte in data {
        counts[byte as usize] += 1;
    }
    counts
}

/// The first column of the sorted rotation matrix: `data` in ascending order.
pub fn first_column(data: &[u8]) -> Vec<u8> {
    let counts = byte_counts(data);
    let mut column = Vec::with_capacity(data.len());
    for (byte, &count) in counts.iter().enumerate() {
        column.resize(column.len() + count, byte as u8);
    }
    column
}

/// LF links of a transformed block.
///
/// `next[row]` is the position in `data` of the byte that sits at `row` of
/// the first column. Positions holding the same byte are assigned to that
/// byte's first-column slots in their original order; any other assignment
/// yields a different (wrong) reconstruction.
pub fn next_links(data: &[u8]) -> Vec<usize> {
    let counts = byte_counts(data);

    let mut slots = [0usize; ALPHABET_SIZE];
    let mut total = 0;
    for (slot, &count) in slots.iter_mut().zip(counts.iter()) {
        *slot = total;
        total += count;
    }

    let mut next = vec![0usize; data.len()];
    for (pos, &byte) in data.iter().enumerate() {
        let slot = &mut slots[byte as usize];
        next[*slot] = pos;
        *slot += 1;
    }
    next
}

/// Perform the inverse Burrows-Wheeler Transform.
///
/// Rejects an empty block and a `first` outside `0..data.len()`.
pub fn inverse_transform(first: u32, data: &[u8]) -> Result<Vec<u8>> {
    let n = data.len();
    if n == 0 {
        return Err(OxiBwtError::invalid_argument(
            "cannot invert an empty block",
        ));
    }
    let first = first as usize;
    if first >= n {
        return Err(OxiBwtError::out_of_range("row index", first, n));
    }

    let column = first_column(data);
    let next = next_links(data);

    let mut result = Vec::with_capacity(n);
    let mut row = first;
    for _ in 0..n {
        result.push(column[row]);
        row = next[row];
    }

    debug!("bwt inverse: {n} bytes from row {first}");
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bwt_empty() {
        let err = transform(b"").unwrap_err();
        assert!(err.is_invalid_argument());

        let err = inverse_transform(0, b"").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_bwt_single() {
        let block = transform(b"a").unwrap();
        assert_eq!(block.data(), b"a");
        assert_eq!(block.first(), 0);
        assert_eq!(block.invert().unwrap(), b"a");
    }

    #[test]
    fn test_bwt_abracadabra() {
        let block = transform(b"ABRACADABRA!").unwrap();
        assert_eq!(block.first(), 3);
        assert_eq!(block.data(), b"ARD!RCAAAABB");

        let recovered = inverse_transform(3, b"ARD!RCAAAABB").unwrap();
        assert_eq!(recovered, b"ABRACADABRA!");
    }

    #[test]
    fn test_bwt_banana() {
        let block = transform(b"banana").unwrap();
        assert_eq!(block.data(), b"nnbaaa");
        assert_eq!(block.first(), 3);
        assert_eq!(block.invert().unwrap(), b"banana");
    }

    #[test]
    fn test_bwt_roundtrip() {
        let test_cases = [
            b"hello world".as_slice(),
            b"abracadabra",
            b"mississippi",
            b"aaaaa",
            b"abcde",
            b"abab",
            b"\x00\x01\x00\x01\xff",
            b"the quick brown fox jumps over the lazy dog",
        ];

        for data in test_cases {
            let block = transform(data).unwrap();
            assert_eq!(block.len(), data.len());
            let recovered = inverse_transform(block.first(), block.data()).unwrap();
            assert_eq!(recovered, data, "Failed for: {:?}", data);
        }
    }

    #[test]
    fn test_inverse_row_out_of_range() {
        let err = inverse_transform(12, b"ARD!RCAAAABB").unwrap_err();
        assert!(matches!(
            err,
            OxiBwtError::OutOfRange {
                index: 12,
                len: 12,
                ..
            }
        ));
        assert!(BwtBlock::new(5, b"abc".to_vec()).is_err());
        assert!(BwtBlock::new(0, Vec::new()).is_err());
    }

    #[test]
    fn test_first_column_sorted() {
        assert_eq!(first_column(b"ARD!RCAAAABB"), b"!AAAAABBCDRR");
        assert!(first_column(b"").is_empty());
    }

    #[test]
    fn test_next_links_stable() {
        // Equal bytes keep their relative order within their bucket.
        let next = next_links(b"ARD!RCAAAABB");
        assert_eq!(next, vec![3, 0, 6, 7, 8, 9, 10, 11, 5, 2, 1, 4]);

        let next = next_links(b"aaaa");
        assert_eq!(next, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_transform_with_wrong_suffixes() {
        let suffixes = CircularSuffixArray::new(b"abc");
        let err = transform_with_suffixes(b"abcd", &suffixes).unwrap_err();
        assert!(err.is_invalid_argument());

        let suffixes = CircularSuffixArray::new(b"dcba");
        let block = transform_with_suffixes(b"dcba", &suffixes).unwrap();
        assert_eq!(block.invert().unwrap(), b"dcba");
    }

    #[test]
    fn test_bwt_groups_similar() {
        let data = b"abababab";
        let block = transform(data).unwrap();
        let runs = crate::stats::run_count(block.data());
        assert!(runs <= 4, "BWT should group similar bytes");
    }
}
