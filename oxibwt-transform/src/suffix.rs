//! Sorted order of the circular rotations of a block.
//!
//! Rotations are never materialized; a rotation is identified by its start
//! index. The order is built by cyclic prefix doubling: after round `k` every
//! start index carries the rank of its length-`2^k` cyclic prefix, and each
//! round re-sorts by the pair of ranks `(rank[i], rank[i + 2^k])` with two
//! stable counting sorts. That costs `O(n)` per round and `O(n log n)` overall.

use crate::ALPHABET_SIZE;
use log::trace;
use oxibwt_core::{OxiBwtError, Result};
use std::cmp::Ordering;

/// The circular suffix array of a byte block.
///
/// `index(i)` is the start of the `i`-th smallest rotation. Identical
/// rotations (periodic input) are ordered by ascending start index, so the
/// order is total and the same input always yields the same array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircularSuffixArray {
    index: Vec<usize>,
}

impl CircularSuffixArray {
    /// Sort the rotations of `data`. An empty block yields an empty order.
    pub fn new(data: &[u8]) -> Self {
        Self {
            index: sort_rotations(data),
        }
    }

    /// Length of the underlying block.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the underlying block was empty.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Start index of the `i`-th rotation in sorted order.
    pub fn index(&self, i: usize) -> Result<usize> {
        self.index
            .get(i)
            .copied()
            .ok_or_else(|| OxiBwtError::out_of_range("suffix rank", i, self.index.len()))
    }

    /// Sorted position of the rotation starting at `start`, if any.
    pub fn rank_of(&self, start: usize) -> Option<usize> {
        self.index.iter().position(|&s| s == start)
    }

    /// All start indices in sorted order.
    pub fn as_slice(&self) -> &[usize] {
        &self.index
    }

    /// Iterate over start indices in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.index.iter().copied()
    }
}

/// Compare the rotations of `data` starting at `a` and `b` byte by byte.
///
/// This is the direct `O(n)` comparator; [`CircularSuffixArray`] never calls
/// it, but its order is the one the suffix array reproduces.
pub fn compare_rotations(data: &[u8], a: usize, b: usize) -> Ordering {
    let n = data.len();
    for k in 0..n {
        match data[(a + k) % n].cmp(&data[(b + k) % n]) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn sort_rotations(data: &[u8]) -> Vec<usize> {
    let n = data.len();
    if n == 0 {
        return Vec::new();
    }

    let mut count = vec![0usize; n.max(ALPHABET_SIZE)];
    let mut order = vec![0usize; n];
    let mut class = vec![0usize; n];

    // Round 0: stable bucket sort on the first byte.
    for &byte in data {
        count[byte as usize] += 1;
    }
    for b in 1..ALPHABET_SIZE {
        count[b] += count[b - 1];
    }
    for (start, &byte) in data.iter().enumerate().rev() {
        let bucket = &mut count[byte as usize];
        *bucket -= 1;
        order[*bucket] = start;
    }

    let mut classes = 1;
    class[order[0]] = 0;
    for i in 1..n {
        if data[order[i]] != data[order[i - 1]] {
            classes += 1;
        }
        class[order[i]] = classes - 1;
    }

    let mut shifted = vec![0usize; n];
    let mut next_class = vec![0usize; n];
    let mut width = 1;

    while width < n && classes < n {
        // `order` sorted by first halves means `order - width` is sorted by
        // second halves; a stable sort on the first half finishes the pair.
        for (slot, &start) in shifted.iter_mut().zip(&order) {
            *slot = (start + n - width) % n;
        }

        count[..classes].fill(0);
        for &start in &shifted {
            count[class[start]] += 1;
        }
        for c in 1..classes {
            count[c] += count[c - 1];
        }
        for &start in shifted.iter().rev() {
            let bucket = &mut count[class[start]];
            *bucket -= 1;
            order[*bucket] = start;
        }

        next_class[order[0]] = 0;
        classes = 1;
        for i in 1..n {
            let cur = (class[order[i]], class[(order[i] + width) % n]);
            let prev = (class[order[i - 1]], class[(order[i - 1] + width) % n]);
            if cur != prev {
                classes += 1;
            }
            next_class[order[i]] = classes - 1;
        }
        std::mem::swap(&mut class, &mut next_class);
        width <<= 1;

        trace!("suffix sort: prefix width {width}, {classes}/{n} classes");
    }

    if classes < n {
        // Only identical rotations still share a class. Lay each class out
        // by ascending start index.
        count[..classes].fill(0);
        for &c in &class {
            count[c] += 1;
        }
        let mut total = 0;
        for slot in &mut count[..classes] {
            let size = *slot;
            *slot = total;
            total += size;
        }
        for (start, &c) in class.iter().enumerate() {
            order[count[c]] = start;
            count[c] += 1;
        }
    }

    order
}
