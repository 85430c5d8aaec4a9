//! Block-sorting transforms for OxiBWT.
//!
//! This crate provides a pure Rust implementation of the reversible
//! preprocessing stages used by block-sorting compressors:
//!
//! 1. Circular suffix sorting - the sorted order of every rotation of a block
//! 2. Burrows-Wheeler Transform (BWT) - groups bytes that share a context
//! 3. Move-to-Front Transform (MTF) - turns those groups into runs of small values
//!
//! Entropy coding of the MTF output is left to the caller.
//!
//! ## Example
//!
//! ```rust
//! use oxibwt_transform::{bwt, mtf};
//!
//! let block = bwt::transform(b"ABRACADABRA!").unwrap();
//! assert_eq!(block.first(), 3);
//! assert_eq!(block.data(), b"ARD!RCAAAABB");
//!
//! let symbols = mtf::encode(block.data());
//! let restored = bwt::inverse_transform(block.first(), &mtf::decode(&symbols)).unwrap();
//! assert_eq!(restored, b"ABRACADABRA!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

/// Burrows-Wheeler Transform implementation.
pub mod bwt;
pub mod frame;
pub mod mtf;
pub mod pipeline;
pub mod stats;
pub mod suffix;

pub use bwt::{BwtBlock, inverse_transform, transform};
pub use mtf::{MoveToFront, SymbolList};
pub use oxibwt_core::{ByteOrder, ByteTransform, Direction, FrameConfig, OxiBwtError, Result};
pub use pipeline::{BurrowsWheeler, Pipeline};
pub use suffix::CircularSuffixArray;

/// Number of distinct byte values.
pub const ALPHABET_SIZE: usize = 256;

/// Run the standard BWT + MTF pipeline forward with the default frame layout.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    Pipeline::standard(FrameConfig::STANDARD).forward(data)
}

/// Undo [`compress`].
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Pipeline::standard(FrameConfig::STANDARD).inverse(data)
}
