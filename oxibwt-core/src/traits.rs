//! Core traits for reversible byte transforms.
//!
//! Every stage of the block-sorting pipeline (BWT, MTF, and the composed
//! pipeline itself) is a whole-buffer transform with an exact inverse.

use crate::error::{OxiBwtError, Result};
use std::fmt;
use std::str::FromStr;

/// Direction in which a transform is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Apply the transform (`-` on the command line).
    #[default]
    Forward,
    /// Undo the transform (`+` on the command line).
    Inverse,
}

impl Direction {
    /// The opposite direction.
    pub fn reversed(self) -> Self {
        match self {
            Self::Forward => Self::Inverse,
            Self::Inverse => Self::Forward,
        }
    }

    /// Single-character mode flag for this direction.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Forward => "-",
            Self::Inverse => "+",
        }
    }
}

impl FromStr for Direction {
    type Err = OxiBwtError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "-" | "forward" | "encode" => Ok(Self::Forward),
            "+" | "inverse" | "decode" => Ok(Self::Inverse),
            other => Err(OxiBwtError::invalid_argument(format!(
                "unsupported mode '{other}': expected '-' for forward or '+' for inverse"
            ))),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Inverse => f.write_str("inverse"),
        }
    }
}

/// A reversible transform over a fully materialized byte buffer.
///
/// Implementations must satisfy `inverse(forward(x)?)? == x` for every input
/// `forward` accepts. State needed by a transform lives inside one call;
/// nothing carries over between invocations.
pub trait ByteTransform {
    /// Short name used in logs and diagnostics.
    fn name(&self) -> &'static str;

    /// Apply the transform.
    fn forward(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Undo the transform.
    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Apply the transform in the given direction.
    fn apply(&self, direction: Direction, input: &[u8]) -> Result<Vec<u8>> {
        match direction {
            Direction::Forward => self.forward(input),
            Direction::Inverse => self.inverse(input),
        }
    }
}

impl<T: ByteTransform + ?Sized> ByteTransform for Box<T> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).forward(input)
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        (**self).inverse(input)
    }
}
