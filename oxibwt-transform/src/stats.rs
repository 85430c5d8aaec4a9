//! Block statistics for judging how well a transform grouped its input.

/// Number of maximal runs of equal bytes.
pub fn run_count(data: &[u8]) -> usize {
    if data.is_empty() {
        return 0;
    }
    1 + data.windows(2).filter(|w| w[0] != w[1]).count()
}

/// Fraction of zero bytes, in `0.0..=1.0`.
pub fn zero_fraction(data: &[u8]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().filter(|&&b| b == 0).count() as f64 / data.len() as f64
}

/// Summary of a byte block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockStats {
    /// Block length.
    pub len: usize,
    /// Maximal runs of equal bytes.
    pub runs: usize,
    /// Fraction of zero bytes.
    pub zero_fraction: f64,
}

impl BlockStats {
    /// Gather statistics for `data`.
    pub fn of(data: &[u8]) -> Self {
        Self {
            len: data.len(),
            runs: run_count(data),
            zero_fraction: zero_fraction(data),
        }
    }

    /// Average run length (0 for an empty block).
    pub fn mean_run(&self) -> f64 {
        if self.runs == 0 {
            0.0
        } else {
            self.len as f64 / self.runs as f64
        }
    }
}
