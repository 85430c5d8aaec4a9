//! Composable transform stages.
//!
//! The standard pipeline is the block-sorting front end of a compressor:
//! framed BWT followed by MTF over the whole frame. Its output is meant for
//! an entropy coder; its inverse takes that coder's decoded bytes back to
//! the original block.

use crate::bwt::{BwtBlock, transform};
use crate::mtf::MoveToFront;
use log::debug;
use oxibwt_core::{ByteTransform, FrameConfig, OxiBwtError, Result};
use std::fmt;

/// Framed Burrows-Wheeler Transform as a pipeline stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct BurrowsWheeler {
    config: FrameConfig,
}

impl BurrowsWheeler {
    /// Create a stage writing frames with the given layout.
    pub fn new(config: FrameConfig) -> Self {
        Self { config }
    }

    /// Frame layout used by this stage.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

impl ByteTransform for BurrowsWheeler {
    fn name(&self) -> &'static str {
        "bwt"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        if input.len() > self.config.max_block_len {
            return Err(OxiBwtError::invalid_argument(format!(
                "block of {} bytes exceeds the {}-byte limit",
                input.len(),
                self.config.max_block_len
            )));
        }
        Ok(transform(input)?.to_bytes(&self.config))
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        BwtBlock::from_bytes(input, &self.config)?.invert()
    }
}

/// An ordered chain of transforms, inverted in reverse order.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn ByteTransform + Send + Sync>>,
}

impl Pipeline {
    /// Create an empty pipeline (the identity transform).
    pub fn new() -> Self {
        Self::default()
    }

    /// BWT followed by MTF.
    pub fn standard(config: FrameConfig) -> Self {
        Self::new()
            .push(BurrowsWheeler::new(config))
            .push(MoveToFront)
    }

    /// Append a stage.
    pub fn push(mut self, stage: impl ByteTransform + Send + Sync + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the pipeline has no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in forward order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("stages", &self.stage_names())
            .finish()
    }
}

impl ByteTransform for Pipeline {
    fn name(&self) -> &'static str {
        "pipeline"
    }

    fn forward(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut data = input.to_vec();
        for stage in &self.stages {
            data = stage.forward(&data)?;
            debug!("pipeline: {} forward -> {} bytes", stage.name(), data.len());
        }
        Ok(data)
    }

    fn inverse(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut data = input.to_vec();
        for stage in self.stages.iter().rev() {
            data = stage.inverse(&data)?;
            debug!("pipeline: {} inverse -> {} bytes", stage.name(), data.len());
        }
        Ok(data)
    }
}
