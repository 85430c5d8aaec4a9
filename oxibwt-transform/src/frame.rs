//! Byte layout of a transformed block.
//!
//! ```text
//! +----------------+---------------------------+
//! | first (4 bytes)| transformed data (n bytes)|
//! +----------------+---------------------------+
//! ```
//!
//! `first` uses the byte order from [`FrameConfig`] (big-endian by default).
//! The block length is not stored: it is the number of bytes after the header.

use crate::bwt::BwtBlock;
use log::debug;
use oxibwt_core::{FrameConfig, OxiBwtError, Result};
use std::io::{Read, Write};

/// Encode the row index header.
pub fn write_header(first: u32, config: &FrameConfig) -> [u8; FrameConfig::HEADER_LEN] {
    config.byte_order.encode_u32(first)
}

/// Split a frame into its row index and payload.
pub fn read_header<'a>(frame: &'a [u8], config: &FrameConfig) -> Result<(u32, &'a [u8])> {
    let header_len = config.header_len();
    if frame.len() < header_len {
        return Err(OxiBwtError::malformed(format!(
            "frame is {} bytes, shorter than the {header_len}-byte header",
            frame.len()
        )));
    }
    let (header, payload) = frame.split_at(header_len);
    let mut bytes = [0u8; FrameConfig::HEADER_LEN];
    bytes.copy_from_slice(header);
    Ok((config.byte_order.decode_u32(bytes), payload))
}

impl BwtBlock {
    /// Serialize as header followed by the transformed bytes.
    pub fn to_bytes(&self, config: &FrameConfig) -> Vec<u8> {
        let mut out = Vec::with_capacity(config.header_len() + self.data.len());
        out.extend_from_slice(&write_header(self.first, config));
        out.extend_from_slice(&self.data);
        out
    }

    /// Parse a frame produced by [`BwtBlock::to_bytes`].
    pub fn from_bytes(frame: &[u8], config: &FrameConfig) -> Result<Self> {
        let (first, payload) = read_header(frame, config)?;
        if payload.is_empty() {
            return Err(OxiBwtError::malformed("frame header carries no payload"));
        }
        if payload.len() > config.max_block_len {
            return Err(OxiBwtError::malformed(format!(
                "frame payload of {} bytes exceeds the {}-byte block limit",
                payload.len(),
                config.max_block_len
            )));
        }
        if first as usize >= payload.len() {
            return Err(OxiBwtError::out_of_range(
                "row index",
                first as usize,
                payload.len(),
            ));
        }
        Ok(Self {
            first,
            data: payload.to_vec(),
        })
    }
}

/// Write one framed block.
pub fn write_block<W: Write>(writer: &mut W, block: &BwtBlock, config: &FrameConfig) -> Result<()> {
    writer.write_all(&write_header(block.first, config))?;
    writer.write_all(&block.data)?;
    debug!(
        "frame: wrote {} + {} bytes",
        config.header_len(),
        block.data.len()
    );
    Ok(())
}

/// Read a framed block, consuming the reader to its end.
pub fn read_block<R: Read>(reader: &mut R, config: &FrameConfig) -> Result<BwtBlock> {
    let mut frame = Vec::new();
    reader.read_to_end(&mut frame)?;
    debug!("frame: read {} bytes", frame.len());
    BwtBlock::from_bytes(&frame, config)
}
