//! Frame configuration for the forward/inverse transform byte interface.

/// Byte order of the 32-bit row index written in front of a transformed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    #[default]
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// Encode a 32-bit value in this byte order.
    pub fn encode_u32(self, value: u32) -> [u8; 4] {
        match self {
            Self::BigEndian => value.to_be_bytes(),
            Self::LittleEndian => value.to_le_bytes(),
        }
    }

    /// Decode a 32-bit value stored in this byte order.
    pub fn decode_u32(self, bytes: [u8; 4]) -> u32 {
        match self {
            Self::BigEndian => u32::from_be_bytes(bytes),
            Self::LittleEndian => u32::from_le_bytes(bytes),
        }
    }
}

/// Frame layout parameters.
///
/// A frame is the `first` row index as a fixed-width 32-bit integer followed
/// by the transformed bytes. The payload length is never stored; it is
/// whatever remains after the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameConfig {
    /// Encoding of the row index header.
    pub byte_order: ByteOrder,
    /// Largest block the forward transform accepts.
    pub max_block_len: usize,
}

impl FrameConfig {
    /// Width of the row index header in bytes.
    pub const HEADER_LEN: usize = 4;

    /// Big-endian header, blocks up to the full 32-bit range.
    pub const STANDARD: Self = Self {
        byte_order: ByteOrder::BigEndian,
        max_block_len: u32::MAX as usize,
    };

    /// Create a configuration with the given byte order and the largest
    /// block length the header can address.
    pub fn new(byte_order: ByteOrder) -> Self {
        Self {
            byte_order,
            ..Self::STANDARD
        }
    }

    /// Use a different header byte order.
    pub fn with_byte_order(mut self, byte_order: ByteOrder) -> Self {
        self.byte_order = byte_order;
        self
    }

    /// Limit the block length (clamped to what the header can address).
    pub fn with_max_block_len(mut self, max_block_len: usize) -> Self {
        self.max_block_len = max_block_len.min(u32::MAX as usize);
        self
    }

    /// Header width in bytes.
    pub fn header_len(&self) -> usize {
        Self::HEADER_LEN
    }
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}
