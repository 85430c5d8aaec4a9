//! # OxiBWT Core
//!
//! Core components for the OxiBWT block-sorting library.
//!
//! This crate provides the pieces shared by every transform stage:
//!
//! - [`error`]: Error types
//! - [`traits`]: The [`ByteTransform`] trait and transform [`Direction`]
//! - [`config`]: Frame header layout ([`FrameConfig`], [`ByteOrder`])
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Command line                                        │
//! │     oxibwt binary, stdin/stdout plumbing               │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Transforms                                          │
//! │     Suffix order, BWT / inverse BWT, MTF, pipeline     │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Core (this crate)                                   │
//! │     Errors, ByteTransform trait, frame configuration   │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxibwt_core::{ByteOrder, Direction, FrameConfig};
//!
//! let config = FrameConfig::new(ByteOrder::BigEndian);
//! assert_eq!(config.header_len(), 4);
//!
//! let mode: Direction = "+".parse().unwrap();
//! assert_eq!(mode, Direction::Inverse);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod traits;

// Re-exports for convenience
pub use config::{ByteOrder, FrameConfig};
pub use error::{OxiBwtError, Result};
pub use traits::{ByteTransform, Direction};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{ByteOrder, FrameConfig};
    pub use crate::error::{OxiBwtError, Result};
    pub use crate::traits::{ByteTransform, Direction};
}
