//! Command implementations for OxiBWT CLI.

pub mod info;
pub mod suffixes;
pub mod transform;

pub use info::cmd_info;
pub use suffixes::cmd_suffixes;
pub use transform::{cmd_bwt, cmd_mtf, cmd_pipeline};
