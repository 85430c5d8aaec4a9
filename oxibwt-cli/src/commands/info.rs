//! Info command implementation.

use crate::utils::{format_size, read_input};
use oxibwt_core::FrameConfig;
use oxibwt_transform::stats::BlockStats;
use oxibwt_transform::{BwtBlock, mtf};
use std::path::Path;

pub fn cmd_info(input: Option<&Path>, config: FrameConfig) -> Result<(), Box<dyn std::error::Error>> {
    let frame = read_input(input)?;
    let block = BwtBlock::from_bytes(&frame, &config)?;

    let transformed = BlockStats::of(block.data());
    let original = BlockStats::of(&block.invert()?);
    let symbols = BlockStats::of(&mtf::encode(block.data()));

    println!("BWT Frame Information");
    println!("=====================");
    if let Some(path) = input {
        println!("File: {}", path.display());
    }
    println!("Frame size: {}", format_size(frame.len()));
    println!("Header: {} bytes ({:?})", config.header_len(), config.byte_order);
    println!("First row: {}", block.first());
    println!("Block length: {} bytes", block.len());
    println!();
    println!("Runs:");
    println!(
        "  Original: {} (mean length {:.2})",
        original.runs,
        original.mean_run()
    );
    println!(
        "  Transformed: {} (mean length {:.2})",
        transformed.runs,
        transformed.mean_run()
    );
    println!(
        "  MTF zeros: {:.1}%",
        symbols.zero_fraction * 100.0
    );

    Ok(())
}
