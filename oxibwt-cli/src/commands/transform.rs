//! Forward/inverse transform commands.
//!
//! Each command reads its whole input, applies one stage in the requested
//! direction and writes the result. Nothing is written if the stage fails.

use crate::utils::{format_size, read_input, write_output};
use log::info;
use oxibwt_core::{ByteTransform, Direction, FrameConfig};
use oxibwt_transform::{BurrowsWheeler, MoveToFront, Pipeline};
use std::path::Path;

fn run_stage(
    stage: &dyn ByteTransform,
    mode: Direction,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let result = stage.apply(mode, &data)?;
    info!(
        "{} {}: {} -> {}",
        stage.name(),
        mode,
        format_size(data.len()),
        format_size(result.len())
    );
    write_output(output, &result)?;
    Ok(())
}

pub fn cmd_bwt(
    mode: Direction,
    input: Option<&Path>,
    output: Option<&Path>,
    config: FrameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    run_stage(&BurrowsWheeler::new(config), mode, input, output)
}

pub fn cmd_mtf(
    mode: Direction,
    input: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    run_stage(&MoveToFront, mode, input, output)
}

pub fn cmd_pipeline(
    mode: Direction,
    input: Option<&Path>,
    output: Option<&Path>,
    config: FrameConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    run_stage(&Pipeline::standard(config), mode, input, output)
}
