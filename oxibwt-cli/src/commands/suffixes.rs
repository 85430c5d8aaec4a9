//! Suffixes command implementation.

use crate::utils::read_input;
use oxibwt_transform::CircularSuffixArray;
use serde::Serialize;
use std::path::Path;

/// JSON output for a suffix listing.
#[derive(Debug, Serialize)]
struct SuffixListJson<'a> {
    length: usize,
    index: &'a [usize],
}

pub fn cmd_suffixes(input: Option<&Path>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data = read_input(input)?;
    let csa = CircularSuffixArray::new(&data);

    if json {
        let listing = SuffixListJson {
            length: csa.len(),
            index: csa.as_slice(),
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("Length of input: {}", csa.len());
    println!("Sorted suffix indices:");
    for (rank, start) in csa.iter().enumerate() {
        println!("index[{}] = {}", rank, start);
    }

    Ok(())
}
