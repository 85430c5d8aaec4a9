//! Utility functions for the CLI.

use log::LevelFilter;
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

/// Install the stderr logger. `-v` enables debug output, `-vv` trace;
/// `RUST_LOG` takes precedence when set.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Read the whole input, from a file or from stdin.
pub fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut data = Vec::new();
            io::stdin().lock().read_to_end(&mut data)?;
            Ok(data)
        }
    }
}

/// Write the whole output, to a file or to stdout.
pub fn write_output(path: Option<&Path>, data: &[u8]) -> io::Result<()> {
    match path {
        Some(path) => fs::write(path, data),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(data)?;
            stdout.flush()
        }
    }
}

/// Format a byte count for humans.
pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let value = bytes as f64;
    if value >= KIB * KIB {
        format!("{:.1} MiB", value / (KIB * KIB))
    } else if value >= KIB {
        format!("{:.1} KiB", value / KIB)
    } else {
        format!("{bytes} B")
    }
}
