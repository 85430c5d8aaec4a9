//! OxiBWT CLI - block-sorting transforms from the command line
//!
//! Reads a whole byte stream (stdin or a file), applies the Burrows-Wheeler
//! or Move-to-Front transform in the direction given by the mode flag, and
//! writes the result (stdout or a file).

mod commands;
mod utils;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use commands::{cmd_bwt, cmd_info, cmd_mtf, cmd_pipeline, cmd_suffixes};
use oxibwt_core::{ByteOrder, Direction, FrameConfig, OxiBwtError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxibwt")]
#[command(
    author,
    version,
    about = "Burrows-Wheeler and Move-to-Front transforms - Pure Rust"
)]
#[command(long_about = "
OxiBWT applies the reversible block-sorting transforms used in front of an
entropy coder. The mode flag is '-' for the forward transform and '+' for
the inverse.

Examples:
  oxibwt bwt - < input.txt > input.bwt
  oxibwt bwt + < input.bwt > input.txt
  oxibwt mtf - -i input.bwt -o input.mtf
  oxibwt pipeline - -i input.txt -o input.pre
  oxibwt suffixes --json -i input.txt
  oxibwt info -i input.bwt
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

/// Input and output streams.
#[derive(Args, Debug)]
struct StreamArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Frame layout options.
#[derive(Args, Debug)]
struct FrameArgs {
    /// Byte order of the 32-bit row index header
    #[arg(long, value_enum, default_value = "big")]
    byte_order: ByteOrderArg,

    /// Largest block accepted, in bytes
    #[arg(long)]
    max_block: Option<usize>,
}

impl FrameArgs {
    fn config(&self) -> FrameConfig {
        let config = FrameConfig::new(self.byte_order.into());
        match self.max_block {
            Some(limit) => config.with_max_block_len(limit),
            None => config,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Burrows-Wheeler transform ('-') or inverse transform ('+')
    #[command(alias = "burrows-wheeler")]
    Bwt {
        /// '-' for transform, '+' for inverse transform
        #[arg(value_parser = parse_mode)]
        mode: Direction,

        #[command(flatten)]
        stream: StreamArgs,

        #[command(flatten)]
        frame: FrameArgs,
    },

    /// Move-to-front encoding ('-') or decoding ('+')
    #[command(alias = "move-to-front")]
    Mtf {
        /// '-' for encoding, '+' for decoding
        #[arg(value_parser = parse_mode)]
        mode: Direction,

        #[command(flatten)]
        stream: StreamArgs,
    },

    /// Burrows-Wheeler transform followed by move-to-front, or the reverse
    Pipeline {
        /// '-' for forward, '+' for inverse
        #[arg(value_parser = parse_mode)]
        mode: Direction,

        #[command(flatten)]
        stream: StreamArgs,

        #[command(flatten)]
        frame: FrameArgs,
    },

    /// Print the sorted order of the input's circular suffixes
    Suffixes {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Show information about a transformed block
    #[command(alias = "i")]
    Info {
        /// Input file (stdin if omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[command(flatten)]
        frame: FrameArgs,
    },
}

/// Header byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
enum ByteOrderArg {
    /// Most significant byte first (default)
    #[default]
    Big,
    /// Least significant byte first
    Little,
}

impl From<ByteOrderArg> for ByteOrder {
    fn from(arg: ByteOrderArg) -> Self {
        match arg {
            ByteOrderArg::Big => ByteOrder::BigEndian,
            ByteOrderArg::Little => ByteOrder::LittleEndian,
        }
    }
}

fn parse_mode(s: &str) -> Result<Direction, OxiBwtError> {
    s.parse()
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Bwt {
            mode,
            stream,
            frame,
        } => cmd_bwt(
            mode,
            stream.input.as_deref(),
            stream.output.as_deref(),
            frame.config(),
        ),
        Commands::Mtf { mode, stream } => {
            cmd_mtf(mode, stream.input.as_deref(), stream.output.as_deref())
        }
        Commands::Pipeline {
            mode,
            stream,
            frame,
        } => cmd_pipeline(
            mode,
            stream.input.as_deref(),
            stream.output.as_deref(),
            frame.config(),
        ),
        Commands::Suffixes { input, json } => cmd_suffixes(input.as_deref(), json),
        Commands::Info { input, frame } => cmd_info(input.as_deref(), frame.config()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
