//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap derive macros.

use crate::cli::output::OutputFormat;
use crate::distance::{DEFAULT_WINDOW, Mode};
use clap::{Args, Parser};
use std::path::PathBuf;

/// lev-bounds: Levenshtein distance between files.
///
/// Interprets each file as the bytestring it contains and prints the
/// Levenshtein distance between the two bytestrings, or a bound on it.
/// Computing a bound takes considerably less time than computing the
/// distance when the files are large.
#[derive(Parser, Debug)]
#[command(name = "lev-bounds")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// What to compute.
    #[command(flatten)]
    pub mode: ModeArgs,

    /// First file.
    pub file1: PathBuf,

    /// Second file.
    pub file2: PathBuf,

    /// Maximum number of bytes read from each file.
    ///
    /// Only a prefix of each file is compared when set.
    #[arg(allow_negative_numbers = true)]
    pub read_limit: Option<String>,

    /// Window size in bytes for the upper bound.
    #[arg(long, default_value_t = DEFAULT_WINDOW, env = "LEV_BOUNDS_WINDOW")]
    pub window: usize,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Mutually exclusive mode flags.
#[derive(Args, Debug, Clone, Copy, Default)]
#[group(required = true, multiple = false)]
#[allow(clippy::struct_excessive_bools)]
pub struct ModeArgs {
    /// Print the Levenshtein distance.
    #[arg(short = 'd', long)]
    pub distance: bool,

    /// Print a lower bound on the distance (takes the least time).
    #[arg(short = 'l', long)]
    pub lower: bool,

    /// Print an upper bound on the distance.
    #[arg(short = 'u', long)]
    pub upper: bool,
}

impl ModeArgs {
    /// Builds the flags selecting `mode`.
    #[must_use]
    pub const fn from_mode(mode: Mode) -> Self {
        Self {
            distance: matches!(mode, Mode::Distance),
            lower: matches!(mode, Mode::Lower),
            upper: matches!(mode, Mode::Upper),
        }
    }

    /// Returns the selected mode, or `None` if no flag is set.
    #[must_use]
    pub const fn selected(&self) -> Option<Mode> {
        if self.distance {
            Some(Mode::Distance)
        } else if self.lower {
            Some(Mode::Lower)
        } else if self.upper {
            Some(Mode::Upper)
        } else {
            None
        }
    }
}
