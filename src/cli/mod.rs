//! CLI layer for lev-bounds.
//!
//! Provides the command-line interface using clap: a mode flag, two file
//! paths and an optional read limit.

pub mod commands;
pub mod output;
pub mod parser;

pub use commands::execute;
pub use output::OutputFormat;
pub use parser::{Cli, ModeArgs};
