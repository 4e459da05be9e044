//! Error types for lev-bounds operations.
//!
//! This module provides the error hierarchy using `thiserror` for checked
//! arithmetic, scratch allocation, file loading, and CLI commands. Every
//! variant maps onto one of three failure kinds (see [`ErrorKind`]).

use serde::Serialize;
use thiserror::Error;

/// Result type alias for lev-bounds operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Comprehensive error types for lev-bounds operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Checked arithmetic failed (overflow, underflow, division by zero).
    #[error("arithmetic error: {0}")]
    Arithmetic(#[from] ArithmeticError),

    /// Scratch memory could not be obtained.
    #[error("allocation error: {0}")]
    Allocation(#[from] AllocationError),

    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// CLI command errors.
    #[error("command error: {0}")]
    Command(#[from] CommandError),
}

/// Coarse classification of every failure the crate can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// A checked operation would leave the representable range, or divided by zero.
    ArithmeticOverflow,
    /// Scratch memory could not be obtained.
    AllocationFailure,
    /// Malformed argument, unreadable file, or short read.
    InvalidInput,
}

impl ErrorKind {
    /// Returns the stable snake-case name of the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArithmeticOverflow => "arithmetic_overflow",
            Self::AllocationFailure => "allocation_failure",
            Self::InvalidInput => "invalid_input",
        }
    }
}

impl Error {
    /// Classifies this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Arithmetic(_) => ErrorKind::ArithmeticOverflow,
            Self::Allocation(_) => ErrorKind::AllocationFailure,
            Self::Io(_) => ErrorKind::InvalidInput,
            Self::Command(CommandError::InputFailed { source, .. }) => source.kind(),
            Self::Command(_) => ErrorKind::InvalidInput,
        }
    }
}

/// Errors raised by the checked `usize` operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The exact result is not representable as `usize`.
    #[error("{operation} of {lhs} and {rhs} is out of range")]
    Overflow {
        /// Name of the operation (`add`, `sub`, `mul`).
        operation: &'static str,
        /// Left operand.
        lhs: usize,
        /// Right operand.
        rhs: usize,
    },

    /// Divisor was zero.
    #[error("{operation} of {dividend} by zero")]
    DivisionByZero {
        /// Name of the operation (`div`, `rem`).
        operation: &'static str,
        /// The dividend.
        dividend: usize,
    },
}

/// Scratch allocation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocationError {
    /// A dynamic-programming row could not be reserved.
    #[error("could not reserve a scratch row of {entries} entries")]
    ScratchRow {
        /// Requested number of entries.
        entries: usize,
    },
}

/// Reasons a decimal size string is rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSizeError {
    /// The string was empty.
    #[error("empty string")]
    Empty,

    /// The string started with `+` or `-`.
    #[error("signs are not accepted")]
    Signed,

    /// A character other than an ASCII digit was found.
    #[error("invalid character {character:?} at byte offset {offset}")]
    InvalidDigit {
        /// The offending character.
        character: char,
        /// Byte offset of the character.
        offset: usize,
    },

    /// The value does not fit in `usize`.
    #[error("value exceeds {max}", max = usize::MAX)]
    OutOfRange,
}

/// I/O-specific errors for file operations.
#[derive(Error, Debug)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path to the file that was not found.
        path: String,
    },

    /// Failed to read file.
    #[error("failed to read file: {path}: {reason}")]
    ReadFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },

    /// Fewer bytes were available than the file size promised.
    #[error("short read: {path}: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Path to the file.
        path: String,
        /// Number of bytes the read should have produced.
        expected: usize,
        /// Number of bytes actually read.
        actual: usize,
    },

    /// Memory mapping error.
    #[error("memory mapping failed: {path}: {reason}")]
    MmapFailed {
        /// Path to the file.
        path: String,
        /// Reason for failure.
        reason: String,
    },
}

/// CLI command-specific errors.
#[derive(Error, Debug)]
pub enum CommandError {
    /// Invalid argument provided.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The read limit argument could not be parsed.
    #[error("could not accept read limit {input:?}: {source}")]
    InvalidReadLimit {
        /// The raw argument.
        input: String,
        /// Why it was rejected.
        source: ParseSizeError,
    },

    /// One of the two input files could not be loaded.
    #[error("could not read {which} file: {source}")]
    InputFailed {
        /// `"first"` or `"second"`.
        which: &'static str,
        /// Underlying failure.
        source: Box<Error>,
    },

    /// Output format error.
    #[error("output format error: {0}")]
    OutputFormat(String),
}

impl From<serde_json::Error> for CommandError {
    fn from(err: serde_json::Error) -> Self {
        Self::OutputFormat(err.to_string())
    }
}
