//! # lev-bounds
//!
//! Levenshtein distance between files, interpreted as bytestrings.
//!
//! Computing the exact distance takes quadratic time, so two cheaper
//! alternatives are offered as well: a linear-time lower bound and a
//! windowed upper bound. For any two inputs,
//! `lower_bound <= exact_distance <= upper_bound`.
//!
//! ## Features
//!
//! - **Exact distance**: two-row dynamic programming, memory linear in the shorter input
//! - **Lower bound**: byte-frequency histograms, linear time
//! - **Upper bound**: exact distance over 1 KiB windows, summed
//! - **Checked arithmetic**: sizes from untrusted files never wrap silently
//!
//! ```
//! use lev_bounds::{exact_distance, lower_bound, upper_bound};
//!
//! let (a, b) = (b"kitten".as_slice(), b"sitting".as_slice());
//! assert_eq!(exact_distance(a, b).unwrap(), 3);
//! assert!(lower_bound(a, b).unwrap() <= 3);
//! assert!(upper_bound(a, b).unwrap() >= 3);
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
// Note: unsafe is needed for memory-mapped I/O (memmap2)
#![warn(unsafe_code)]

pub mod cli;
pub mod core;
pub mod distance;
pub mod error;
pub mod io;

// Re-export commonly used types at crate root
pub use error::{Error, ErrorKind, Result};

// Re-export core domain types
pub use crate::core::ByteBuffer;

// Re-export the metrics
pub use distance::{
    DEFAULT_WINDOW, Exact, Lower, Metric, Mode, Upper, available_modes, create_metric,
    exact_distance, lower_bound, upper_bound,
};

// Re-export I/O
pub use io::load;

// Re-export CLI types
pub use cli::{Cli, OutputFormat};
