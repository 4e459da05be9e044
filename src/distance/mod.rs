//! Levenshtein distance and its bounds.
//!
//! Three metrics are available, from cheapest to most expensive:
//!
//! - **Lower**: byte-frequency lower bound, linear time
//! - **Upper**: exact distance over fixed-size windows, summed
//! - **Exact**: full dynamic programming, quadratic time
//!
//! For any inputs, `lower <= exact <= upper`.

pub mod exact;
pub mod lower;
pub mod traits;
pub mod upper;

pub use exact::{Exact, exact_distance};
pub use lower::{Lower, lower_bound};
pub use traits::Metric;
pub use upper::{DEFAULT_WINDOW, Upper, upper_bound, upper_bound_with_window, window_count};

use serde::Serialize;
use std::fmt;

/// Which metric to compute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Exact Levenshtein distance.
    Distance,
    /// Lower bound.
    Lower,
    /// Upper bound.
    Upper,
}

impl Mode {
    /// Returns the mode name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Distance => "distance",
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Creates the metric for `mode`.
///
/// `window` only affects [`Mode::Upper`].
///
/// # Errors
///
/// Returns [`crate::error::CommandError::InvalidArgument`] if `mode` is
/// [`Mode::Upper`] and `window` is zero.
pub fn create_metric(mode: Mode, window: usize) -> crate::error::Result<Box<dyn Metric>> {
    match mode {
        Mode::Distance => Ok(Box::new(Exact)),
        Mode::Lower => Ok(Box::new(Lower)),
        Mode::Upper => Ok(Box::new(Upper::with_window(window)?)),
    }
}

/// Lists available modes.
#[must_use]
pub fn available_modes() -> Vec<Mode> {
    vec![Mode::Distance, Mode::Lower, Mode::Upper]
}
