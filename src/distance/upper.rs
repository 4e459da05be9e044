//! Chunked upper bound.
//!
//! Both inputs are cut into consecutive windows of at most `window` bytes
//! and the i-th window of one input is compared exactly against the i-th
//! window of the other. Concatenating the per-window edit scripts gives an
//! edit script for the whole inputs, so the sum of the window distances can
//! never be smaller than the true distance.

use crate::core::checked;
use crate::distance::exact::exact_distance;
use crate::distance::traits::Metric;
use crate::error::{CommandError, Result};
use tracing::{debug, trace};

/// Default window size in bytes.
pub const DEFAULT_WINDOW: usize = 1024;

/// Upper bound on the Levenshtein distance.
///
/// Costs `O((|a| + |b|) * window)` time and `O(window)` scratch memory.
///
/// # Examples
///
/// ```
/// use lev_bounds::distance::{Metric, Upper};
///
/// let upper = Upper::with_window(4).unwrap();
/// assert_eq!(upper.compute(b"abcdefgh", b"abcdefgh").unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Upper {
    /// Maximum window size in bytes.
    window: usize,
}

impl Default for Upper {
    fn default() -> Self {
        Self::new()
    }
}

impl Upper {
    /// Creates an upper bound with the default window.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            window: DEFAULT_WINDOW,
        }
    }

    /// Creates an upper bound with a custom window size.
    ///
    /// # Errors
    ///
    /// Returns an error if `window` is zero.
    pub fn with_window(window: usize) -> Result<Self> {
        if window == 0 {
            return Err(CommandError::InvalidArgument("window must be > 0".to_string()).into());
        }
        Ok(Self { window })
    }

    /// Returns the window size.
    #[must_use]
    pub const fn window(&self) -> usize {
        self.window
    }
}

impl Metric for Upper {
    fn compute(&self, a: &[u8], b: &[u8]) -> Result<usize> {
        upper_bound_with_window(a, b, self.window)
    }

    fn name(&self) -> &'static str {
        "upper"
    }

    fn description(&self) -> &'static str {
        "Upper bound from windowed exact distances"
    }
}

/// Computes a value never smaller than the Levenshtein distance of `a` and
/// `b`, using the default 1024-byte window.
///
/// # Errors
///
/// Propagates any failure of the per-window exact computation, or an
/// arithmetic error if the running sum overflows.
pub fn upper_bound(a: &[u8], b: &[u8]) -> Result<usize> {
    upper_bound_with_window(a, b, DEFAULT_WINDOW)
}

/// Same as [`upper_bound`] with an explicit window size.
///
/// Once one input runs out of windows it contributes empty windows until
/// the other is exhausted too.
///
/// # Errors
///
/// Returns an arithmetic error if `window` is zero or the running sum
/// overflows, and propagates failures of the exact computation.
pub fn upper_bound_with_window(a: &[u8], b: &[u8], window: usize) -> Result<usize> {
    let windows_a = window_count(a.len(), window)?;
    let windows_b = window_count(b.len(), window)?;
    debug!(window, windows_a, windows_b, "computing windowed upper bound");

    let mut chunks_a = a.chunks(window);
    let mut chunks_b = b.chunks(window);
    let mut bound = 0;
    let mut index = 0;

    loop {
        let (left, right) = match (chunks_a.next(), chunks_b.next()) {
            (None, None) => break,
            (left, right) => (left.unwrap_or_default(), right.unwrap_or_default()),
        };
        let distance = exact_distance(left, right)?;
        trace!(index, distance, "window compared");
        bound = checked::add(bound, distance)?;
        checked::inc(&mut index)?;
    }

    Ok(bound)
}

/// Number of windows of at most `window` bytes needed to cover `len` bytes.
///
/// # Errors
///
/// Returns an arithmetic error if `window` is zero.
pub fn window_count(len: usize, window: usize) -> Result<usize> {
    let full = checked::div(len, window)?;
    let partial = usize::from(checked::rem(len, window)? != 0);
    Ok(checked::add(full, partial)?)
}
