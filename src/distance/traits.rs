//! Metric trait definition.
//!
//! Defines the common interface of the exact distance and its two bounds,
//! so callers can pick one at runtime.

use crate::error::Result;

/// A computation over two byte sequences yielding an edit count.
///
/// Implementations are pure functions of their inputs: the same pair of
/// inputs always yields the same value, and nothing is shared between
/// calls.
///
/// # Examples
///
/// ```
/// use lev_bounds::distance::{Exact, Lower, Metric, Upper};
///
/// let metrics: [&dyn Metric; 3] = [&Lower, &Exact, &Upper::new()];
/// let values: Vec<usize> = metrics
///     .iter()
///     .map(|m| m.compute(b"kitten", b"sitting").unwrap())
///     .collect();
/// assert!(values[0] <= values[1] && values[1] <= values[2]);
/// ```
pub trait Metric: Send + Sync {
    /// Computes the metric for `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns an error if scratch memory cannot be obtained or an
    /// intermediate size computation overflows.
    fn compute(&self, a: &[u8], b: &[u8]) -> Result<usize>;

    /// Returns the name of the metric, matching its [`super::Mode`].
    fn name(&self) -> &'static str;

    /// Returns a description of the metric.
    fn description(&self) -> &'static str {
        "No description available"
    }
}
