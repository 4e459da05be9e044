//! Exact Levenshtein distance.
//!
//! Classic dynamic programming over two rolling rows, so scratch memory is
//! `O(min(|a|, |b|))` while time stays `O(|a| * |b|)`.

use crate::core::checked;
use crate::distance::traits::Metric;
use crate::error::{AllocationError, Result};

/// Exact Levenshtein distance under unit insertion, deletion and
/// substitution costs.
///
/// # Examples
///
/// ```
/// use lev_bounds::distance::{Exact, Metric};
///
/// assert_eq!(Exact.compute(b"kitten", b"sitting").unwrap(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Exact;

impl Metric for Exact {
    fn compute(&self, a: &[u8], b: &[u8]) -> Result<usize> {
        exact_distance(a, b)
    }

    fn name(&self) -> &'static str {
        "distance"
    }

    fn description(&self) -> &'static str {
        "Exact Levenshtein distance (quadratic time)"
    }
}

/// Computes the Levenshtein distance between `a` and `b`.
///
/// A common prefix and suffix never change the distance, so they are
/// stripped first. Of what remains, the shorter input indexes the columns
/// of the two scratch rows and the longer input drives the outer loop.
///
/// # Errors
///
/// Returns an arithmetic error if the scratch size computation overflows,
/// or an allocation error if a scratch row cannot be reserved.
pub fn exact_distance(a: &[u8], b: &[u8]) -> Result<usize> {
    let (a, b) = strip_common_affixes(a, b);
    let (small, large) = if a.len() < b.len() { (a, b) } else { (b, a) };

    let entries = checked::add(small.len(), 1)?;
    // Rejects rows whose byte size cannot even be expressed.
    checked::mul(entries, size_of::<usize>())?;

    let mut previous = scratch_row(entries)?;
    let mut current = scratch_row(entries)?;
    previous.extend(0..entries);
    current.resize(entries, 0);

    // Every cell is at most `large.len()`, so the `+ 1`s below cannot overflow.
    for (i, &byte) in large.iter().enumerate() {
        current[0] = i + 1;
        for (j, &other) in small.iter().enumerate() {
            let substitution = previous[j] + usize::from(byte != other);
            let deletion = previous[j + 1] + 1;
            let insertion = current[j] + 1;
            current[j + 1] = substitution.min(deletion).min(insertion);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    Ok(previous[small.len()])
}

/// Removes the longest common prefix, then the longest common suffix.
fn strip_common_affixes<'a>(a: &'a [u8], b: &'a [u8]) -> (&'a [u8], &'a [u8]) {
    let prefix = a.iter().zip(b).take_while(|(x, y)| x == y).count();
    let (a, b) = (&a[prefix..], &b[prefix..]);
    let suffix = a
        .iter()
        .rev()
        .zip(b.iter().rev())
        .take_while(|(x, y)| x == y)
        .count();
    (&a[..a.len() - suffix], &b[..b.len() - suffix])
}

/// Reserves an empty row with room for exactly `entries` values.
fn scratch_row(entries: usize) -> Result<Vec<usize>> {
    let mut row = Vec::new();
    row.try_reserve_exact(entries)
        .map_err(|_| AllocationError::ScratchRow { entries })?;
    Ok(row)
}
