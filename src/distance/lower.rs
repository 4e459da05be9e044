//! Linear-time lower bound from byte-frequency histograms.

use crate::core::checked;
use crate::distance::traits::Metric;
use crate::error::Result;

/// Number of distinct byte values.
const ALPHABET: usize = 256;

/// Lower bound on the Levenshtein distance.
///
/// Runs in `O(|a| + |b|)` time with two fixed 256-entry histograms.
#[derive(Debug, Clone, Copy, Default)]
pub struct Lower;

impl Metric for Lower {
    fn compute(&self, a: &[u8], b: &[u8]) -> Result<usize> {
        lower_bound(a, b)
    }

    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Lower bound from byte frequencies (linear time)"
    }
}

/// Computes a value never larger than the Levenshtein distance of `a` and `b`.
///
/// Two bounds are combined:
/// - the largest per-byte-value count difference, since each edit changes
///   the count of any one value by at most one;
/// - half of the summed count differences plus the length difference,
///   rounded up, since one edit can fix at most two units of that total.
///
/// # Errors
///
/// Returns an arithmetic error if accumulating the differences overflows.
///
/// # Examples
///
/// ```
/// use lev_bounds::distance::lower_bound;
///
/// assert_eq!(lower_bound(b"aaaa", b"bbbb").unwrap(), 4);
/// ```
pub fn lower_bound(a: &[u8], b: &[u8]) -> Result<usize> {
    let hist_a = histogram(a)?;
    let hist_b = histogram(b)?;

    let mut max_diff = 0;
    let mut sum_diff = 0;
    for (&x, &y) in hist_a.iter().zip(hist_b.iter()) {
        let diff = x.abs_diff(y);
        max_diff = max_diff.max(diff);
        sum_diff = checked::add(sum_diff, diff)?;
    }

    let total = checked::add(sum_diff, a.len().abs_diff(b.len()))?;
    let half = if total == 0 {
        0
    } else {
        checked::add(1, checked::div(total - 1, 2)?)?
    };

    Ok(max_diff.max(half))
}

/// Counts occurrences of every byte value.
fn histogram(bytes: &[u8]) -> Result<[usize; ALPHABET]> {
    let mut counts = [0usize; ALPHABET];
    for &byte in bytes {
        checked::inc(&mut counts[usize::from(byte)])?;
    }
    Ok(counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::exact_distance;
    use test_case::test_case;

    #[test_case(b"aaaa", b"bbbb", 4 ; "disjoint alphabets")]
    #[test_case(b"", b"abc", 3 ; "empty left")]
    #[test_case(b"", b"", 0 ; "both empty")]
    #[test_case(b"abc", b"cba", 0 ; "anagram")]
    #[test_case(b"ab", b"abcd", 2 ; "suffix")]
    #[test_case(b"aab", b"abb", 1 ; "one swap of counts")]
    fn test_lower_bound(a: &[u8], b: &[u8], expected: usize) {
        assert_eq!(lower_bound(a, b).unwrap(), expected);
    }

    #[test]
    fn test_histogram() {
        let counts = histogram(b"abca\xff").unwrap();
        assert_eq!(counts[usize::from(b'a')], 2);
        assert_eq!(counts[usize::from(b'b')], 1);
        assert_eq!(counts[0xff], 1);
        assert_eq!(counts.iter().sum::<usize>(), 5);
    }

    #[test]
    fn test_not_above_exact() {
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"kitten", b"sitting"),
            (b"abcabc", b"cbacba"),
            (b"hello world", b"world hello"),
            (b"\x00\x01\x02", b"\x02\x02\x02\x02\x02"),
        ];
        for (a, b) in pairs {
            assert!(lower_bound(a, b).unwrap() <= exact_distance(a, b).unwrap());
        }
    }

    #[test]
    fn test_metric_impl() {
        assert_eq!(Lower.name(), "lower");
        assert_eq!(Lower.compute(b"x", b"").unwrap(), 1);
    }
}
