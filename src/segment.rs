//! Signal segmentation into fixed-size analysis windows
//!
//! Splits a sample sequence into sequential, non-overlapping windows. All
//! windows have the same length except possibly the last, which covers
//! whatever remains of the signal.

use std::ops::Range;

/// Iterate over the window boundaries of a signal
///
/// Produces half-open index ranges `[start, end)` that tile `[0, len)`
/// exactly: consecutive, non-overlapping, each at most `window` long, with
/// only the final range possibly shorter. An empty signal produces no
/// ranges.
///
/// The iterator is lazy and can be cloned to restart the traversal. The
/// caller is responsible for validating `window` (the engine requires at
/// least 2 samples per window before any processing starts).
///
/// # Arguments
///
/// * `len` - Signal length in samples
/// * `window` - Window size in samples (>= 1)
///
/// # Example
///
/// ```
/// use domfreq::segment::chunk_ranges;
///
/// let ranges: Vec<_> = chunk_ranges(10, 4).collect();
/// assert_eq!(ranges, vec![0..4, 4..8, 8..10]);
/// ```
pub fn chunk_ranges(len: usize, window: usize) -> impl Iterator<Item = Range<usize>> + Clone {
    let step = window.max(1);
    (0..len)
        .step_by(step)
        .map(move |start| start..start.saturating_add(step).min(len))
}
