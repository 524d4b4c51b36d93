//! Normalization of caller-supplied index ranges.
//!
//! Callers address positions with signed indices: negative values count back from
//! the end of the addressed space, unbounded ends stand for its boundaries, and
//! anything past the end is clipped. The functions here turn such a
//! `RangeBounds<i64>` into a plain half-open `u64` range, or `None` when nothing is
//! left of it.

use std::ops::{Bound, Range, RangeBounds};

/// Resolves a signed index against a space of `size` positions.
///
/// Non-negative indices are clipped to `size`. A negative index `x` with
/// `|x| <= size` maps to `size + x`; more negative indices map to `None`.
#[inline]
pub fn wrap_index(index: i64, size: u64) -> Option<u64> {
    if index >= 0 {
        Some((index as u64).min(size))
    } else {
        let back = index.unsigned_abs();
        (back <= size).then(|| size - back)
    }
}

/// Resolves `range` against a space of `size` positions.
///
/// Returns the non-empty half-open range covered by `range`, or `None` if the
/// normalized range is empty.
///
/// - An unbounded start is `0`, an unbounded end is `size`.
/// - Ends beyond `size` are clipped to `size`.
/// - Negative indices are taken relative to `size`; indices further back than
///   `-size` clip to `0`, on either end.
/// - `Excluded` starts and `Included` ends are shifted by one after the negative
///   index has been resolved, so `..=-1` covers the whole space.
pub fn resolve_range<R: RangeBounds<i64>>(range: &R, size: u64) -> Option<Range<u64>> {
    let start = match range.start_bound() {
        Bound::Unbounded => 0,
        Bound::Included(&x) => wrap_index(x, size).unwrap_or(0),
        Bound::Excluded(&x) => wrap_index(x, size).map_or(0, |v| v.saturating_add(1)),
    };
    let end = match range.end_bound() {
        Bound::Unbounded => size,
        Bound::Excluded(&x) => wrap_index(x, size).unwrap_or(0),
        Bound::Included(&x) => wrap_index(x, size).map_or(0, |v| v.saturating_add(1)),
    };
    let end = end.min(size);
    (start < end).then_some(start..end)
}

/// Clips a physical `u64` range to `[0, size)`, returning `None` if nothing is left.
#[inline]
pub fn clip_range(range: Range<u64>, size: u64) -> Option<Range<u64>> {
    let end = range.end.min(size);
    (range.start < end).then_some(range.start..end)
}
