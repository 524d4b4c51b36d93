//! The sparse interval selection.

use std::{
    cell::OnceCell,
    fmt,
    ops::{Range, RangeBounds},
};

use itertools::Itertools;
use romkit_common::{Result, error::Error, verify_arg};

use crate::{
    bounds::{clip_range, resolve_range},
    rank::RankIndex,
    runs::Runs,
};

/// A mutable subset of the positions in `[0, universe)`, stored as a sorted
/// list of breakpoints.
///
/// Each breakpoint `p` marks a change of membership between `p - 1` and `p`.
/// Membership past the last breakpoint is always `false`, and the change at `0`
/// is never stored: an odd number of breakpoints means position `0` is selected,
/// an even number means it is not. With this encoding the full universe is the
/// single breakpoint `[universe]`, the empty selection has no breakpoints at all,
/// and the complement is obtained by toggling the presence of `universe`.
///
/// Invariants (checked by [`check_invariants`](Self::check_invariants)):
/// - breakpoints are strictly increasing and lie in `(0, universe]`;
/// - adjacent runs never touch (such runs coalesce and their breakpoints vanish);
/// - the cached length equals the total width of the selected runs.
///
/// Complexity overview:
/// - `len`, `is_empty`, `is_full`: O(1)
/// - `contains`, `interval_at`, `next_interval`, `previous_interval`: O(log k)
/// - `include`, `exclude`: O(log k) to locate the range, plus the breakpoints it
///   covers, plus the `Vec` splice
/// - `virtual_to_physical`, `physical_to_virtual`: O(k) for the first call after a
///   mutation, O(log k) afterwards
#[derive(Clone)]
pub struct Selection {
    pub(crate) universe: u64,
    pub(crate) breaks: Vec<u64>,
    pub(crate) len: u64,
    pub(crate) rank: OnceCell<RankIndex>,
}

impl Selection {
    /// Creates a selection over `[0, universe)` with nothing selected.
    pub fn empty(universe: u64) -> Selection {
        Selection {
            universe,
            breaks: Vec::new(),
            len: 0,
            rank: OnceCell::new(),
        }
    }

    /// Creates a selection over `[0, universe)` with every position selected.
    pub fn full(universe: u64) -> Selection {
        let breaks = if universe > 0 {
            vec![universe]
        } else {
            Vec::new()
        };
        Selection {
            universe,
            breaks,
            len: universe,
            rank: OnceCell::new(),
        }
    }

    /// Creates a selection over `[0, universe)` from a list of half-open ranges.
    ///
    /// The ranges may come in any order, overlap or touch; they are merged.
    /// Portions beyond the universe are clipped and empty ranges are ignored.
    pub fn from_intervals(
        universe: u64,
        intervals: impl IntoIterator<Item = Range<u64>>,
    ) -> Selection {
        let mut selection = Selection::empty(universe);
        for range in intervals {
            if let Some(range) = clip_range(range, universe) {
                selection.apply(range.start, range.end, true);
            }
        }
        selection
    }

    /// Creates a selection directly from its breakpoint encoding.
    ///
    /// Fails if the breakpoints are not strictly increasing within `(0, universe]`.
    pub fn from_breakpoints(universe: u64, breaks: Vec<u64>) -> Result<Selection> {
        verify_arg!(breaks, breaks.first().is_none_or(|&b| b > 0));
        verify_arg!(breaks, breaks.last().is_none_or(|&b| b <= universe));
        verify_arg!(breaks, breaks.iter().tuple_windows().all(|(a, b)| a < b));
        let mut selection = Selection {
            universe,
            breaks,
            len: 0,
            rank: OnceCell::new(),
        };
        selection.len = selection.intervals().map(|r| r.end - r.start).sum();
        Ok(selection)
    }

    /// The exclusive upper bound `U` of the positions this selection ranges over.
    #[inline]
    pub fn universe(&self) -> u64 {
        self.universe
    }

    /// Number of selected positions.
    #[inline]
    pub fn len(&self) -> u64 {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.universe
    }

    /// The raw breakpoint encoding.
    #[inline]
    pub fn breakpoints(&self) -> &[u64] {
        &self.breaks
    }

    /// Number of maximal selected runs.
    pub fn interval_count(&self) -> usize {
        self.breaks.len().div_ceil(2)
    }

    /// Returns `true` iff `pos` is selected. Positions outside the universe are
    /// never selected.
    #[inline]
    pub fn contains(&self, pos: u64) -> bool {
        pos < self.universe && self.state(pos)
    }

    /// Iterates over the selected runs in ascending order.
    pub fn intervals(&self) -> Runs<'_> {
        self.runs_within(0, self.universe, true)
    }

    /// Iterates over the unselected runs of `[0, universe)` in ascending order.
    pub fn gaps(&self) -> Runs<'_> {
        self.runs_within(0, self.universe, false)
    }

    /// Iterates over the selected runs clipped to `range`.
    pub fn intervals_within<R: RangeBounds<i64>>(&self, range: R) -> Runs<'_> {
        match resolve_range(&range, self.universe) {
            Some(r) => self.runs_within(r.start, r.end, true),
            None => self.runs_within(0, 0, true),
        }
    }

    /// Iterates over the unselected runs clipped to `range`.
    pub fn gaps_within<R: RangeBounds<i64>>(&self, range: R) -> Runs<'_> {
        match resolve_range(&range, self.universe) {
            Some(r) => self.runs_within(r.start, r.end, false),
            None => self.runs_within(0, 0, false),
        }
    }

    /// Iterates over every selected position in ascending order.
    pub fn positions(&self) -> impl Iterator<Item = u64> + '_ {
        self.intervals().flatten()
    }

    /// The smallest selected position.
    pub fn first(&self) -> Option<u64> {
        self.intervals().next().map(|r| r.start)
    }

    /// The largest selected position.
    pub fn last(&self) -> Option<u64> {
        // The last breakpoint always closes a run.
        self.breaks.last().map(|&b| b - 1)
    }

    /// Returns the selected run containing `pos`, if any.
    pub fn interval_at(&self, pos: u64) -> Option<Range<u64>> {
        if !self.contains(pos) {
            return None;
        }
        let idx = self.breaks.partition_point(|&b| b <= pos);
        let start = if idx == 0 { 0 } else { self.breaks[idx - 1] };
        Some(start..self.breaks[idx])
    }

    /// Returns the first selected run that starts strictly after `pos`.
    pub fn next_interval(&self, pos: u64) -> Option<Range<u64>> {
        let k = self.breaks.len();
        let idx = self.breaks.partition_point(|&b| b <= pos);
        // A breakpoint opens a run iff an even number of breakpoints, itself
        // included, remain from it.
        let open = (idx..k).find(|&i| (k - i) % 2 == 0)?;
        Some(self.breaks[open]..self.breaks[open + 1])
    }

    /// Returns the last selected run that ends at or before `pos`.
    pub fn previous_interval(&self, pos: u64) -> Option<Range<u64>> {
        let k = self.breaks.len();
        let idx = self.breaks.partition_point(|&b| b <= pos);
        let close = (0..idx).rev().find(|&i| (k - i) % 2 == 1)?;
        let start = if close == 0 { 0 } else { self.breaks[close - 1] };
        Some(start..self.breaks[close])
    }

    /// Returns the complement `[0, universe) \ self` as a new selection.
    pub fn complement(&self) -> Selection {
        let mut result = Selection {
            universe: self.universe,
            breaks: self.breaks.clone(),
            len: self.len,
            rank: OnceCell::new(),
        };
        result.invert();
        result
    }

    /// Replaces this selection with its complement.
    pub fn invert(&mut self) {
        if self.universe == 0 {
            return;
        }
        if self.breaks.last() == Some(&self.universe) {
            self.breaks.pop();
        } else {
            self.breaks.push(self.universe);
        }
        self.len = self.universe - self.len;
        self.rank.take();
    }

    /// Returns a new selection over the same universe containing only the
    /// positions of `self` that fall inside `range`.
    pub fn subslice<R: RangeBounds<i64>>(&self, range: R) -> Selection {
        match resolve_range(&range, self.universe) {
            Some(r) => self.restricted(r.start, r.end),
            None => Selection::empty(self.universe),
        }
    }

    /// Lifts this selection onto a universe `factor` times larger, mapping every
    /// run `[a, b)` to `[a * factor, b * factor)`.
    ///
    /// This is how a selection of fixed-width elements becomes a selection of
    /// their bytes.
    pub fn scale(&self, factor: u64) -> Result<Selection> {
        verify_arg!(factor, factor > 0);
        let universe = self
            .universe
            .checked_mul(factor)
            .ok_or_else(|| Error::invalid_arg("factor", "scaled universe overflows u64"))?;
        Ok(Selection {
            universe,
            breaks: self.breaks.iter().map(|&b| b * factor).collect(),
            len: self.len * factor,
            rank: OnceCell::new(),
        })
    }

    /// Adds the positions of `range` to the selection.
    ///
    /// Returns the number of positions that became selected.
    pub fn include<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        match resolve_range(&range, self.universe) {
            Some(r) => self.apply(r.start, r.end, true),
            None => 0,
        }
    }

    /// Removes the positions of `range` from the selection.
    ///
    /// Returns the number of positions that became unselected.
    pub fn exclude<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        match resolve_range(&range, self.universe) {
            Some(r) => self.apply(r.start, r.end, false),
            None => 0,
        }
    }

    /// Panics if any representation invariant is violated.
    pub fn check_invariants(&self) {
        if let Some(&first) = self.breaks.first() {
            assert!(first > 0, "breakpoint 0 must not be stored");
        }
        if let Some(&last) = self.breaks.last() {
            assert!(
                last <= self.universe,
                "breakpoint {last} beyond universe {}",
                self.universe
            );
        }
        for (a, b) in self.breaks.iter().tuple_windows() {
            assert!(a < b, "breakpoints {a} and {b} are not strictly increasing");
        }
        let width: u64 = self.intervals().map(|r| r.end - r.start).sum();
        assert_eq!(width, self.len, "cached length is stale");
        if let Some(index) = self.rank.get() {
            assert_eq!(index.count(), self.len, "rank index is stale");
        }
    }

    /// Membership of `pos`, which must lie below the universe.
    #[inline]
    pub(crate) fn state(&self, pos: u64) -> bool {
        let after = self.breaks.len() - self.breaks.partition_point(|&b| b <= pos);
        after % 2 == 1
    }

    /// Runs of the `want` state within `[start, end)`, `end <= universe`.
    pub(crate) fn runs_within(&self, start: u64, end: u64, want: bool) -> Runs<'_> {
        if start >= end {
            return Runs::new(&[], 0, 0, false, want);
        }
        let idx = self.breaks.partition_point(|&b| b <= start);
        Runs::new(&self.breaks[idx..], start, end, self.state(start), want)
    }

    /// Number of selected positions within `[start, end)`, `start < end <= universe`.
    pub(crate) fn count_within(&self, start: u64, end: u64) -> u64 {
        if start == 0 && end == self.universe {
            return self.len;
        }
        self.runs_within(start, end, true)
            .map(|r| r.end - r.start)
            .sum()
    }

    /// Copy of `self` restricted to `[start, end)`.
    pub(crate) fn restricted(&self, start: u64, end: u64) -> Selection {
        let mut result = Selection::empty(self.universe);
        let first = self.breaks.partition_point(|&b| b <= start);
        let last = self.breaks.partition_point(|&b| b < end);
        // Breakpoints strictly inside the window survive; the window edges become
        // breakpoints wherever a selected run touches them.
        if start > 0 && self.state(start) {
            result.breaks.push(start);
        }
        result.breaks.extend_from_slice(&self.breaks[first..last]);
        if self.state(end - 1) {
            result.breaks.push(end);
        }
        result.len = self.count_within(start, end);
        result
    }

    /// Sets every position of `[start, end)` to `value`, with
    /// `start < end <= universe`.
    ///
    /// Returns the number of positions whose membership changed.
    pub(crate) fn apply(&mut self, start: u64, end: u64, value: bool) -> u64 {
        debug_assert!(start < end && end <= self.universe);
        let before = self.count_within(start, end);
        let after = if value { end - start } else { 0 };
        if before == after {
            return 0;
        }

        // Inside the range membership becomes uniform, so every toggle in
        // `[start, end]` is dropped and the edges are re-derived from the
        // neighbours. The toggle at 0 is implied by the parity.
        let left = start > 0 && self.state(start - 1);
        let right = end < self.universe && self.state(end);
        let first = self.breaks.partition_point(|&b| b < start);
        let last = self.breaks.partition_point(|&b| b <= end);
        let open = (start > 0 && left != value).then_some(start);
        let close = (right != value).then_some(end);
        self.breaks.splice(first..last, open.into_iter().chain(close));

        self.len = self.len - before + after;
        self.rank.take();
        log::trace!(
            "selection {}: [{start}, {end}) <- {value}, {before} -> {after} selected",
            self.universe
        );
        before.abs_diff(after)
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.universe == other.universe && self.breaks == other.breaks
    }
}

impl Eq for Selection {}

impl fmt::Debug for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selection")
            .field("universe", &self.universe)
            .field("len", &self.len)
            .field("intervals", &self.intervals().collect::<Vec<_>>())
            .finish()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} of {}",
            self.intervals()
                .format_with(", ", |r, f| f(&format_args!("[{}, {})", r.start, r.end))),
            self.universe
        )
    }
}
