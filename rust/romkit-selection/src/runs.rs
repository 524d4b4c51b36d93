//! Iteration over the selected runs (or the gaps) of a selection.

use std::{iter::FusedIterator, ops::Range};

/// Iterator over the maximal runs of one membership state within a window of
/// the universe.
///
/// Produced by [`Selection::intervals`](crate::Selection::intervals),
/// [`Selection::gaps`](crate::Selection::gaps) and their windowed counterparts.
/// Runs are yielded in ascending order, clipped to the window, and are never empty.
#[derive(Clone)]
pub struct Runs<'a> {
    /// Breakpoints strictly above `cursor`.
    breaks: &'a [u64],
    /// Start of the segment not yet yielded.
    cursor: u64,
    /// Exclusive end of the window.
    end: u64,
    /// Membership at `cursor`.
    inside: bool,
    /// Membership state being reported.
    want: bool,
}

impl<'a> Runs<'a> {
    /// Creates an iterator over the `want`-state runs of `[cursor, end)`.
    ///
    /// `breaks` must contain exactly the breakpoints above `cursor`, and `inside`
    /// must be the membership at `cursor`.
    pub(crate) fn new(breaks: &'a [u64], cursor: u64, end: u64, inside: bool, want: bool) -> Self {
        Runs {
            breaks,
            cursor,
            end,
            inside,
            want,
        }
    }
}

impl Iterator for Runs<'_> {
    type Item = Range<u64>;

    fn next(&mut self) -> Option<Range<u64>> {
        while self.cursor < self.end {
            let toggle = match self.breaks.split_first() {
                Some((&b, rest)) => {
                    self.breaks = rest;
                    b.min(self.end)
                }
                None => self.end,
            };
            let segment = self.cursor..toggle;
            let state = self.inside;
            self.cursor = toggle;
            self.inside = !self.inside;
            if state == self.want && !segment.is_empty() {
                return Some(segment);
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor >= self.end {
            (0, Some(0))
        } else {
            (0, Some(self.breaks.len() / 2 + 1))
        }
    }
}

impl FusedIterator for Runs<'_> {}
