//! Translation between physical positions and virtual indices, and the edits
//! that take their range in virtual space.
//!
//! Out-of-range virtual endpoints of an edit are clamped to the universe
//! boundaries rather than rejected: partial reveals routinely pass widths that
//! run past the end of the selection.

use std::ops::{Bound, Range, RangeBounds};

use romkit_common::{Result, error::Error};

use crate::{Margin, Selection, rank::RankIndex};

impl Selection {
    /// Returns the rank of the selected position `pos` among all selected positions.
    ///
    /// Fails with `OutOfRange` if `pos >= universe` and with `NotSelected` if `pos`
    /// is not part of the selection.
    pub fn physical_to_virtual(&self, pos: u64) -> Result<u64> {
        if pos >= self.universe {
            return Err(Error::out_of_range(pos as i128, self.universe));
        }
        self.rank_index()
            .rank(pos)
            .ok_or_else(|| Error::not_selected(pos))
    }

    /// Returns the `index`-th selected position in ascending order.
    ///
    /// Negative indices count back from the end. Fails with `OutOfRange` outside
    /// `[-len, len)`.
    pub fn virtual_to_physical(&self, index: i64) -> Result<u64> {
        let rank = self.wrap_virtual(index);
        if rank < 0 || rank >= self.len as i128 {
            return Err(Error::out_of_range(index as i128, self.len));
        }
        self.rank_index()
            .select(rank as u64)
            .ok_or_else(|| Error::out_of_range(index as i128, self.len))
    }

    /// Returns the selected positions whose virtual indices fall inside `range`,
    /// as a new selection over the same universe.
    pub fn virtual_range_to_physical<R: RangeBounds<i64>>(&self, range: R) -> Selection {
        match self.physical_span(&range) {
            Some(span) => self.restricted(span.start, span.end),
            None => Selection::empty(self.universe),
        }
    }

    /// [`include`](Self::include) with the range given in virtual indices.
    ///
    /// The gaps between the selected positions at the two ends are filled too.
    pub fn include_virtual<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        match self.physical_span(&range) {
            Some(span) => self.apply(span.start, span.end, true),
            None => 0,
        }
    }

    /// [`exclude`](Self::exclude) with the range given in virtual indices.
    pub fn exclude_virtual<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        match self.physical_span(&range) {
            Some(span) => self.apply(span.start, span.end, false),
            None => 0,
        }
    }

    /// [`include_partially`](Self::include_partially) with the range given in
    /// virtual indices.
    pub fn include_partially_virtual<R: RangeBounds<i64>>(
        &mut self,
        range: R,
        margin: impl Into<Margin>,
    ) -> u64 {
        match self.physical_span(&range) {
            Some(span) => self.reveal_partially(span, margin.into()),
            None => 0,
        }
    }

    /// [`include_expand`](Self::include_expand) with the range given in virtual
    /// indices.
    pub fn include_expand_virtual<R: RangeBounds<i64>>(
        &mut self,
        range: R,
        margin: impl Into<Margin>,
    ) -> u64 {
        match self.physical_span(&range) {
            Some(span) => self.reveal_expand(span, margin.into()),
            None => 0,
        }
    }

    pub(crate) fn rank_index(&self) -> &RankIndex {
        self.rank
            .get_or_init(|| RankIndex::build(self.intervals()))
    }

    /// Resolves a negative virtual index against the current length.
    #[inline]
    fn wrap_virtual(&self, index: i64) -> i128 {
        let index = index as i128;
        if index < 0 {
            index + self.len as i128
        } else {
            index
        }
    }

    /// Physical position of the already wrapped virtual index `rank`, clamped to
    /// `0` below the selection and to the universe above it.
    fn clamped_position(&self, rank: i128) -> u64 {
        if rank < 0 {
            0
        } else if rank >= self.len as i128 {
            self.universe
        } else {
            // In range, so the rank index always resolves it.
            self.rank_index()
                .select(rank as u64)
                .unwrap_or(self.universe)
        }
    }

    /// Physical half-open span covered by a virtual range, or `None` if empty.
    fn physical_span<R: RangeBounds<i64>>(&self, range: &R) -> Option<Range<u64>> {
        let start = match range.start_bound() {
            Bound::Unbounded => 0,
            Bound::Included(&v) => self.clamped_position(self.wrap_virtual(v)),
            Bound::Excluded(&v) => self.clamped_position(self.wrap_virtual(v) + 1),
        };
        let end = match range.end_bound() {
            Bound::Unbounded => self.universe,
            Bound::Excluded(&v) => self.clamped_position(self.wrap_virtual(v)),
            Bound::Included(&v) => self.clamped_position(self.wrap_virtual(v) + 1),
        };
        (start < end).then_some(start..end)
    }
}
