//! Bounded reveals: partial filling of gaps and dilation of selected runs.

use std::ops::{Range, RangeBounds};

use crate::{Margin, Selection, bounds::resolve_range};

impl Selection {
    /// Reveals up to `margin.head` unselected positions of `range` from the left and
    /// up to `margin.tail` from the right.
    ///
    /// The left walk visits the gaps of `range` in ascending order, filling whole
    /// gaps while they fit the remaining budget and then the leading part of the
    /// first gap that does not. The right walk then does the same in descending
    /// order with trailing parts, over whatever the left walk left unselected, so no
    /// position is counted twice.
    ///
    /// Returns the number of positions revealed.
    pub fn include_partially<R: RangeBounds<i64>>(
        &mut self,
        range: R,
        margin: impl Into<Margin>,
    ) -> u64 {
        match resolve_range(&range, self.universe) {
            Some(span) => self.reveal_partially(span, margin.into()),
            None => 0,
        }
    }

    /// Reveals up to `margin.head` positions immediately before and up to
    /// `margin.tail` positions immediately after every selected run of `range`.
    ///
    /// The reveal is bounded by the ends of `range` and by the neighbouring runs, as
    /// they were before the call: it is a bounded dilation of the selection
    /// restricted to `range`.
    ///
    /// Returns the number of positions revealed.
    pub fn include_expand<R: RangeBounds<i64>>(
        &mut self,
        range: R,
        margin: impl Into<Margin>,
    ) -> u64 {
        match resolve_range(&range, self.universe) {
            Some(span) => self.reveal_expand(span, margin.into()),
            None => 0,
        }
    }

    pub(crate) fn reveal_partially(&mut self, span: Range<u64>, margin: Margin) -> u64 {
        let mut revealed = 0;

        let mut budget = margin.head;
        if budget > 0 {
            let gaps: Vec<_> = self.runs_within(span.start, span.end, false).collect();
            for gap in gaps {
                if budget == 0 {
                    break;
                }
                let take = budget.min(gap.end - gap.start);
                revealed += self.apply(gap.start, gap.start + take, true);
                budget -= take;
            }
        }

        let mut budget = margin.tail;
        if budget > 0 {
            let gaps: Vec<_> = self.runs_within(span.start, span.end, false).collect();
            for gap in gaps.into_iter().rev() {
                if budget == 0 {
                    break;
                }
                let take = budget.min(gap.end - gap.start);
                revealed += self.apply(gap.end - take, gap.end, true);
                budget -= take;
            }
        }

        revealed
    }

    pub(crate) fn reveal_expand(&mut self, span: Range<u64>, margin: Margin) -> u64 {
        if margin.is_zero() {
            return 0;
        }
        let runs: Vec<_> = self.runs_within(span.start, span.end, true).collect();
        let mut fills = Vec::with_capacity(runs.len() * 2);
        let mut prev_end = span.start;
        for (i, run) in runs.iter().enumerate() {
            let from = run.start.saturating_sub(margin.head).max(prev_end);
            if from < run.start {
                fills.push(from..run.start);
            }
            let next_start = runs.get(i + 1).map_or(span.end, |next| next.start);
            let to = run.end.saturating_add(margin.tail).min(next_start);
            if run.end < to {
                fills.push(run.end..to);
            }
            prev_end = run.end;
        }
        fills
            .into_iter()
            .map(|fill| self.apply(fill.start, fill.end, true))
            .sum()
    }
}
