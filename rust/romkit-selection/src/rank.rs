//! Prefix-sum index over the runs of a selection.
//!
//! The index records, for every selected run, how many positions are selected
//! before it. With it, both directions of index translation become a binary
//! search over the runs. A selection builds the index lazily on the first
//! translation after a mutation and drops it on the next mutation.

use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RankedRun {
    start: u64,
    end: u64,
    /// Number of selected positions in all earlier runs.
    before: u64,
}

impl RankedRun {
    #[inline]
    fn through(&self) -> u64 {
        self.before + (self.end - self.start)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RankIndex {
    runs: Vec<RankedRun>,
}

impl RankIndex {
    pub fn build(runs: impl Iterator<Item = Range<u64>>) -> RankIndex {
        let mut before = 0;
        let runs = runs
            .map(|run| {
                let ranked = RankedRun {
                    start: run.start,
                    end: run.end,
                    before,
                };
                before += run.end - run.start;
                ranked
            })
            .collect();
        RankIndex { runs }
    }

    /// Total number of indexed positions.
    pub fn count(&self) -> u64 {
        self.runs.last().map_or(0, RankedRun::through)
    }

    /// Returns the `rank`-th indexed position (zero-based), or `None` if
    /// `rank >= count()`.
    pub fn select(&self, rank: u64) -> Option<u64> {
        let idx = self.runs.partition_point(|run| run.through() <= rank);
        let run = self.runs.get(idx)?;
        Some(run.start + (rank - run.before))
    }

    /// Returns the rank of `pos` among the indexed positions, or `None` if `pos`
    /// is not indexed.
    pub fn rank(&self, pos: u64) -> Option<u64> {
        let idx = self.runs.partition_point(|run| run.end <= pos);
        let run = self.runs.get(idx)?;
        (run.start <= pos).then(|| run.before + (pos - run.start))
    }
}
