//! Reference model of a selection: one flag per position.

use std::ops::Range;

/// A selection over `[0, universe)` stored as one `bool` per position.
///
/// Every operation is a straightforward scan, which makes it slow but easy to
/// trust. Ranges passed to the edit methods must already be normalized
/// (`start <= end <= universe`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSet {
    flags: Vec<bool>,
}

impl ModelSet {
    pub fn empty(universe: u64) -> ModelSet {
        ModelSet {
            flags: vec![false; universe as usize],
        }
    }

    pub fn full(universe: u64) -> ModelSet {
        ModelSet {
            flags: vec![true; universe as usize],
        }
    }

    pub fn from_intervals(universe: u64, intervals: &[Range<u64>]) -> ModelSet {
        let mut model = ModelSet::empty(universe);
        for r in intervals {
            model.include(r.clone());
        }
        model
    }

    pub fn universe(&self) -> u64 {
        self.flags.len() as u64
    }

    pub fn len(&self) -> u64 {
        self.flags.iter().filter(|&&f| f).count() as u64
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, pos: u64) -> bool {
        self.flags.get(pos as usize).copied().unwrap_or(false)
    }

    /// Sets the range and returns how many flags changed.
    pub fn include(&mut self, range: Range<u64>) -> u64 {
        self.set(range, true)
    }

    pub fn exclude(&mut self, range: Range<u64>) -> u64 {
        self.set(range, false)
    }

    fn set(&mut self, range: Range<u64>, value: bool) -> u64 {
        let mut changed = 0;
        for pos in range {
            let flag = &mut self.flags[pos as usize];
            if *flag != value {
                *flag = value;
                changed += 1;
            }
        }
        changed
    }

    pub fn complement(&self) -> ModelSet {
        ModelSet {
            flags: self.flags.iter().map(|f| !f).collect(),
        }
    }

    pub fn intervals(&self) -> Vec<Range<u64>> {
        self.runs(true)
    }

    pub fn gaps(&self) -> Vec<Range<u64>> {
        self.runs(false)
    }

    fn runs(&self, want: bool) -> Vec<Range<u64>> {
        let mut runs = Vec::new();
        let mut start = None;
        for (pos, &flag) in self.flags.iter().enumerate() {
            let pos = pos as u64;
            match (flag == want, start) {
                (true, None) => start = Some(pos),
                (false, Some(s)) => {
                    runs.push(s..pos);
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push(s..self.universe());
        }
        runs
    }

    pub fn positions(&self) -> Vec<u64> {
        (0..self.universe()).filter(|&p| self.contains(p)).collect()
    }

    /// The `rank`-th selected position.
    pub fn select(&self, rank: u64) -> Option<u64> {
        self.positions().get(rank as usize).copied()
    }

    /// The rank of a selected position.
    pub fn rank(&self, pos: u64) -> Option<u64> {
        if !self.contains(pos) {
            return None;
        }
        Some((0..pos).filter(|&p| self.contains(p)).count() as u64)
    }

    /// Reveals the first `head` unselected positions of `range`, then the last
    /// `tail` positions still unselected.
    pub fn include_partially(&mut self, range: Range<u64>, head: u64, tail: u64) -> u64 {
        let mut revealed = 0;
        let mut budget = head;
        for pos in range.clone() {
            if budget == 0 {
                break;
            }
            if !self.contains(pos) {
                self.flags[pos as usize] = true;
                revealed += 1;
                budget -= 1;
            }
        }
        let mut budget = tail;
        for pos in range.rev() {
            if budget == 0 {
                break;
            }
            if !self.contains(pos) {
                self.flags[pos as usize] = true;
                revealed += 1;
                budget -= 1;
            }
        }
        revealed
    }

    /// Reveals every unselected position of `range` that lies at most `head`
    /// positions before, or at most `tail` positions after, a position of `range`
    /// that was selected before the call.
    pub fn include_expand(&mut self, range: Range<u64>, head: u64, tail: u64) -> u64 {
        let snapshot = self.clone();
        let selected_in_range =
            |p: u64| range.contains(&p) && snapshot.contains(p);
        let mut revealed = 0;
        for pos in range.clone() {
            if snapshot.contains(pos) {
                continue;
            }
            let near_next = (pos + 1..=pos.saturating_add(head)).any(selected_in_range);
            let near_prev = (pos.saturating_sub(tail)..pos).any(selected_in_range);
            if near_next || near_prev {
                self.flags[pos as usize] = true;
                revealed += 1;
            }
        }
        revealed
    }
}
