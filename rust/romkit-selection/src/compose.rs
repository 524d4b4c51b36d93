//! Set composition between selections over the same universe.

use romkit_common::{Result, error::Error};

use crate::Selection;

impl Selection {
    /// Adds every position selected in `other`. Returns the number of positions
    /// that became selected.
    pub fn union_with(&mut self, other: &Selection) -> Result<u64> {
        self.verify_same_universe(other)?;
        Ok(other
            .intervals()
            .map(|r| self.apply(r.start, r.end, true))
            .sum())
    }

    /// Keeps only the positions also selected in `other`. Returns the number of
    /// positions that became unselected.
    pub fn intersect_with(&mut self, other: &Selection) -> Result<u64> {
        self.verify_same_universe(other)?;
        Ok(other
            .gaps()
            .map(|r| self.apply(r.start, r.end, false))
            .sum())
    }

    /// Removes every position selected in `other`. Returns the number of
    /// positions that became unselected.
    pub fn subtract(&mut self, other: &Selection) -> Result<u64> {
        self.verify_same_universe(other)?;
        Ok(other
            .intervals()
            .map(|r| self.apply(r.start, r.end, false))
            .sum())
    }

    fn verify_same_universe(&self, other: &Selection) -> Result<()> {
        if self.universe == other.universe {
            Ok(())
        } else {
            Err(Error::invalid_arg(
                "other",
                format!(
                    "universe {} does not match universe {}",
                    other.universe, self.universe
                ),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::Selection;

    #[test]
    fn test_union_intersection_subtract() {
        let a = Selection::from_intervals(20, [0..5, 10..15]);
        let b = Selection::from_intervals(20, [3..12, 18..20]);

        let mut union = a.clone();
        assert_eq!(union.union_with(&b).unwrap(), 7);
        assert_eq!(union.intervals().collect::<Vec<_>>(), vec![0..15, 18..20]);

        let mut intersection = a.clone();
        assert_eq!(intersection.intersect_with(&b).unwrap(), 6);
        assert_eq!(
            intersection.intervals().collect::<Vec<_>>(),
            vec![3..5, 10..12]
        );

        let mut difference = a.clone();
        assert_eq!(difference.subtract(&b).unwrap(), 4);
        assert_eq!(
            difference.intervals().collect::<Vec<_>>(),
            vec![0..3, 12..15]
        );
        difference.check_invariants();
    }

    #[test]
    fn test_universe_mismatch() {
        let mut a = Selection::full(10);
        let b = Selection::full(11);
        assert!(a.union_with(&b).is_err());
        assert!(a.intersect_with(&b).is_err());
        assert!(a.subtract(&b).is_err());
        assert!(a.is_full());
    }
}
