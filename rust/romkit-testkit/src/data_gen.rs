//! Seeded generation of edit scripts and element buffers.

use std::ops::Range;

/// A single selection edit, expressed over an already normalized physical range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    Include(Range<u64>),
    Exclude(Range<u64>),
    IncludePartially { range: Range<u64>, head: u64, tail: u64 },
    IncludeExpand { range: Range<u64>, head: u64, tail: u64 },
    Invert,
}

/// Produces reproducible random edits over a fixed universe.
pub struct EditGenerator {
    rng: fastrand::Rng,
    universe: u64,
}

impl EditGenerator {
    pub fn new(seed: u64, universe: u64) -> EditGenerator {
        assert_ne!(universe, 0);
        EditGenerator {
            rng: fastrand::Rng::with_seed(seed),
            universe,
        }
    }

    /// A random non-empty range, biased towards short ranges so that the
    /// selection fragments.
    pub fn range(&mut self) -> Range<u64> {
        let start = self.rng.u64(0..self.universe);
        let max_width = if self.rng.u8(0..8) == 0 {
            self.universe - start
        } else {
            (self.universe - start).min(8)
        };
        let width = self.rng.u64(1..=max_width);
        start..start + width
    }

    pub fn edit(&mut self) -> Edit {
        match self.rng.u8(0..10) {
            0..=3 => Edit::Exclude(self.range()),
            4..=6 => Edit::Include(self.range()),
            7 => Edit::IncludePartially {
                range: self.range(),
                head: self.rng.u64(0..6),
                tail: self.rng.u64(0..6),
            },
            8 => Edit::IncludeExpand {
                range: self.range(),
                head: self.rng.u64(0..4),
                tail: self.rng.u64(0..4),
            },
            _ => Edit::Invert,
        }
    }

    pub fn edits(&mut self, count: usize) -> Vec<Edit> {
        (0..count).map(|_| self.edit()).collect()
    }

    /// A random position within the universe.
    pub fn position(&mut self) -> u64 {
        self.rng.u64(0..self.universe)
    }
}

/// A buffer of `count` elements of `stride` bytes each, element `i` filled with
/// the little-endian bytes of `i` (truncated or zero-padded to the stride).
pub fn numbered_elements(count: usize, stride: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(count * stride);
    for i in 0..count {
        let bytes = (i as u64).to_le_bytes();
        for j in 0..stride {
            buf.push(bytes.get(j).copied().unwrap_or(0));
        }
    }
    buf
}

/// Encodes `text` as little-endian 32-bit code units, one chunk per character.
pub fn utf32_chunks(text: &str) -> impl Iterator<Item = [u8; 4]> + '_ {
    text.chars().map(|c| (c as u32).to_le_bytes())
}
