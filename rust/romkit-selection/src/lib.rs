//! Sparse interval selections over a bounded universe of positions.
//!
//! A [`Selection`] is a mutable subset of the integers in `[0, U)`, kept as a
//! disjoint union of half-open runs. It is the building block used to express
//! "which elements of a linear sequence are currently visible": a caller hides
//! and reveals ranges of a ROM or a string table, and then addresses the
//! remaining elements by their rank among the visible ones.
//!
//! # Key Types
//!
//! - [`Selection`] - the set itself, with edits, queries and index translation
//! - [`Margin`] - the `(head, tail)` budget of partial and expanding reveals
//! - [`Runs`] - iterator over selected runs or gaps
//!
//! # Physical and virtual indices
//!
//! A *physical* index is a position in `[0, U)`. A *virtual* index is the rank of a
//! selected position among all selected positions, in `[0, len)`. Every edit comes in
//! a physical flavor (`include`, `exclude`, ...) and a virtual flavor
//! (`include_virtual`, `exclude_virtual`, ...), and the two spaces are connected by
//! [`Selection::virtual_to_physical`] and [`Selection::physical_to_virtual`].
//!
//! # Range arguments
//!
//! Edits accept any `RangeBounds<i64>`. Unbounded ends default to the universe
//! boundaries, negative indices count back from the end, and ranges that are empty
//! after normalization are a no-op:
//!
//! ```
//! use romkit_selection::Selection;
//!
//! let mut sel = Selection::full(10);
//! assert_eq!(sel.exclude(4..6), 2);
//! assert_eq!(sel.exclude(-2..), 2);
//! assert_eq!(sel.intervals().collect::<Vec<_>>(), vec![0..4, 6..8]);
//! assert_eq!(sel.virtual_to_physical(4).unwrap(), 6);
//! ```

pub mod bounds;
pub mod compose;
pub mod margin;
pub mod rank;
pub mod reveal;
pub mod runs;
pub mod selection;
pub mod translate;

#[cfg(test)]
mod tests;

pub use margin::Margin;
pub use runs::Runs;
pub use selection::Selection;
