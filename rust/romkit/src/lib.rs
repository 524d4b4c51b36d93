//! # romkit: selections and strided views over ROM data
//!
//! romkit models "which elements of a linear sequence are visible" and gives
//! read access to the visible elements of a fixed-width element buffer by their
//! rank. It is meant for tools that walk ROM regions, pointer tables and string
//! tables while progressively hiding what has already been identified.
//!
//! ## Module Organization
//!
//! * [`common`] - Error type and result alias shared across the crates
//! * [`selection`] - Sparse interval selections with physical and virtual addressing
//! * [`strided`] - Strided element views backed by a byte buffer and a selection
//!
//! ```
//! use romkit::strided::{ElementLayout, StridedView};
//!
//! let mut view = StridedView::new(&b"1h0o0w"[..], ElementLayout::bytes(2)).unwrap();
//! view.hide(1..2);
//! assert_eq!(view.get(1).unwrap(), b"0w");
//! assert_eq!(view.selection().to_string(), "{[0, 1), [2, 3)} of 3");
//! ```

pub use romkit_common as common;
pub use romkit_selection as selection;
pub use romkit_strided as strided;
