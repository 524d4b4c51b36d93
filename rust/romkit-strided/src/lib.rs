//! Strided element views: a [`Selection`](romkit_selection::Selection) overlaid
//! on a byte buffer of fixed-width elements.
//!
//! A ROM region, a pointer table or a fixed-width string table is a linear
//! sequence of elements, each `stride` bytes wide. A [`StridedView`] exposes the
//! elements its selection currently reveals, addressed by their virtual index
//! (rank among the revealed elements). Hiding or revealing elements only changes
//! the selection; the underlying bytes are never written.
//!
//! # Element codecs
//!
//! An element is read either as a raw group of `stride` bytes
//! ([`ElementCodec::Bytes`]) or as a little-endian 32-bit code point
//! ([`ElementCodec::CodePoint`], stride 4). Decoding happens after the virtual
//! index has been resolved to a physical one.
//!
//! ```
//! use romkit_strided::{ElementLayout, StridedView};
//!
//! let mut view = StridedView::new(&b"1h0o0w"[..], ElementLayout::bytes(2)).unwrap();
//! assert_eq!(view.len(), 3);
//! assert_eq!(view.get(2).unwrap(), b"0w");
//! view.hide(1..2);
//! assert_eq!(view.get(1).unwrap(), b"0w");
//! assert_eq!(view.get_range(..), b"1h0w");
//! ```

pub mod chunks;
pub mod layout;
pub mod view;

pub use chunks::{ChunkBuffer, DEFAULT_CHUNK_CAPACITY};
pub use layout::{Element, ElementCodec, ElementLayout};
pub use view::StridedView;
