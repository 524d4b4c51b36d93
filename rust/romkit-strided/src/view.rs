//! The strided element view.

use std::{fmt, ops::RangeBounds};

use romkit_common::{Result, error::Error, verify_arg};
use romkit_selection::{Margin, Selection, bounds::resolve_range};

use crate::{
    chunks::{ChunkBuffer, DEFAULT_CHUNK_CAPACITY},
    layout::{Element, ElementLayout},
};

/// Read-only view over the fixed-width elements of a byte buffer, filtered by
/// a selection of element indices.
///
/// The view owns its [`Selection`] (over `[0, N)`, `N` being the number of whole
/// elements in the buffer) and either borrows the buffer (`B = &[u8]`) or owns
/// it (`B = Vec<u8>`, e.g. after [`from_chunks`](StridedView::from_chunks)).
/// Indices passed to the accessors are virtual: `get(0)` is the first element
/// currently revealed. Trailing bytes that do not fill a whole element are
/// never exposed.
pub struct StridedView<B> {
    buffer: B,
    layout: ElementLayout,
    selection: Selection,
}

impl<B: AsRef<[u8]>> StridedView<B> {
    /// Creates a view revealing every element of `buffer`.
    pub fn new(buffer: B, layout: ElementLayout) -> Result<Self> {
        let stride = layout.stride();
        verify_arg!(stride, stride > 0);
        let count = (buffer.as_ref().len() / stride) as u64;
        log::debug!("strided view over {count} elements of {stride} bytes");
        Ok(StridedView {
            buffer,
            layout,
            selection: Selection::full(count),
        })
    }

    /// Creates a view with an explicit selection, whose universe must match the
    /// element count of `buffer`.
    pub fn with_selection(buffer: B, layout: ElementLayout, selection: Selection) -> Result<Self> {
        let mut view = Self::new(buffer, layout)?;
        if selection.universe() != view.physical_len() {
            return Err(Error::invalid_arg(
                "selection",
                format!(
                    "universe {} does not match element count {}",
                    selection.universe(),
                    view.physical_len()
                ),
            ));
        }
        view.selection = selection;
        Ok(view)
    }

    /// Number of revealed elements.
    #[inline]
    pub fn len(&self) -> u64 {
        self.selection.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Number of elements in the buffer, revealed or not.
    #[inline]
    pub fn physical_len(&self) -> u64 {
        self.selection.universe()
    }

    #[inline]
    pub fn stride(&self) -> usize {
        self.layout.stride()
    }

    #[inline]
    pub fn layout(&self) -> ElementLayout {
        self.layout
    }

    /// The whole underlying buffer, hidden elements included.
    #[inline]
    pub fn buffer(&self) -> &[u8] {
        self.buffer.as_ref()
    }

    pub fn into_inner(self) -> (B, Selection) {
        (self.buffer, self.selection)
    }

    #[inline]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    #[inline]
    pub fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Bytes of the element at virtual index `index` (negative counts from the end).
    pub fn get(&self, index: i64) -> Result<&[u8]> {
        let pos = self.selection.virtual_to_physical(index)?;
        Ok(self.element(pos))
    }

    /// Bytes of the element at physical index `pos`, revealed or not.
    pub fn get_physical(&self, pos: u64) -> Result<&[u8]> {
        if pos >= self.physical_len() {
            return Err(Error::out_of_range(pos as i128, self.physical_len()));
        }
        Ok(self.element(pos))
    }

    /// Decoded element at virtual index `index`.
    pub fn decode(&self, index: i64) -> Result<Element<'_>> {
        self.layout.decode(self.get(index)?)
    }

    /// Concatenated bytes of the revealed elements whose virtual indices fall
    /// inside `range`. Out-of-range ends are clamped.
    pub fn get_range<R: RangeBounds<i64>>(&self, range: R) -> Vec<u8> {
        let physical = self.selection.virtual_range_to_physical(range);
        let stride = self.stride() as u64;
        let mut out = Vec::with_capacity((physical.len() * stride) as usize);
        for run in physical.intervals() {
            out.extend_from_slice(self.run_bytes(run.start, run.end));
        }
        out
    }

    /// Concatenated bytes of every `step`-th revealed element of `range`, in the
    /// manner of a slice with a positive step.
    pub fn get_range_step<R: RangeBounds<i64>>(&self, range: R, step: usize) -> Result<Vec<u8>> {
        verify_arg!(step, step > 0);
        let Some(virt) = resolve_range(&range, self.len()) else {
            return Ok(Vec::new());
        };
        if step == 1 {
            return Ok(self.get_range(virt.start as i64..virt.end as i64));
        }
        let mut out = Vec::with_capacity((virt.end - virt.start) as usize / step * self.stride());
        for v in virt.step_by(step) {
            out.extend_from_slice(self.get(v as i64)?);
        }
        Ok(out)
    }

    /// Decodes the revealed code points of `range` into a string.
    pub fn decode_str<R: RangeBounds<i64>>(&self, range: R) -> Result<String> {
        let physical = self.selection.virtual_range_to_physical(range);
        physical
            .positions()
            .map(|pos| {
                self.layout
                    .decode(self.element(pos))?
                    .as_char()
                    .ok_or_else(|| Error::invalid_arg("layout", "elements are not code points"))
            })
            .collect()
    }

    /// Iterates over the bytes of every revealed element, in order.
    pub fn iter_bytes(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.selection.positions().map(move |pos| self.element(pos))
    }

    /// Iterates over the decoded revealed elements, in order.
    pub fn iter_decoded(&self) -> impl Iterator<Item = Result<Element<'_>>> + '_ {
        self.iter_bytes().map(move |bytes| self.layout.decode(bytes))
    }

    /// Iterates over maximal runs of adjacent revealed elements, each as one
    /// contiguous byte slice.
    pub fn runs(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.selection
            .intervals()
            .map(move |run| self.run_bytes(run.start, run.end))
    }

    /// The selection lifted to byte positions of the buffer.
    pub fn byte_selection(&self) -> Result<Selection> {
        self.selection.scale(self.stride() as u64)
    }

    /// Hides the elements with physical indices in `range`. Returns how many
    /// elements became hidden.
    pub fn hide<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        self.selection.exclude(range)
    }

    /// Reveals the elements with physical indices in `range`. Returns how many
    /// elements became visible.
    pub fn reveal<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        self.selection.include(range)
    }

    /// Hides the revealed elements with virtual indices in `range`.
    pub fn hide_virtual<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        self.selection.exclude_virtual(range)
    }

    /// Reveals every element between the revealed elements at the ends of the
    /// virtual `range`.
    pub fn reveal_virtual<R: RangeBounds<i64>>(&mut self, range: R) -> u64 {
        self.selection.include_virtual(range)
    }

    pub fn reveal_partially<R: RangeBounds<i64>>(
        &mut self,
        range: R,
        margin: impl Into<Margin>,
    ) -> u64 {
        self.selection.include_partially(range, margin)
    }

    pub fn reveal_expand<R: RangeBounds<i64>>(
        &mut self,
        range: R,
        margin: impl Into<Margin>,
    ) -> u64 {
        self.selection.include_expand(range, margin)
    }

    #[inline]
    fn element(&self, pos: u64) -> &[u8] {
        self.run_bytes(pos, pos + 1)
    }

    /// Bytes of the physical elements `[start, end)`, `end <= physical_len()`.
    #[inline]
    fn run_bytes(&self, start: u64, end: u64) -> &[u8] {
        let stride = self.stride();
        &self.buffer.as_ref()[start as usize * stride..end as usize * stride]
    }
}

impl StridedView<Vec<u8>> {
    /// Builds a view that owns the concatenation of `chunks`.
    ///
    /// Each chunk must hold a whole, non-zero number of elements. The element count
    /// is fixed once the iterator is exhausted.
    pub fn from_chunks<I, C>(chunks: I, layout: ElementLayout) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        Self::from_chunks_with_capacity(chunks, layout, DEFAULT_CHUNK_CAPACITY)
    }

    /// [`from_chunks`](Self::from_chunks) with an initial capacity given in elements.
    pub fn from_chunks_with_capacity<I, C>(
        chunks: I,
        layout: ElementLayout,
        capacity: usize,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = C>,
        C: AsRef<[u8]>,
    {
        let stride = layout.stride();
        verify_arg!(stride, stride > 0);
        let mut buffer = ChunkBuffer::with_capacity(stride, capacity);
        for chunk in chunks {
            buffer.push_chunk(chunk.as_ref())?;
        }
        Self::new(buffer.into_bytes(), layout)
    }
}

impl<B: AsRef<[u8]>> fmt::Debug for StridedView<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StridedView")
            .field("layout", &self.layout)
            .field("buffer_len", &self.buffer.as_ref().len())
            .field("selection", &self.selection)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use romkit_testkit::data_gen::{numbered_elements, utf32_chunks};

    use super::*;
    use crate::layout::ElementCodec;

    #[test]
    fn test_byte_elements() {
        let mut view = StridedView::new(&b"1h0o0w"[..], ElementLayout::bytes(2)).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.get(0).unwrap(), b"1h");
        assert_eq!(view.get(2).unwrap(), b"0w");

        assert_eq!(view.hide(1..2), 1);
        assert_eq!(view.len(), 2);
        assert_eq!(view.get(1).unwrap(), b"0w");
        assert!(view.get(2).unwrap_err().is_out_of_range());
        assert_eq!(view.get(-2).unwrap(), b"1h");
        assert_eq!(view.get_physical(1).unwrap(), b"0o");
        assert!(view.get_physical(3).is_err());
    }

    #[test]
    fn test_code_point_stream() {
        let mut view =
            StridedView::from_chunks(utf32_chunks("How"), ElementLayout::code_points()).unwrap();
        assert_eq!(view.len(), 3);
        assert_eq!(view.decode(0).unwrap(), Element::Char('H'));

        assert_eq!(view.hide_virtual(0..1), 1);
        assert_eq!(view.decode(0).unwrap(), Element::Char('o'));
        assert_eq!(view.decode_str(..).unwrap(), "ow");
        assert_eq!(view.layout().codec(), ElementCodec::CodePoint);
    }

    #[test]
    fn test_chunk_growth_and_validation() {
        let chunks = (0u8..100).map(|i| [i, i]);
        let view = StridedView::from_chunks_with_capacity(chunks, ElementLayout::bytes(2), 1)
            .unwrap();
        assert_eq!(view.physical_len(), 100);
        assert_eq!(view.get(99).unwrap(), &[99, 99]);

        let bad = [&b"ab"[..], &b"abc"[..]];
        assert!(StridedView::from_chunks(bad, ElementLayout::bytes(2)).is_err());
        assert!(StridedView::from_chunks([b"ab"], ElementLayout::bytes(0)).is_err());

        let empty = StridedView::from_chunks(Vec::<Vec<u8>>::new(), ElementLayout::bytes(3))
            .unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.get_range(..), Vec::<u8>::new());
    }

    #[test]
    fn test_ranges_and_runs() {
        let buf = numbered_elements(10, 2);
        let mut view = StridedView::new(buf.as_slice(), ElementLayout::bytes(2)).unwrap();
        view.hide(2..4);
        view.hide(7..8);
        // Revealed physical elements: 0 1 4 5 6 8 9.
        assert_eq!(view.get_range(1..4), vec![1, 0, 4, 0, 5, 0]);
        assert_eq!(view.get_range(-2..), vec![8, 0, 9, 0]);
        assert_eq!(view.get_range(5..100), vec![8, 0, 9, 0]);
        assert!(view.get_range(4..2).is_empty());

        let runs: Vec<_> = view.runs().collect();
        assert_eq!(runs, vec![&[0, 0, 1, 0][..], &[4, 0, 5, 0, 6, 0], &[8, 0, 9, 0]]);

        let firsts: Vec<u8> = view.iter_bytes().map(|e| e[0]).collect();
        assert_eq!(firsts, vec![0, 1, 4, 5, 6, 8, 9]);

        assert_eq!(
            view.get_range_step(.., 3).unwrap(),
            vec![0, 0, 5, 0, 9, 0]
        );
        assert_eq!(view.get_range_step(1..5, 2).unwrap(), vec![1, 0, 5, 0]);
        assert_eq!(view.get_range_step(.., 1).unwrap(), view.get_range(..));
        assert!(view.get_range_step(.., 0).is_err());
    }

    #[test]
    fn test_reveal_forwarding() {
        let buf = numbered_elements(10, 1);
        let mut view = StridedView::new(buf, ElementLayout::bytes(1)).unwrap();
        view.hide(..);
        assert!(view.is_empty());
        assert_eq!(view.reveal(4..5), 1);
        assert_eq!(view.reveal_expand(.., 1u64), 2);
        assert_eq!(view.get_range(..), vec![3, 4, 5]);
        assert_eq!(view.reveal_partially(.., (1u64, 2u64)), 3);
        assert_eq!(view.get_range(..), vec![0, 3, 4, 5, 8, 9]);
        assert_eq!(view.reveal_virtual(0..2), 2);
        assert_eq!(view.get_range(..), vec![0, 1, 2, 3, 4, 5, 8, 9]);
        assert_eq!(view.buffer().len(), 10);
    }

    #[test]
    fn test_byte_selection_and_trailing_bytes() {
        let view = StridedView::new(&b"abcdefg"[..], ElementLayout::bytes(3)).unwrap();
        assert_eq!(view.physical_len(), 2);
        let mut view = view;
        view.hide(0..1);
        let bytes = view.byte_selection().unwrap();
        assert_eq!(bytes.universe(), 6);
        assert_eq!(bytes.intervals().collect::<Vec<_>>(), vec![3..6]);
        assert_eq!(view.get_range(..), b"def");

        assert!(StridedView::new(&b"abc"[..], ElementLayout::bytes(0)).is_err());
        let mismatched = Selection::full(3);
        assert!(StridedView::with_selection(&b"abcdef"[..], ElementLayout::bytes(3), mismatched)
            .is_err());
    }

    #[test]
    fn test_random_hides_against_model() {
        let mut rng = fastrand::Rng::with_seed(5150);
        let buf = numbered_elements(200, 2);
        let mut view = StridedView::new(buf.as_slice(), ElementLayout::bytes(2)).unwrap();
        let mut visible: Vec<u8> = (0..200).map(|i| i as u8).collect();
        for _ in 0..40 {
            if visible.is_empty() {
                break;
            }
            let at = rng.usize(0..visible.len());
            let width = rng.usize(1..=(visible.len() - at).min(5));
            assert_eq!(view.hide_virtual(at as i64..(at + width) as i64), width as u64);
            visible.drain(at..at + width);

            assert_eq!(view.len(), visible.len() as u64);
            let firsts: Vec<u8> = view.iter_bytes().map(|e| e[0]).collect();
            assert_eq!(firsts, visible);
            let v = rng.usize(0..visible.len().max(1));
            if v < visible.len() {
                assert_eq!(view.get(v as i64).unwrap()[0], visible[v]);
            }
        }
    }
}
