//! Growable buffer used to materialize a lazy stream of element chunks.

use romkit_common::{Result, error::Error};

/// Initial capacity, in elements, of a [`ChunkBuffer`].
pub const DEFAULT_CHUNK_CAPACITY: usize = 256;

/// Accumulates chunks of whole elements into one contiguous buffer.
///
/// Capacity doubles whenever an appended chunk does not fit, so ingesting `n`
/// bytes costs `O(n)` amortized copies.
#[derive(Debug)]
pub struct ChunkBuffer {
    bytes: Vec<u8>,
    stride: usize,
}

impl ChunkBuffer {
    pub fn new(stride: usize) -> ChunkBuffer {
        Self::with_capacity(stride, DEFAULT_CHUNK_CAPACITY)
    }

    /// Creates a buffer able to hold `elements` elements before growing.
    pub fn with_capacity(stride: usize, elements: usize) -> ChunkBuffer {
        ChunkBuffer {
            bytes: Vec::with_capacity(stride.saturating_mul(elements)),
            stride,
        }
    }

    /// Number of whole elements appended so far.
    #[inline]
    pub fn element_count(&self) -> usize {
        if self.stride == 0 {
            0
        } else {
            self.bytes.len() / self.stride
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    /// Appends one chunk, which must hold a whole, non-zero number of elements.
    pub fn push_chunk(&mut self, chunk: &[u8]) -> Result<()> {
        if chunk.is_empty() || self.stride == 0 || chunk.len() % self.stride != 0 {
            return Err(Error::invalid_arg(
                "chunk",
                format!(
                    "length {} is not a positive multiple of the stride {}",
                    chunk.len(),
                    self.stride
                ),
            ));
        }
        let needed = self.bytes.len() + chunk.len();
        if needed > self.bytes.capacity() {
            let grown = (self.bytes.capacity() * 2).max(needed);
            log::debug!(
                "chunk buffer growing from {} to {grown} bytes",
                self.bytes.capacity()
            );
            self.bytes.reserve_exact(grown - self.bytes.len());
        }
        self.bytes.extend_from_slice(chunk);
        Ok(())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
