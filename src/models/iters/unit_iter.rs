//! # Synchronous flattened unit sequence
//!
//! Expands a [`ChunkIter`] into a per-unit [`Iterator`].
//!
//! Purely a flattening transform: termination, error, and disposal semantics
//! all come from the underlying chunked sequence. The only state added is a
//! cursor into the chunk currently being drained.

use crate::enums::{ChunkSize, Disposal};
use crate::error::ChunkError;
use crate::models::iters::chunk_iter::ChunkIter;
use crate::traits::chunk_source::ChunkSource;

/// An `Iterator` that reads a [`ChunkSource`] one unit at a time.
///
/// Chunks are still fetched from the source at the configured size; this
/// adapter only changes the granularity handed to the caller.
pub struct UnitIter<S: ChunkSource> {
    inner: ChunkIter<S>,
    /// Chunk currently being drained.
    current: Vec<S::Unit>,
    /// Cursor into `current`.
    pos: usize,
}

impl<S: ChunkSource> UnitIter<S> {
    /// Create a per-unit sequence over `source`.
    ///
    /// Fails with [`ChunkError::InvalidChunkSize`] for a zero chunk size.
    pub fn new(source: S, size: ChunkSize, disposal: Disposal) -> Result<Self, ChunkError> {
        Ok(Self::from_chunks(ChunkIter::new(source, size, disposal)?))
    }

    /// Flatten an existing chunked sequence.
    pub fn from_chunks(inner: ChunkIter<S>) -> Self {
        Self {
            inner,
            current: Vec::new(),
            pos: 0,
        }
    }

    /// Consume the sequence and reclaim the source, if it survived disposal.
    ///
    /// Units already read out of the source but not yet yielded are discarded.
    pub fn into_inner(self) -> Option<S> {
        self.inner.into_inner()
    }
}

impl<S: ChunkSource> Iterator for UnitIter<S> {
    type Item = Result<S::Unit, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pos < self.current.len() {
                let unit = self.current[self.pos];
                self.pos += 1;
                return Some(Ok(unit));
            }
            match self.inner.next()? {
                Ok(chunk) => {
                    self.current = chunk;
                    self.pos = 0;
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
