//! # Synchronous chunked sequence
//!
//! Wraps a blocking [`ChunkSource`] in an [`Iterator`] that yields fixed-size
//! chunks of units.
//!
//! ## Overview
//! - One `read_units` call per advance, into a reusable scratch buffer.
//! - Each yielded chunk is a freshly-sized copy of the units actually read.
//! - A zero-length read ends the sequence; it is finite and not restartable.
//! - Source disposal controlled by [`Disposal`].
//!
//! ## Use cases
//! - Walk a large file or reader in bounded memory.
//! - Feed chunked input into hashing, framing, or upload pipelines.

use crate::enums::{ChunkSize, Disposal};
use crate::error::ChunkError;
use crate::traits::chunk_source::ChunkSource;

/// An `Iterator` that reads a [`ChunkSource`] in fixed-size chunks.
///
/// ### Includes:
/// - One read against the source per advance
/// - Reusable scratch buffer, chunks handed out as sized copies
/// - Control of chunk size via [`ChunkSize`]
/// - Explicit source disposal via [`Disposal`]
///
/// ### Behaviour:
/// - The sequence ends at the first zero-length read. Re-iterating a source
///   after full consumption reads from wherever its cursor is (typically
///   past-the-end), so a fresh `ChunkIter` over the same source yields
///   nothing. This mirrors one-shot stream semantics and is intentional.
/// - A read error is yielded once and ends the sequence.
/// - Advancing mutates the source's cursor; the scratch buffer is
///   unsynchronized mutable state, so a sequence instance must not be shared
///   across threads.
pub struct ChunkIter<S: ChunkSource> {
    /// The wrapped source. `None` once disposed.
    source: Option<S>,
    /// Reusable scratch buffer, exactly `chunk_size` units long.
    scratch: Vec<S::Unit>,
    /// Configured chunk size in units.
    chunk_size: usize,
    /// What to do with the source when the sequence ends.
    disposal: Disposal,
    /// Terminal flag, prevents further reads after completion.
    done: bool,
}

impl<S: ChunkSource> ChunkIter<S> {
    /// Create a chunked sequence over `source`.
    ///
    /// ### Parameters:
    /// - `source`: The read primitive to wrap.
    /// - `size`: Chunk size strategy (`ChunkSize`).
    /// - `disposal`: Whether the source is dropped when the sequence ends.
    ///
    /// ### Returns:
    /// - `Err(ChunkError::InvalidChunkSize)` for a zero chunk size, before any
    ///   read occurs.
    pub fn new(source: S, size: ChunkSize, disposal: Disposal) -> Result<Self, ChunkError> {
        let chunk_size = size.chunk_size();
        if chunk_size == 0 {
            return Err(ChunkError::InvalidChunkSize(chunk_size));
        }
        Ok(Self {
            source: Some(source),
            scratch: vec![S::Unit::default(); chunk_size],
            chunk_size,
            disposal,
            done: false,
        })
    }

    /// Consume the sequence and reclaim the source.
    ///
    /// Returns `None` if the source was already dropped by
    /// [`Disposal::CloseOnEnd`].
    pub fn into_inner(self) -> Option<S> {
        self.source
    }

    /// The configured chunk size in units.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    fn finish(&mut self) {
        self.done = true;
        if self.disposal == Disposal::CloseOnEnd {
            self.source = None;
        }
    }
}

impl<S: ChunkSource> Iterator for ChunkIter<S> {
    /// Yield the next chunk of units from the source.
    ///
    /// - On success: returns `Ok(Vec<Unit>)` containing up to `chunk_size` units.
    /// - On end-of-source: returns `None`.
    /// - On read error: returns `Err(ChunkError)` once, then `None`.
    type Item = Result<Vec<S::Unit>, ChunkError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let source = match self.source.as_mut() {
            Some(s) => s,
            None => {
                self.done = true;
                return None;
            }
        };

        let read = source.read_units(&mut self.scratch[..]);

        match read {
            Ok(0) => {
                self.finish();
                None
            }
            Ok(n) => Some(Ok(self.scratch[..n].to_vec())),
            Err(e) => {
                self.finish();
                Some(Err(e.into()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    #[test]
    fn test_chunks_cover_source_exactly() {
        let data: Vec<u8> = (0u8..10).collect();
        let iter = ChunkIter::new(
            Cursor::new(data),
            ChunkSize::Custom(4),
            Disposal::CloseOnEnd,
        )
        .unwrap();

        let chunks: Vec<Vec<u8>> = iter.map(|c| c.unwrap()).collect();
        assert_eq!(
            chunks,
            vec![vec![0, 1, 2, 3], vec![4, 5, 6, 7], vec![8, 9]]
        );
    }

    #[test]
    fn test_zero_chunk_size_rejected_before_any_read() {
        struct PanicSource;
        impl Read for PanicSource {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                panic!("read must not be attempted");
            }
        }

        let err = ChunkIter::new(PanicSource, ChunkSize::Custom(0), Disposal::LeaveOpen)
            .err()
            .expect("construction must fail");
        assert!(matches!(err, ChunkError::InvalidChunkSize(0)));
    }

    #[test]
    fn test_exhausted_source_yields_nothing() {
        let mut iter = ChunkIter::new(
            Cursor::new(Vec::<u8>::new()),
            ChunkSize::Custom(8),
            Disposal::LeaveOpen,
        )
        .unwrap();
        assert!(iter.next().is_none());
    }

    #[test]
    fn test_not_restartable_after_full_consumption() {
        let mut cursor = Cursor::new(vec![7u8; 6]);
        {
            let iter = ChunkIter::new(&mut cursor, ChunkSize::Custom(4), Disposal::LeaveOpen)
                .unwrap();
            assert_eq!(iter.count(), 2);
        }
        // cursor now sits past-the-end; a fresh sequence sees nothing
        let mut again =
            ChunkIter::new(&mut cursor, ChunkSize::Custom(4), Disposal::LeaveOpen).unwrap();
        assert!(again.next().is_none());
    }

    #[test]
    fn test_leave_open_reclaims_source() {
        let mut iter = ChunkIter::new(
            Cursor::new(vec![1u8, 2, 3]),
            ChunkSize::Custom(2),
            Disposal::LeaveOpen,
        )
        .unwrap();
        while let Some(chunk) = iter.next() {
            chunk.unwrap();
        }
        let cursor = iter.into_inner().expect("source must survive");
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_close_on_end_drops_source() {
        let mut iter = ChunkIter::new(
            Cursor::new(vec![1u8, 2, 3]),
            ChunkSize::Custom(2),
            Disposal::CloseOnEnd,
        )
        .unwrap();
        while let Some(chunk) = iter.next() {
            chunk.unwrap();
        }
        assert!(iter.into_inner().is_none());
    }

    #[test]
    fn test_read_error_ends_sequence() {
        struct FailingSource {
            calls: usize,
        }
        impl Read for FailingSource {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                self.calls += 1;
                if self.calls == 1 {
                    buf[..2].copy_from_slice(&[1, 2]);
                    Ok(2)
                } else {
                    Err(io::Error::new(io::ErrorKind::BrokenPipe, "boom"))
                }
            }
        }

        let mut iter = ChunkIter::new(
            FailingSource { calls: 0 },
            ChunkSize::Custom(4),
            Disposal::CloseOnEnd,
        )
        .unwrap();

        assert_eq!(iter.next().unwrap().unwrap(), vec![1, 2]);
        assert!(matches!(iter.next(), Some(Err(ChunkError::Io(_)))));
        assert!(iter.next().is_none());
    }
}
