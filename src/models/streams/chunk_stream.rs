//! # Asynchronous chunked sequence
//!
//! Wraps an [`AsyncChunkSource`] in a [`Stream`] that yields fixed-size
//! chunks of units.
//!
//! ## Overview
//! - One read against the source per advance, into a reusable scratch buffer.
//! - Each yielded chunk is a freshly-sized copy of the units actually read.
//! - Supports async backpressure via `poll_next`; the read is the only
//!   suspension point.
//! - Cooperative cancellation via [`CancellationToken`], checked before each
//!   read and able to wake a pending one.
//! - Source disposal controlled by [`Disposal`].
//!
//! ## Use cases
//! - Ingest large files or sockets without loading them fully into memory.
//! - Bound a slow or unbounded source with a caller-owned cancellation token.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::io::{AsyncRead, ReadBuf};
use tokio_util::sync::{CancellationToken, WaitForCancellationFutureOwned};

use crate::enums::{ChunkSize, Disposal};
use crate::error::ChunkError;
use crate::traits::chunk_source::AsyncChunkSource;

/// A `Stream` that reads an [`AsyncChunkSource`] in fixed-size chunks.
///
/// ### Includes:
/// - One read against the source per advance
/// - Reusable scratch buffer, chunks handed out as sized copies
/// - Async back-pressure support via `poll_next`
/// - Optional cooperative cancellation via `CancellationToken`
/// - Explicit source disposal via [`Disposal`]
///
/// ### Behaviour:
/// - The sequence ends at the first zero-length read. It is finite and not
///   restartable: a fresh stream over the same source reads from wherever the
///   cursor is, which after full consumption is past-the-end.
/// - A read error is yielded once and ends the stream.
/// - A triggered cancellation token surfaces as one `Err(ChunkError::Cancelled)`
///   item, then the stream ends. No partial chunk is produced for an
///   interrupted read, and no internal timeout is applied — timeout policy
///   belongs to the caller, via the token.
/// - Continuations run on whatever context resumes them; the stream never
///   spawns tasks.
pub struct ChunkStream<S: AsyncChunkSource + Unpin> {
    /// The wrapped source. `None` once disposed.
    source: Option<S>,
    /// Reusable scratch buffer, exactly `chunk_size` units long.
    scratch: Vec<S::Unit>,
    /// Configured chunk size in units.
    chunk_size: usize,
    /// What to do with the source when the sequence ends.
    disposal: Disposal,
    /// Pending wait on the caller's cancellation token, if one was supplied.
    cancel: Option<Pin<Box<WaitForCancellationFutureOwned>>>,
    /// Terminal flag, prevents further reads after completion.
    done: bool,
}

impl<S: AsyncChunkSource + Unpin> ChunkStream<S> {
    /// Create a chunked stream over `source`.
    ///
    /// ### Parameters:
    /// - `source`: The awaitable read primitive to wrap.
    /// - `size`: Chunk size strategy (`ChunkSize`).
    /// - `disposal`: Whether the source is dropped when the stream ends.
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
            cancel: None,
            done: false,
        })
    }

    /// Create a chunked stream whose enumeration ends when `token` triggers.
    ///
    /// The token is observed before each read and while a read is pending;
    /// once triggered, the stream yields `Err(ChunkError::Cancelled)` exactly
    /// once and then ends.
    pub fn with_cancellation(
        source: S,
        size: ChunkSize,
        disposal: Disposal,
        token: CancellationToken,
    ) -> Result<Self, ChunkError> {
        let mut stream = Self::new(source, size, disposal)?;
        stream.cancel = Some(Box::pin(token.cancelled_owned()));
        Ok(stream)
    }

    /// Consume the stream and reclaim the source.
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
        self.cancel = None;
        if self.disposal == Disposal::CloseOnEnd {
            self.source = None;
        }
    }
}

impl<S: AsyncChunkSource + Unpin> Stream for ChunkStream<S>
where
    S::Unit: Unpin,
{
    /// Yield the next chunk of units from the source.
    ///
    /// - On success: returns `Ok(Vec<Unit>)` containing up to `chunk_size` units.
    /// - On end-of-source: returns `None`.
    /// - On read error or cancellation: returns `Err(ChunkError)` once, then `None`.
    type Item = Result<Vec<S::Unit>, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let me = self.get_mut();

        if me.done {
            return Poll::Ready(None);
        }

        // Cancellation wins over a ready or pending read.
        if let Some(cancel) = me.cancel.as_mut() {
            if cancel.as_mut().poll(cx).is_ready() {
                me.finish();
                return Poll::Ready(Some(Err(ChunkError::Cancelled)));
            }
        }

        let source = match me.source.as_mut() {
            Some(s) => s,
            None => {
                me.done = true;
                return Poll::Ready(None);
            }
        };

        let read = Pin::new(source).poll_read_units(cx, &mut me.scratch[..]);

        match read {
            Poll::Ready(Ok(0)) => {
                me.finish();
                Poll::Ready(None)
            }
            Poll::Ready(Ok(n)) => Poll::Ready(Some(Ok(me.scratch[..n].to_vec()))),
            Poll::Ready(Err(e)) => {
                me.finish();
                Poll::Ready(Some(Err(e.into())))
            }
            Poll::Pending => Poll::Pending,
        }
    }
}

// Forward AsyncRead for byte sources, so a ChunkStream can slot into reader
// positions until its source is dropped. A disposed source reads as EOF.
impl<S> AsyncRead for ChunkStream<S>
where
    S: AsyncRead + Unpin,
{
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        let me = self.get_mut();
        match me.source.as_mut() {
            Some(source) => Pin::new(source).poll_read(cx, buf),
            None => Poll::Ready(Ok(())),
        }
    }
}
