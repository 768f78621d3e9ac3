//! Read primitives consumed by the chunked sequences.
//!
//! A chunk source is anything exposing a single "fill this buffer, tell me how
//! many units you wrote" operation. The sequences in `models` never talk to a
//! reader or socket directly; they only ever see these two traits.

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::{AsyncRead, ReadBuf};

/// A blocking read primitive over units of type [`ChunkSource::Unit`].
///
/// One call performs at most one read against the underlying resource.
/// `Ok(0)` signals end-of-source and is the only termination condition the
/// sequences recognise. Errors propagate unchanged; the caller decides whether
/// the sequence survives them (it does not).
///
/// Implemented for every `R: io::Read` with `Unit = u8`, which also covers
/// `&mut R` — lend a reader when the sequence should not take ownership.
pub trait ChunkSource {
    /// The unit this source produces (bytes for readers, chars for text).
    type Unit: Copy + Default;

    /// Read up to `buf.len()` units into `buf`, returning the count written.
    fn read_units(&mut self, buf: &mut [Self::Unit]) -> io::Result<usize>;
}

impl<R: io::Read> ChunkSource for R {
    type Unit = u8;

    fn read_units(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read(buf)
    }
}

/// An awaitable read primitive over units of type [`AsyncChunkSource::Unit`].
///
/// Same contract as [`ChunkSource`], expressed poll-style so that stream
/// implementations can drive it without boxing futures. `Poll::Pending` must
/// register the waker in the usual way.
pub trait AsyncChunkSource {
    /// The unit this source produces.
    type Unit: Copy + Default;

    /// Attempt to read up to `buf.len()` units into `buf`.
    fn poll_read_units(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [Self::Unit],
    ) -> Poll<io::Result<usize>>;
}

impl<R: AsyncRead + Unpin> AsyncChunkSource for R {
    type Unit = u8;

    fn poll_read_units(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let mut read_buf = ReadBuf::new(buf);
        match AsyncRead::poll_read(self, cx, &mut read_buf) {
            Poll::Ready(Ok(())) => Poll::Ready(Ok(read_buf.filled().len())),
            Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
            Poll::Pending => Poll::Pending,
        }
    }
}
