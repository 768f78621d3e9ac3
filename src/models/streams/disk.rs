//! # Asynchronous disk chunk stream
//!
//! Wraps a file in a [`Stream`] that yields fixed-size byte chunks.
//!
//! ## Overview
//! - Uses Tokio [`File`] + [`BufReader`] under the hood, driven by the
//!   generic [`ChunkStream`].
//! - Supports async backpressure via `poll_next`.
//! - Chunk size controlled by [`ChunkSize`].
//! - Owns the file; it is closed when the stream finishes.
//!
//! ## Use cases
//! - Ingest large files without loading them fully into memory.
//! - Feed disk I/O directly into async pipelines.

use std::path::Path;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio::fs::File;
use tokio::io::{AsyncRead, BufReader, ReadBuf};

use crate::enums::{ChunkSize, Disposal};
use crate::error::ChunkError;
use crate::models::streams::chunk_stream::ChunkStream;

/// A `Stream` that reads a file in fixed-size byte chunks.
///
/// ### Includes:
/// - Tokio + `BufReader` based
/// - Async back-pressure support via `poll_next`
/// - Control of chunk size via `ChunkSize`
///
/// ### Use cases:
/// - Ingest large files without loading the full content into memory
/// - Integrate disk I/O into async pipelines
pub struct DiskChunkStream {
    inner: ChunkStream<BufReader<File>>,
}

impl DiskChunkStream {
    /// Open a file as a `DiskChunkStream`.
    ///
    /// The stream owns the file handle and closes it once enumeration ends.
    ///
    /// ### Parameters:
    /// - `path`: Path to the file.
    /// - `size`: Chunk size strategy (`ChunkSize`).
    ///
    /// ### Returns:
    /// - `Err(ChunkError::Io)` on file open failure.
    /// - `Err(ChunkError::InvalidChunkSize)` for a zero chunk size.
    pub async fn open(path: impl AsRef<Path>, size: ChunkSize) -> Result<Self, ChunkError> {
        let chunk_size = size.chunk_size();
        let file = File::open(path).await?;
        let reader = BufReader::with_capacity(chunk_size.max(1), file);
        Ok(Self {
            inner: ChunkStream::new(reader, size, Disposal::CloseOnEnd)?,
        })
    }

    /// The configured chunk size in bytes.
    pub fn chunk_size(&self) -> usize {
        self.inner.chunk_size()
    }
}

impl Stream for DiskChunkStream {
    /// Yield the next chunk of bytes from the file.
    ///
    /// - On success: returns `Ok(Vec<u8>)` containing up to `chunk_size` bytes.
    /// - On EOF: returns `None`.
    /// - On I/O error: returns `Err(ChunkError::Io)`.
    type Item = Result<Vec<u8>, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        Pin::new(&mut self.get_mut().inner).poll_next(cx)
    }
}

// Implement AsyncRead for DiskChunkStream by forwarding to the inner stream
impl AsyncRead for DiskChunkStream {
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<std::io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_read(cx, buf)
    }
}
