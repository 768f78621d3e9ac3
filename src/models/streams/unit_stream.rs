//! # Asynchronous flattened unit sequence
//!
//! Expands a [`ChunkStream`] into a per-unit [`Stream`].
//!
//! Purely a flattening transform: termination, error, cancellation, and
//! disposal semantics all come from the underlying chunked stream. The only
//! state added is a cursor into the chunk currently being drained.

use std::pin::Pin;
use std::task::{Context, Poll};

use futures_core::Stream;
use tokio_util::sync::CancellationToken;

use crate::enums::{ChunkSize, Disposal};
use crate::error::ChunkError;
use crate::models::streams::chunk_stream::ChunkStream;
use crate::traits::chunk_source::AsyncChunkSource;

/// A `Stream` that reads an [`AsyncChunkSource`] one unit at a time.
///
/// Chunks are still fetched from the source at the configured size; this
/// adapter only changes the granularity handed to the caller.
pub struct UnitStream<S: AsyncChunkSource + Unpin> {
    inner: ChunkStream<S>,
    /// Chunk currently being drained.
    current: Vec<S::Unit>,
    /// Cursor into `current`.
    pos: usize,
}

impl<S: AsyncChunkSource + Unpin> UnitStream<S> {
    /// Create a per-unit stream over `source`.
    ///
    /// Fails with [`ChunkError::InvalidChunkSize`] for a zero chunk size.
    pub fn new(source: S, size: ChunkSize, disposal: Disposal) -> Result<Self, ChunkError> {
        Ok(Self::from_chunks(ChunkStream::new(source, size, disposal)?))
    }

    /// Create a per-unit stream that ends when `token` triggers.
    pub fn with_cancellation(
        source: S,
        size: ChunkSize,
        disposal: Disposal,
        token: CancellationToken,
    ) -> Result<Self, ChunkError> {
        Ok(Self::from_chunks(ChunkStream::with_cancellation(
            source, size, disposal, token,
        )?))
    }

    /// Flatten an existing chunked stream.
    pub fn from_chunks(inner: ChunkStream<S>) -> Self {
        Self {
            inner,
            current: Vec::new(),
            pos: 0,
        }
    }

    /// Consume the stream and reclaim the source, if it survived disposal.
    ///
    /// Units already read out of the source but not yet yielded are discarded.
    pub fn into_inner(self) -> Option<S> {
        self.inner.into_inner()
    }
}

impl<S: AsyncChunkSource + Unpin> Stream for UnitStream<S>
where
    S::Unit: Unpin,
{
    type Item = Result<S::Unit, ChunkError>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let me = self.get_mut();

        loop {
            if me.pos < me.current.len() {
                let unit = me.current[me.pos];
                me.pos += 1;
                return Poll::Ready(Some(Ok(unit)));
            }

            match Pin::new(&mut me.inner).poll_next(cx) {
                Poll::Ready(Some(Ok(chunk))) => {
                    me.current = chunk;
                    me.pos = 0;
                }
                Poll::Ready(Some(Err(e))) => return Poll::Ready(Some(Err(e))),
                Poll::Ready(None) => return Poll::Ready(None),
                Poll::Pending => return Poll::Pending,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use tokio::runtime::Runtime;

    #[test]
    fn test_flatten_matches_chunk_concatenation() {
        let rt = Runtime::new().expect("create runtime");
        rt.block_on(async {
            let data: Vec<u8> = (0u8..37).collect();

            let chunks = ChunkStream::new(
                data.as_slice(),
                ChunkSize::Custom(8),
                Disposal::CloseOnEnd,
            )
            .unwrap();
            let concatenated: Vec<u8> = chunks
                .map(|c| c.unwrap())
                .collect::<Vec<_>>()
                .await
                .concat();

            let units = UnitStream::new(
                data.as_slice(),
                ChunkSize::Custom(8),
                Disposal::CloseOnEnd,
            )
            .unwrap();
            let flattened: Vec<u8> = units.map(|u| u.unwrap()).collect().await;

            assert_eq!(flattened, concatenated);
            assert_eq!(flattened, data);
        });
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        let rt = Runtime::new().expect("create runtime");
        rt.block_on(async {
            let empty: &[u8] = &[];
            let mut units =
                UnitStream::new(empty, ChunkSize::Custom(8), Disposal::CloseOnEnd).unwrap();
            assert!(units.next().await.is_none());
        });
    }
}
