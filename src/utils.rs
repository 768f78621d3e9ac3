use std::future::poll_fn;
use std::pin::Pin;

use futures_core::Stream;

use crate::enums::{ChunkSize, Disposal};
use crate::error::ChunkError;
use crate::models::iters::chunk_iter::ChunkIter;
use crate::models::streams::chunk_stream::ChunkStream;
use crate::traits::chunk_source::{AsyncChunkSource, ChunkSource};

/// Read a source fully into one `Vec` of units.
///
/// Runs a chunked sequence to completion and concatenates the chunks. The
/// source is consumed and dropped when the drain ends.
pub fn drain_source<S: ChunkSource>(source: S, size: ChunkSize) -> Result<Vec<S::Unit>, ChunkError> {
    let iter = ChunkIter::new(source, size, Disposal::CloseOnEnd)?;
    let mut out = Vec::new();
    for chunk in iter {
        out.extend_from_slice(&chunk?);
    }
    Ok(out)
}

/// Read an async source fully into one `Vec` of units.
///
/// Asynchronous counterpart of [`drain_source`].
pub async fn drain_async<S>(source: S, size: ChunkSize) -> Result<Vec<S::Unit>, ChunkError>
where
    S: AsyncChunkSource + Unpin,
    S::Unit: Unpin,
{
    let mut stream = ChunkStream::new(source, size, Disposal::CloseOnEnd)?;
    let mut out = Vec::new();
    loop {
        match poll_fn(|cx| Pin::new(&mut stream).poll_next(cx)).await {
            Some(chunk) => out.extend_from_slice(&chunk?),
            None => break,
        }
    }
    Ok(out)
}

// Println for debug mode for inspecting chunk boundaries, etc.
#[macro_export]
macro_rules! debug_println {
    ($($arg:tt)*) => {
        #[cfg(debug_assertions)]
        {
            println!($($arg)*);
        }
    };
}
