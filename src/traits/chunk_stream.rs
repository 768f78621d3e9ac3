use futures_core::Stream;

use crate::error::ChunkError;

/// Universal trait alias for any asynchronous, chunked byte stream.
///
/// Implemented automatically for any [`Stream`] yielding
/// `Result<Vec<u8>, ChunkError>` and supporting `Send` + `Unpin`.
pub trait ByteChunkStream: Stream<Item = Result<Vec<u8>, ChunkError>> + Send + Unpin {}

impl<T> ByteChunkStream for T where T: Stream<Item = Result<Vec<u8>, ChunkError>> + Send + Unpin {}

/// Universal trait alias for any asynchronous, chunked character stream.
///
/// Implemented automatically for any [`Stream`] yielding
/// `Result<Vec<char>, ChunkError>` and supporting `Send` + `Unpin`.
pub trait CharChunkStream: Stream<Item = Result<Vec<char>, ChunkError>> + Send + Unpin {}

impl<T> CharChunkStream for T where T: Stream<Item = Result<Vec<char>, ChunkError>> + Send + Unpin {}

/// Generalised trait for any asynchronous, chunked stream of the given unit type.
///
/// Because it is (only) a set of bounds, one can plug in a compliant type
/// without dynamic dispatch.
pub trait GenChunkStream<U>: Stream<Item = Result<Vec<U>, ChunkError>> + Send + Unpin {}
impl<T, U> GenChunkStream<U> for T where T: Stream<Item = Result<Vec<U>, ChunkError>> + Send + Unpin {}
