//! # Chunk sequence errors
//!
//! Unified error type for all chunked-read operations in Chunkstream.
//!
//! Covers underlying I/O failures, invalid sequence configuration, and
//! cooperative cancellation. Conversion impls are provided for common error
//! sources so that sequences can propagate errors directly.

use std::{error, fmt, io};

/// Unified error type for all chunked-read operations.
#[derive(Debug)]
pub enum ChunkError {
    /// Underlying I/O failure (read error, open error, socket error).
    Io(io::Error),

    /// Chunk size was zero. Raised before any read is attempted.
    InvalidChunkSize(usize),

    /// Enumeration was ended by a triggered cancellation token.
    ///
    /// No partial chunk accompanies this error.
    Cancelled,
}

impl fmt::Display for ChunkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChunkError::Io(e) => write!(f, "I/O error: {}", e),
            ChunkError::InvalidChunkSize(n) => {
                write!(f, "Invalid chunk size: {} (must be at least 1)", n)
            }
            ChunkError::Cancelled => write!(f, "Chunk read cancelled"),
        }
    }
}

impl error::Error for ChunkError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ChunkError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// Conversions for error handling

impl From<io::Error> for ChunkError {
    fn from(e: io::Error) -> Self {
        ChunkError::Io(e)
    }
}

impl ChunkError {
    /// Whether this error is a cancellation rather than a genuine failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ChunkError::Cancelled)
    }
}
