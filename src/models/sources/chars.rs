//! # Character source
//!
//! Adapts any byte reader into a [`ChunkSource`] of `char`s by decoding UTF-8
//! incrementally, so the chunked and flattened sequences work over text the
//! same way they do over bytes.
//!
//! ## Overview
//! - Wraps any `R: io::Read`.
//! - Buffers raw bytes internally; multi-byte sequences split across reads
//!   decode once the remaining bytes arrive.
//! - Invalid UTF-8, or a sequence truncated by end of input, surfaces as an
//!   `InvalidData` I/O error.
//!
//! ## Use cases
//! - Walk a large text file character by character in bounded memory.
//! - Chunk decoded text for line-agnostic processing.

use std::io::{self, Read};

use crate::constants::CHAR_SOURCE_REFILL_SIZE;
use crate::traits::chunk_source::ChunkSource;

/// A [`ChunkSource`] of `char`s over any byte reader.
///
/// Decodes UTF-8 incrementally. Each `read_units` call performs at most one
/// read against the wrapped reader unless a multi-byte sequence straddles the
/// refill boundary, in which case it reads until the sequence completes.
pub struct CharSource<R> {
    /// The wrapped byte reader.
    reader: R,
    /// Raw bytes not yet decoded; live region starts at `pos`.
    buf: Vec<u8>,
    /// Cursor into `buf`.
    pos: usize,
    /// End-of-input flag for the wrapped reader.
    eof: bool,
}

impl<R: Read> CharSource<R> {
    /// Wrap `reader` as a character source.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
            pos: 0,
            eof: false,
        }
    }

    /// Consume the source and return the wrapped reader.
    ///
    /// Bytes already buffered but not yet decoded are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Compact the buffer and pull more bytes from the reader.
    fn refill(&mut self) -> io::Result<usize> {
        self.buf.drain(..self.pos);
        self.pos = 0;
        let old_len = self.buf.len();
        self.buf.resize(old_len + CHAR_SOURCE_REFILL_SIZE, 0);
        match self.reader.read(&mut self.buf[old_len..]) {
            Ok(n) => {
                self.buf.truncate(old_len + n);
                Ok(n)
            }
            Err(e) => {
                self.buf.truncate(old_len);
                Err(e)
            }
        }
    }
}

/// Expected length of a UTF-8 sequence from its leading byte.
///
/// `None` for continuation bytes and bytes that can never begin a sequence.
fn utf8_width(first: u8) -> Option<usize> {
    match first {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_data(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

impl<R: Read> ChunkSource for CharSource<R> {
    type Unit = char;

    fn read_units(&mut self, out: &mut [char]) -> io::Result<usize> {
        if out.is_empty() {
            return Ok(0);
        }

        let mut filled = 0;
        loop {
            // Decode whatever is buffered. A decode error is deferred until
            // already-decoded chars have been handed out; the cursor stays on
            // the offending byte, so the next call surfaces it.
            while filled < out.len() {
                let avail = &self.buf[self.pos..];
                let Some(&first) = avail.first() else {
                    break;
                };
                let width = match utf8_width(first) {
                    Some(w) => w,
                    None => {
                        if filled > 0 {
                            return Ok(filled);
                        }
                        return Err(invalid_data("invalid UTF-8 leading byte"));
                    }
                };
                if avail.len() < width {
                    if self.eof {
                        if filled > 0 {
                            return Ok(filled);
                        }
                        return Err(invalid_data("UTF-8 sequence truncated by end of input"));
                    }
                    break;
                }
                let Ok(decoded) = std::str::from_utf8(&avail[..width]) else {
                    if filled > 0 {
                        return Ok(filled);
                    }
                    return Err(invalid_data("invalid UTF-8 byte sequence"));
                };
                let ch = decoded
                    .chars()
                    .next()
                    .ok_or_else(|| invalid_data("invalid UTF-8 byte sequence"))?;
                out[filled] = ch;
                filled += 1;
                self.pos += width;
            }

            if filled > 0 || self.eof {
                return Ok(filled);
            }
            if self.refill()? == 0 {
                self.eof = true;
            }
        }
    }
}
