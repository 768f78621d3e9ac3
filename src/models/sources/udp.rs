//! # UDP datagram sources
//!
//! Expose UDP sockets as chunk sources, one datagram per read.
//!
//! ## Overview
//! - Synchronous source over [`std::net::UdpSocket`], asynchronous source
//!   over [`tokio::net::UdpSocket`].
//! - Datagram boundaries are preserved: a chunk is one datagram, usually
//!   shorter than the configured chunk size.
//! - A zero-length datagram reads as zero units and therefore terminates the
//!   sequence; it doubles as an in-band end-of-stream marker.
//! - Size chunks with [`ChunkSize::Datagram`](crate::enums::ChunkSize) so no
//!   datagram is truncated on receipt.
//!
//! ## Use cases
//! - Collect a bounded burst of datagrams as a lazy sequence.
//! - Feed packet payloads into the flattening or framing layers.

use std::io;
use std::net::ToSocketAddrs;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::io::ReadBuf;

use crate::traits::chunk_source::{AsyncChunkSource, ChunkSource};

/// A blocking [`ChunkSource`] over a [`std::net::UdpSocket`].
///
/// Each read receives one datagram. Payload bytes beyond the scratch buffer
/// are discarded by the platform, so pair this with a chunk size of at least
/// the expected datagram size.
pub struct UdpChunkSource {
    socket: std::net::UdpSocket,
}

impl UdpChunkSource {
    /// Bind a fresh socket and wrap it as a chunk source.
    pub fn bind(addr: impl ToSocketAddrs) -> io::Result<Self> {
        Ok(Self::from_socket(std::net::UdpSocket::bind(addr)?))
    }

    /// Wrap an existing socket.
    ///
    /// Use this when the socket needs configuration (timeouts, connect) the
    /// plain `bind` does not apply.
    pub fn from_socket(socket: std::net::UdpSocket) -> Self {
        Self { socket }
    }

    /// Consume the source and return the wrapped socket.
    pub fn into_inner(self) -> std::net::UdpSocket {
        self.socket
    }
}

impl ChunkSource for UdpChunkSource {
    type Unit = u8;

    fn read_units(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.socket.recv(buf)
    }
}

/// An awaitable [`AsyncChunkSource`] over a [`tokio::net::UdpSocket`].
///
/// Same datagram semantics as [`UdpChunkSource`], with the receive as the
/// suspension point.
pub struct AsyncUdpChunkSource {
    socket: tokio::net::UdpSocket,
}

impl AsyncUdpChunkSource {
    /// Bind a fresh socket and wrap it as a chunk source.
    pub async fn bind(addr: impl tokio::net::ToSocketAddrs) -> io::Result<Self> {
        Ok(Self::from_socket(tokio::net::UdpSocket::bind(addr).await?))
    }

    /// Wrap an existing socket.
    pub fn from_socket(socket: tokio::net::UdpSocket) -> Self {
        Self { socket }
    }

    /// Consume the source and return the wrapped socket.
    pub fn into_inner(self) -> tokio::net::UdpSocket {
        self.socket
    }
}

impl AsyncChunkSource for AsyncUdpChunkSource {
    type Unit = u8;

    fn poll_read_units(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut [u8],
    ) -> Poll<io::Result<usize>> {
        let mut read_buf = ReadBuf::new(buf);
        match self.get_mut().socket.poll_recv(cx, &mut read_buf) {
            Poll::Ready(Ok(())) => Poll::Ready(Ok(read_buf.filled().len())),
            Poll::Ready(Err(e)) => Poll::Ready(Err(e)),
            Poll::Pending => Poll::Pending,
        }
    }
}
