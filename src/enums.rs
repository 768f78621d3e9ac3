use crate::constants::{
    FILE_IO_CHUNK_SIZE, IN_MEMORY_CHUNK_SIZE, MAX_DATAGRAM_PAYLOAD, NETWORK_CHUNK_SIZE,
};

/// Specifies chunk sizing strategies for `ChunkIter`, `ChunkStream` and other
/// sequence sources.
///
/// Provides domain-appropriate defaults but allows override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkSize {
    /// File I/O: Default is 1 MiB chunks.
    FileIO,

    /// Network transfers: Default is 64 KiB.
    Network,

    /// Datagram sockets: sized to the largest UDP payload (65_507 bytes).
    Datagram,

    /// In-memory sources: Default is 512 KiB.
    InMemory,

    /// Custom chunk size, in units.
    ///
    /// A zero size is representable here but rejected by the sequence
    /// constructors before any read occurs.
    Custom(usize),
}

impl ChunkSize {
    /// Returns the configured chunk size in units.
    pub fn chunk_size(self) -> usize {
        match self {
            ChunkSize::FileIO => FILE_IO_CHUNK_SIZE,
            ChunkSize::Network => NETWORK_CHUNK_SIZE,
            ChunkSize::Datagram => MAX_DATAGRAM_PAYLOAD,
            ChunkSize::InMemory => IN_MEMORY_CHUNK_SIZE,
            ChunkSize::Custom(n) => n,
        }
    }
}

/// What a sequence does with its wrapped source once enumeration ends.
///
/// Passed at construction, never inferred. Applies on natural end-of-source,
/// on a read error, and on cancellation alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposal {
    /// Drop the wrapped source when the sequence terminates.
    ///
    /// The drop happens exactly once; `into_inner` afterwards returns `None`.
    CloseOnEnd,

    /// Leave the source alive so the caller can keep using it.
    ///
    /// Reclaim it with `into_inner`, or lend the sequence a `&mut` source in
    /// the first place.
    LeaveOpen,
}
