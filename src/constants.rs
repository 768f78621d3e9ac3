// --- Default chunk sizes for sequence sources ---

pub const FILE_IO_CHUNK_SIZE: usize = 1024 * 1024; // 1 MiB
pub const NETWORK_CHUNK_SIZE: usize = 64 * 1024; // 64 KiB
pub const IN_MEMORY_CHUNK_SIZE: usize = 512 * 1024; // 512 KiB

/// Largest UDP payload deliverable over IPv4 (65_535 minus IP/UDP headers).
pub const MAX_DATAGRAM_PAYLOAD: usize = 65_507;

/// Internal refill size used by the UTF-8 character source.
pub const CHAR_SOURCE_REFILL_SIZE: usize = 8 * 1024; // 8 KiB
