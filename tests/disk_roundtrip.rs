//! Disk roundtrip integration test.
//!
//! Writes patterned files to disk, streams them back in chunks, and verifies
//! the reassembled bytes survive the trip.

use std::io::Write;

use futures_util::StreamExt;

use chunkstream::enums::{ChunkSize, Disposal};
use chunkstream::models::streams::chunk_stream::ChunkStream;
use chunkstream::models::streams::disk::DiskChunkStream;
use chunkstream::models::streams::unit_stream::UnitStream;
use tempfile::NamedTempFile;

fn write_test_file(data: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(data).expect("write data");
    file.flush().expect("flush data");
    file
}

/// Chunks concatenate back to the file, with every chunk before the last
/// exactly the configured size.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_disk_chunks_concatenate_to_file() {
    const CHUNK: usize = 4 * 1024;
    let data: Vec<u8> = (0..CHUNK * 3 + 123).map(|i| (i % 251) as u8).collect();
    let file = write_test_file(&data);

    let stream = DiskChunkStream::open(file.path(), ChunkSize::Custom(CHUNK))
        .await
        .expect("open stream");
    let chunks: Vec<Vec<u8>> = stream.map(|c| c.expect("chunk read error")).collect().await;

    assert_eq!(chunks.len(), 4);
    for chunk in &chunks[..chunks.len() - 1] {
        assert_eq!(chunk.len(), CHUNK);
    }
    assert_eq!(chunks.last().map(|c| c.len()), Some(123));
    assert_eq!(chunks.concat(), data);
}

/// A generic `ChunkStream` over a raw `tokio::fs::File` behaves the same as
/// the disk convenience wrapper.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_generic_stream_over_tokio_file() {
    let data: Vec<u8> = (0u8..=255).cycle().take(70_000).collect();
    let file = write_test_file(&data);

    let handle = tokio::fs::File::open(file.path()).await.expect("open file");
    let stream = ChunkStream::new(handle, ChunkSize::Custom(16 * 1024), Disposal::CloseOnEnd)
        .expect("construct stream");

    let total: usize = stream
        .map(|c| c.expect("chunk read error").len())
        .collect::<Vec<_>>()
        .await
        .iter()
        .sum();
    assert_eq!(total, data.len());
}

/// Flattening a file stream yields the same ordered bytes as the chunks.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_unit_stream_matches_file_bytes() {
    let data: Vec<u8> = (0..1000).map(|i| (i % 7) as u8).collect();
    let file = write_test_file(&data);

    let handle = tokio::fs::File::open(file.path()).await.expect("open file");
    let units = UnitStream::new(handle, ChunkSize::Custom(64), Disposal::CloseOnEnd)
        .expect("construct stream");

    let bytes: Vec<u8> = units.map(|u| u.expect("unit read error")).collect().await;
    assert_eq!(bytes, data);
}

/// An empty file terminates immediately with no chunks.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_empty_file_yields_no_chunks() {
    let file = write_test_file(&[]);

    let mut stream = DiskChunkStream::open(file.path(), ChunkSize::FileIO)
        .await
        .expect("open stream");
    assert!(stream.next().await.is_none());
}
