#![allow(dead_code)]

use std::sync::Arc;

use randstream::{RandomStream, SharedRandomBuffer};

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Buffer whose bytes spell out consecutive little-endian `u32` indices, so
/// any 4-aligned chunk tells where it came from.
pub fn indexed_buffer(words: usize) -> Arc<SharedRandomBuffer> {
    let bytes: Vec<u8> = (0..words as u32).flat_map(|i| i.to_le_bytes()).collect();
    Arc::new(SharedRandomBuffer::from_bytes(&bytes).unwrap())
}

pub fn word_at(chunk: &[u8]) -> u32 {
    u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
}

pub fn small_stream(size: usize, length: Option<i64>) -> RandomStream {
    let buffer = SharedRandomBuffer::generate(size).unwrap();
    RandomStream::with_buffer(Arc::new(buffer), length)
}
