use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use bytes::BytesMut;

use crate::config::constants::MAX_STREAM_LENGTH;
use crate::error::{Result, StreamError};
use crate::stream::{ByteStream, SeekOrigin};
use crate::utils::random_buffer::SharedRandomBuffer;

/// Read-only, seekable stream of incompressible bytes.
///
/// All instances bound to the same [`SharedRandomBuffer`] emit the same bytes
/// for the same positions. Positions past the buffer size wrap around, so an
/// unbounded stream repeats the buffer contents.
///
/// The cursor is reserved with compare-and-swap before any bytes are copied,
/// so concurrent readers of one instance always receive disjoint ranges.
/// Resizing with [`ByteStream::set_length`] is best effort: the new length and
/// the cursor clamp are two separate atomic steps, and a read racing with a
/// resize may still be served against the old length.
#[derive(Debug)]
pub struct RandomStream {
    buffer: Arc<SharedRandomBuffer>,
    cursor: AtomicI64,
    length: AtomicI64,
}

impl RandomStream {
    /// Creates a stream over the process-wide buffer. `None` means unbounded.
    pub fn new(length: Option<i64>) -> Result<Self> {
        Ok(Self::with_buffer(SharedRandomBuffer::global()?, length))
    }

    pub fn with_buffer(buffer: Arc<SharedRandomBuffer>, length: Option<i64>) -> Self {
        Self {
            buffer,
            cursor: AtomicI64::new(0),
            length: AtomicI64::new(length.unwrap_or(MAX_STREAM_LENGTH).max(0)),
        }
    }

    pub fn buffer(&self) -> &Arc<SharedRandomBuffer> {
        &self.buffer
    }

    pub fn remaining(&self) -> i64 {
        (self.length() - self.position()).max(0)
    }

    /// Reads up to `size` bytes into a new buffer, truncated to what was read.
    pub fn next_chunk(&self, size: usize) -> BytesMut {
        let mut chunk = BytesMut::zeroed(size.min(self.buffer.size()));
        let n = ByteStream::read(self, &mut chunk);
        chunk.truncate(n);
        chunk
    }

    fn clamp(&self, target: i64) -> i64 {
        let length = self.length.load(Ordering::Acquire);
        if target <= 0 {
            0
        } else if target > length {
            length
        } else {
            target
        }
    }
}

impl ByteStream for RandomStream {
    fn can_read(&self) -> bool {
        true
    }

    fn can_seek(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        false
    }

    fn read(&self, buf: &mut [u8]) -> usize {
        let requested = buf.len().min(self.buffer.size()) as i64;

        let mut cursor = self.cursor.load(Ordering::Acquire);
        let count = loop {
            let length = self.length.load(Ordering::Acquire);
            let count = requested.min(length - cursor);
            if count < 1 {
                return 0;
            }
            match self.cursor.compare_exchange_weak(
                cursor,
                cursor + count,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => break count as usize,
                Err(observed) => cursor = observed,
            }
        };

        buf[..count].copy_from_slice(self.buffer.slice(cursor as u64, count));
        count
    }

    fn seek(&self, offset: i64, origin: SeekOrigin) -> i64 {
        match origin {
            SeekOrigin::Begin => {
                let target = self.clamp(offset);
                self.cursor.swap(target, Ordering::AcqRel);
                target
            }
            SeekOrigin::Current => {
                let mut cursor = self.cursor.load(Ordering::Acquire);
                loop {
                    let target = self.clamp(cursor.saturating_add(offset));
                    match self.cursor.compare_exchange_weak(
                        cursor,
                        target,
                        Ordering::AcqRel,
                        Ordering::Acquire,
                    ) {
                        Ok(_) => return target,
                        Err(observed) => cursor = observed,
                    }
                }
            }
            SeekOrigin::End => {
                let length = self.length.load(Ordering::Acquire);
                let target = self.clamp(length.saturating_add(offset));
                self.cursor.swap(target, Ordering::AcqRel);
                target
            }
        }
    }

    fn position(&self) -> i64 {
        self.cursor.load(Ordering::Acquire)
    }

    fn length(&self) -> i64 {
        self.length.load(Ordering::Acquire)
    }

    /// Non-positive lengths are ignored. A cursor beyond the new length is
    /// pulled back to it.
    fn set_length(&self, length: i64) {
        if length > 0 {
            self.length.store(length, Ordering::Release);
        }
        let length = self.length.load(Ordering::Acquire);
        self.cursor.fetch_min(length, Ordering::AcqRel);
    }

    fn flush(&self) -> Result<()> {
        Err(StreamError::unsupported("flush"))
    }

    fn write(&self, _buf: &[u8]) -> Result<usize> {
        Err(StreamError::unsupported("write"))
    }
}
