use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use log::debug;
use once_cell::sync::{Lazy, OnceCell};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::config::constants::DEFAULT_BUFFER_SIZE;
use crate::error::{Result, StreamError};

static RANDOM_BUFFER: OnceCell<Arc<SharedRandomBuffer>> = OnceCell::new();
static SIZED_BUFFERS: Lazy<Mutex<HashMap<usize, Arc<SharedRandomBuffer>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Immutable pool of random bytes stored twice back to back.
///
/// Any slice of at most `size()` bytes starting inside the first copy is
/// contiguous in `doubled()`, so readers never have to split a copy at the
/// wrap point.
pub struct SharedRandomBuffer {
    doubled: Box<[u8]>,
    size: usize,
}

impl SharedRandomBuffer {
    /// Fills `size` bytes from the operating system CSPRNG.
    pub fn generate(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(StreamError::InvalidBufferSize(size));
        }

        let mut doubled = vec![0u8; size * 2].into_boxed_slice();
        OsRng
            .try_fill_bytes(&mut doubled[..size])
            .map_err(StreamError::Initialization)?;
        doubled.copy_within(..size, size);

        debug!("Random buffer created: {} bytes", size);
        Ok(Self { doubled, size })
    }

    /// Builds a buffer around caller-supplied bytes instead of OS randomness.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let size = bytes.len();
        if size == 0 {
            return Err(StreamError::InvalidBufferSize(size));
        }

        let mut doubled = Vec::with_capacity(size * 2);
        doubled.extend_from_slice(bytes);
        doubled.extend_from_slice(bytes);
        Ok(Self {
            doubled: doubled.into_boxed_slice(),
            size,
        })
    }

    /// Process-wide buffer of `DEFAULT_BUFFER_SIZE` bytes, generated on first use.
    ///
    /// A failed generation is returned to the caller and not cached, so a
    /// later call may try again.
    pub fn global() -> Result<Arc<SharedRandomBuffer>> {
        RANDOM_BUFFER
            .get_or_try_init(|| Self::generate(DEFAULT_BUFFER_SIZE).map(Arc::new))
            .cloned()
    }

    /// Process-wide buffer of `size` bytes, generated on first request for
    /// that size and reused afterwards.
    pub fn shared(size: usize) -> Result<Arc<SharedRandomBuffer>> {
        if size == DEFAULT_BUFFER_SIZE {
            return Self::global();
        }

        let mut buffers = SIZED_BUFFERS.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(buffer) = buffers.get(&size) {
            return Ok(Arc::clone(buffer));
        }
        let buffer = Arc::new(Self::generate(size)?);
        buffers.insert(size, Arc::clone(&buffer));
        Ok(buffer)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The first copy of the random bytes.
    pub fn bytes(&self) -> &[u8] {
        &self.doubled[..self.size]
    }

    pub fn doubled(&self) -> &[u8] {
        &self.doubled
    }

    /// Contiguous view of up to `size()` bytes starting at `offset mod size()`.
    pub fn slice(&self, offset: u64, len: usize) -> &[u8] {
        let start = (offset % self.size as u64) as usize;
        let len = len.min(self.size);
        &self.doubled[start..start + len]
    }
}

impl fmt::Debug for SharedRandomBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRandomBuffer")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
