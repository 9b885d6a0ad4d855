use crate::error::Result;
use crate::stream::RandomStream;
use crate::utils::random_buffer::SharedRandomBuffer;

pub mod constants;
pub mod parser;

use constants::DEFAULT_BUFFER_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    /// Bytes of randomness generated per buffer (B).
    pub buffer_size: usize,
    /// Logical stream length; `None` means unbounded.
    pub length: Option<i64>,
}

impl StreamConfig {
    /// Reads overrides from `RANDSTREAM_BUFFER_SIZE` and `RANDSTREAM_LENGTH`.
    pub fn from_env() -> anyhow::Result<Self> {
        parser::read_env_config()
    }

    /// Creates a stream over the process-wide buffer of `buffer_size` bytes.
    /// Streams built with the same size read the same bytes.
    pub fn build(&self) -> Result<RandomStream> {
        let buffer = SharedRandomBuffer::shared(self.buffer_size)?;
        Ok(RandomStream::with_buffer(buffer, self.length))
    }
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
            length: None,
        }
    }
}
