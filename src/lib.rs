//! # randstream
//!
//! A seekable, read-only stream of incompressible bytes for feeding
//! compression benchmarks, throughput tests and fuzzers.
//!
//! A single random buffer is generated once per process from the operating
//! system CSPRNG and shared by every stream. Reading is a bounded memcpy out
//! of that buffer, so the bytes are cheap to produce but are *not* suitable
//! for anything security related: every stream emits the same data.
//!
//! ```no_run
//! use std::io::Read;
//! use randstream::RandomStream;
//!
//! let mut stream = RandomStream::new(Some(1024 * 1024))?;
//! let mut data = Vec::new();
//! stream.read_to_end(&mut data)?;
//! assert_eq!(data.len(), 1024 * 1024);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod error;
pub mod stream;
pub mod utils;

pub use config::StreamConfig;
pub use error::{Result, StreamError};
pub use stream::{ByteStream, RandomStream, SeekOrigin};
pub use utils::random_buffer::SharedRandomBuffer;
