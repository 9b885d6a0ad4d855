use crate::error::Result;

mod random;
mod std_io;
#[cfg(feature = "async")]
mod tokio_io;

pub use random::RandomStream;

/// Reference point for [`ByteStream::seek`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekOrigin {
    Begin,
    Current,
    End,
}

/// Stream operations with constant capability flags.
///
/// Every method takes `&self`: implementations keep their cursor in atomics
/// so one instance can be shared between threads without external locking.
pub trait ByteStream {
    fn can_read(&self) -> bool;
    fn can_seek(&self) -> bool;
    fn can_write(&self) -> bool;

    /// Copies bytes into `buf` and returns how many were copied. `0` means
    /// end of stream.
    fn read(&self, buf: &mut [u8]) -> usize;

    /// Moves the cursor and returns its new value. Out of range targets are
    /// clamped into `[0, length]`.
    fn seek(&self, offset: i64, origin: SeekOrigin) -> i64;

    fn position(&self) -> i64;

    fn set_position(&self, position: i64) {
        self.seek(position, SeekOrigin::Begin);
    }

    fn length(&self) -> i64;

    fn set_length(&self, length: i64);

    fn flush(&self) -> Result<()>;

    fn write(&self, buf: &[u8]) -> Result<usize>;
}
