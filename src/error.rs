use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StreamError>;

#[derive(Debug, Error)]
pub enum StreamError {
    /// The stream is read/seek only; writing and flushing always fail.
    #[error("{operation} is not supported by this stream")]
    Unsupported { operation: &'static str },

    /// The operating system random source could not fill the shared buffer.
    #[error("failed to initialize random buffer: {0}")]
    Initialization(#[source] rand::Error),

    #[error("invalid random buffer size: {0}")]
    InvalidBufferSize(usize),
}

impl StreamError {
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        StreamError::Unsupported { operation }
    }
}

impl From<StreamError> for io::Error {
    fn from(err: StreamError) -> Self {
        let kind = match err {
            StreamError::Unsupported { .. } => io::ErrorKind::Unsupported,
            StreamError::Initialization(_) => io::ErrorKind::Other,
            StreamError::InvalidBufferSize(_) => io::ErrorKind::InvalidInput,
        };
        io::Error::new(kind, err)
    }
}
