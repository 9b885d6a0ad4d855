use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::stream::{ByteStream, RandomStream, SeekOrigin};

fn to_seek_args(pos: SeekFrom) -> (i64, SeekOrigin) {
    match pos {
        SeekFrom::Start(offset) => (
            i64::try_from(offset).unwrap_or(i64::MAX),
            SeekOrigin::Begin,
        ),
        SeekFrom::Current(offset) => (offset, SeekOrigin::Current),
        SeekFrom::End(offset) => (offset, SeekOrigin::End),
    }
}

impl Read for &RandomStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(ByteStream::read(*self, buf))
    }
}

impl Seek for &RandomStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        let (offset, origin) = to_seek_args(pos);
        Ok(ByteStream::seek(*self, offset, origin) as u64)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(ByteStream::position(*self) as u64)
    }
}

impl Write for &RandomStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(ByteStream::write(*self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(ByteStream::flush(*self)?)
    }
}

impl Read for RandomStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Read::read(&mut &*self, buf)
    }
}

impl Seek for RandomStream {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        Seek::seek(&mut &*self, pos)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Seek::stream_position(&mut &*self)
    }
}

impl Write for RandomStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Write::write(&mut &*self, buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        Write::flush(&mut &*self)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read, Seek, SeekFrom, Write};
    use std::sync::Arc;

    use crate::stream::RandomStream;
    use crate::utils::random_buffer::SharedRandomBuffer;

    fn stream(length: Option<i64>) -> RandomStream {
        let buffer = SharedRandomBuffer::from_bytes(b"abcdefgh").unwrap();
        RandomStream::with_buffer(Arc::new(buffer), length)
    }

    #[test]
    fn read_to_end_stops_at_length() {
        let mut stream = stream(Some(20));
        let mut out = Vec::new();
        stream.read_to_end(&mut out).unwrap();
        assert_eq!(out, b"abcdefghabcdefghabcd");
    }

    #[test]
    fn seek_from_start_saturates() {
        let mut stream = stream(None);
        assert_eq!(stream.seek(SeekFrom::Start(u64::MAX)).unwrap(), i64::MAX as u64);
        assert_eq!(stream.seek(SeekFrom::Current(-5)).unwrap(), i64::MAX as u64 - 5);
        assert_eq!(stream.stream_position().unwrap(), i64::MAX as u64 - 5);
    }

    #[test]
    fn write_and_flush_are_unsupported() {
        let mut stream = stream(Some(10));
        let err = stream.write(b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
        let err = stream.flush().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }

    #[test]
    fn shared_reference_reads() {
        let stream = stream(Some(4));
        let mut reader = &stream;
        let mut buf = [0u8; 8];
        assert_eq!(reader.read(&mut buf).unwrap(), 4);
        assert_eq!(&buf[..4], b"abcd");
    }
}
