#[path = "test_utils/mod.rs"]
mod test_utils;

use std::io::{self, BufReader, Read, Seek, SeekFrom, Write};

use randstream::{RandomStream, SharedRandomBuffer};

use crate::test_utils::small_stream;

#[test]
fn test_io_copy_drains_length() {
    let mut stream = RandomStream::new(Some(3 * 1024 * 1024 + 17)).unwrap();
    let copied = io::copy(&mut stream, &mut io::sink()).unwrap();
    assert_eq!(copied, 3 * 1024 * 1024 + 17);
}

#[test]
fn test_buffered_reader_matches_shared_bytes() {
    let shared = SharedRandomBuffer::global().unwrap();
    let stream = RandomStream::new(Some(10_000)).unwrap();
    let mut reader = BufReader::new(&stream);

    let mut out = Vec::new();
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(out, &shared.bytes()[..10_000]);
}

#[test]
fn test_seek_from_variants() {
    let mut stream = small_stream(64, Some(200));
    assert_eq!(stream.seek(SeekFrom::Start(50)).unwrap(), 50);
    assert_eq!(stream.seek(SeekFrom::Current(-60)).unwrap(), 0);
    assert_eq!(stream.seek(SeekFrom::End(-1)).unwrap(), 199);
    assert_eq!(stream.seek(SeekFrom::Start(1 << 40)).unwrap(), 200);
}

#[test]
fn test_writer_errors_are_unsupported() {
    let mut stream = small_stream(64, None);
    let err = stream.write_all(b"payload").unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    assert_eq!(stream.stream_position().unwrap(), 0);
}
