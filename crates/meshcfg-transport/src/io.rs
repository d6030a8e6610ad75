use std::io::{ErrorKind, Read, Write};

use crate::error::{Result, TransportError};
use crate::traits::{ByteSink, ByteSource};

/// Adapts any `Read` into a [`ByteSource`].
///
/// Read timeouts (`TimedOut`, `WouldBlock`) become `Ok(0)`, interrupted reads
/// are retried, and a zero-length read is end of stream.
#[derive(Debug)]
pub struct IoSource<T> {
    inner: T,
}

impl<T: Read> IoSource<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Consume the adapter and return the inner reader.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Send> ByteSource for IoSource<T> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.inner.read(buf) {
                Ok(0) if !buf.is_empty() => return Err(TransportError::Closed),
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err)
                    if err.kind() == ErrorKind::TimedOut || err.kind() == ErrorKind::WouldBlock =>
                {
                    return Ok(0)
                }
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }
}

/// Adapts any `Write` into a [`ByteSink`].
#[derive(Debug)]
pub struct IoSink<T> {
    inner: T,
}

impl<T: Write> IoSink<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Borrow the inner writer.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Consume the adapter and return the inner writer.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write + Send> ByteSink for IoSink<T> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        let mut offset = 0usize;
        while offset < data.len() {
            match self.inner.write(&data[offset..]) {
                Ok(0) => return Err(TransportError::Closed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }

        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(TransportError::Io(err)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn source_reads_then_reports_closed() {
        let mut source = IoSource::new(Cursor::new(b"abc".to_vec()));
        let mut buf = [0u8; 8];

        assert_eq!(source.read_bytes(&mut buf).unwrap(), 3);
        assert_eq!(&buf[..3], b"abc");
        assert!(matches!(
            source.read_bytes(&mut buf),
            Err(TransportError::Closed)
        ));
    }

    #[test]
    fn source_maps_timeout_to_zero() {
        let mut source = IoSource::new(TimeoutThenData { timed_out: false });
        let mut buf = [0u8; 4];

        assert_eq!(source.read_bytes(&mut buf).unwrap(), 0);
        assert_eq!(source.read_bytes(&mut buf).unwrap(), 1);
        assert_eq!(buf[0], b'x');
    }

    #[test]
    fn source_propagates_other_errors() {
        let mut source = IoSource::new(Broken);
        let mut buf = [0u8; 4];
        let err = source.read_bytes(&mut buf).unwrap_err();
        assert!(matches!(err, TransportError::Io(e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn sink_writes_everything_in_small_pieces() {
        let mut sink = IoSink::new(OneBytePerWrite { written: Vec::new() });
        sink.write_bytes(b"hello").unwrap();
        assert_eq!(sink.get_ref().written, b"hello");
    }

    #[test]
    fn sink_reports_zero_length_write_as_closed() {
        let mut sink = IoSink::new(Cursor::new([0u8; 0]));
        assert!(matches!(
            sink.write_bytes(b"x"),
            Err(TransportError::Closed)
        ));
    }

    struct TimeoutThenData {
        timed_out: bool,
    }

    impl Read for TimeoutThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.timed_out {
                self.timed_out = true;
                return Err(std::io::Error::from(ErrorKind::TimedOut));
            }
            buf[0] = b'x';
            Ok(1)
        }
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(ErrorKind::BrokenPipe))
        }
    }

    struct OneBytePerWrite {
        written: Vec<u8>,
    }

    impl Write for OneBytePerWrite {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.written.push(buf[0]);
            Ok(1)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }
}
