use crate::error::Result;

/// The receiving half of a link.
///
/// Implementations block for at most a short, implementation-defined read
/// timeout. `Ok(0)` means the timeout elapsed with nothing to read; the caller
/// is expected to poll again. End of stream is reported as
/// [`TransportError::Closed`](crate::TransportError::Closed).
pub trait ByteSource: Send {
    /// Read available bytes into `buf`, returning how many were written.
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize>;
}

/// The sending half of a link.
pub trait ByteSink: Send {
    /// Write all of `data` and flush it to the device.
    fn write_bytes(&mut self, data: &[u8]) -> Result<()>;
}

impl<S: ByteSource + ?Sized> ByteSource for Box<S> {
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).read_bytes(buf)
    }
}

impl<S: ByteSink + ?Sized> ByteSink for Box<S> {
    fn write_bytes(&mut self, data: &[u8]) -> Result<()> {
        (**self).write_bytes(data)
    }
}
