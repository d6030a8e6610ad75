use bytes::BytesMut;
use meshcfg_transport::ByteSink;
use tracing::debug;

use crate::codec::{encode_frame, wake_sequence, HEADER_SIZE, MAX_FRAME_SIZE};
use crate::error::Result;

/// Writes complete frames to a [`ByteSink`].
pub struct FrameWriter<K> {
    inner: K,
    buf: BytesMut,
}

impl<K: ByteSink> FrameWriter<K> {
    pub fn new(inner: K) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(HEADER_SIZE + MAX_FRAME_SIZE),
        }
    }

    /// Send the wake sequence so the radio resynchronises its parser.
    pub fn wake(&mut self) -> Result<()> {
        debug!("sending wake sequence");
        self.inner.write_bytes(&wake_sequence())?;
        Ok(())
    }

    /// Frame and send a payload.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        self.buf.clear();
        encode_frame(payload, &mut self.buf)?;
        self.inner.write_bytes(&self.buf)?;
        Ok(())
    }

    /// Borrow the underlying sink.
    pub fn get_ref(&self) -> &K {
        &self.inner
    }

    /// Consume the writer and return the inner sink.
    pub fn into_inner(self) -> K {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use meshcfg_transport::{IoSink, TransportError};

    use super::*;
    use crate::error::FrameError;
    use crate::extractor::{FrameExtractor, Step};

    #[test]
    fn send_produces_extractable_frame() {
        let mut writer = FrameWriter::new(IoSink::new(Vec::<u8>::new()));
        writer.send(b"\x18\x40").unwrap();

        let wire = writer.into_inner().into_inner();
        let mut ex = FrameExtractor::new();
        let steps: Vec<_> = wire.iter().map(|&b| ex.push(b)).collect();

        assert!(matches!(steps.last(), Some(Step::Frame(f)) if f.payload.as_ref() == b"\x18\x40"));
    }

    #[test]
    fn wake_then_send() {
        let mut writer = FrameWriter::new(IoSink::new(Vec::<u8>::new()));
        writer.wake().unwrap();
        writer.send(b"abc").unwrap();

        let wire = writer.into_inner().into_inner();
        assert_eq!(wire.len(), 32 + 4 + 3);
        assert!(wire[..32].iter().all(|&b| b == 0xC3));
        assert_eq!(&wire[32..36], &[0x94, 0xC3, 0x00, 0x03]);
    }

    #[test]
    fn oversized_payload_is_not_written() {
        let mut writer = FrameWriter::new(IoSink::new(Vec::<u8>::new()));
        let err = writer.send(&[0u8; 600]).unwrap_err();
        assert!(matches!(err, FrameError::PayloadTooLarge { size: 600, .. }));
        assert!(writer.get_ref().get_ref().is_empty());
    }

    #[test]
    fn sink_failure_propagates() {
        let mut writer = FrameWriter::new(IoSink::new(Cursor::new([0u8; 2])));
        let err = writer.send(b"abc").unwrap_err();
        assert!(matches!(err, FrameError::Transport(TransportError::Closed)));
    }
}
