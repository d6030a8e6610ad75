use bytes::{Buf, BytesMut};
use meshcfg_transport::ByteSource;
use tracing::trace;

use crate::codec::{Frame, FrameConfig};
use crate::debug::{DebugLineAssembler, DebugSink};
use crate::error::Result;
use crate::extractor::{FrameExtractor, Step};

/// Reads frames from a [`ByteSource`], routing everything else to a debug sink.
///
/// Bytes are read in chunks but fed to the extractor one at a time. Bytes left
/// over after a frame completes mid-chunk are kept for the next call.
pub struct FrameReader<S> {
    inner: S,
    extractor: FrameExtractor,
    assembler: DebugLineAssembler,
    pending: BytesMut,
    chunk: Vec<u8>,
    stray_bytes: u64,
    dropped_lines: u64,
    idle: bool,
}

impl<S: ByteSource> FrameReader<S> {
    /// Create a new frame reader with default configuration.
    pub fn new(inner: S) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new frame reader with explicit configuration.
    pub fn with_config(inner: S, config: FrameConfig) -> Self {
        Self {
            inner,
            extractor: FrameExtractor::with_max_frame_size(config.max_frame_size),
            assembler: DebugLineAssembler::new(),
            pending: BytesMut::with_capacity(config.read_chunk_size),
            chunk: vec![0u8; config.read_chunk_size.max(1)],
            stray_bytes: 0,
            dropped_lines: 0,
            idle: false,
        }
    }

    /// Return the next complete frame, reading from the source at most once.
    ///
    /// Bytes left over from an earlier read are drained first. Returns
    /// `Ok(None)` when the read did not complete a frame, either because the
    /// source timed out ([`is_idle`](Self::is_idle)) or because the bytes were
    /// debug text or a partial frame. Callers can check for shutdown between
    /// calls. Debug lines completed along the way are offered to `debug`.
    pub fn read_frame<D: DebugSink + ?Sized>(&mut self, debug: &mut D) -> Result<Option<Frame>> {
        if let Some(frame) = self.drain_pending(debug) {
            return Ok(Some(frame));
        }

        let read = self.inner.read_bytes(&mut self.chunk)?;
        self.idle = read == 0;
        if read == 0 {
            return Ok(None);
        }
        trace!(read, "read from link");
        self.pending.extend_from_slice(&self.chunk[..read]);
        Ok(self.drain_pending(debug))
    }

    /// Whether the last read timed out with nothing to read.
    pub fn is_idle(&self) -> bool {
        self.idle
    }

    fn drain_pending<D: DebugSink + ?Sized>(&mut self, debug: &mut D) -> Option<Frame> {
        while self.pending.has_remaining() {
            match self.extractor.push(self.pending.get_u8()) {
                Step::Pending => {}
                Step::Frame(frame) => return Some(frame),
                Step::Stray(bytes) => {
                    self.stray_bytes += bytes.len() as u64;
                    self.dropped_lines += self.assembler.push_all(&bytes, debug) as u64;
                }
            }
        }
        None
    }

    /// Total bytes routed to the debug path so far.
    pub fn stray_bytes(&self) -> u64 {
        self.stray_bytes
    }

    /// Completed debug lines the sink refused.
    pub fn dropped_lines(&self) -> u64 {
        self.dropped_lines
    }

    /// Borrow the underlying source.
    pub fn get_ref(&self) -> &S {
        &self.inner
    }

    /// Mutably borrow the underlying source.
    pub fn get_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Consume the reader and return the inner source.
    pub fn into_inner(self) -> S {
        self.inner
    }
}
