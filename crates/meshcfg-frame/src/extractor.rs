use std::ops::Deref;

use bytes::{BufMut, BytesMut};
use tracing::trace;

use crate::codec::{Frame, HEADER_SIZE, MAGIC, MAX_FRAME_SIZE};

/// Bytes that turned out not to belong to a frame.
///
/// At most a full header is ever replayed at once, so this never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stray {
    bytes: [u8; HEADER_SIZE],
    len: usize,
}

impl Stray {
    fn one(byte: u8) -> Self {
        Self::from_slice(&[byte])
    }

    fn from_slice(src: &[u8]) -> Self {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[..src.len()].copy_from_slice(src);
        Self {
            bytes,
            len: src.len(),
        }
    }
}

impl Deref for Stray {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.bytes[..self.len]
    }
}

/// Result of feeding one byte to the extractor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// The byte was buffered as part of a candidate frame.
    Pending,
    /// The byte completed a frame.
    Frame(Frame),
    /// The byte, and possibly previously buffered bytes, are not frame data.
    Stray(Stray),
}

/// Byte-at-a-time frame extraction state machine.
///
/// The state is keyed by how many bytes of the current candidate frame have
/// been buffered: 0 (idle), 1 (saw first magic byte), 2-3 (reading the
/// length), 4+ (reading the payload). A false magic match or an impossible
/// length rolls the candidate back and hands its bytes out as [`Step::Stray`].
#[derive(Debug)]
pub struct FrameExtractor {
    buf: BytesMut,
    target: usize,
    max_frame_size: usize,
}

impl Default for FrameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameExtractor {
    pub fn new() -> Self {
        Self::with_max_frame_size(MAX_FRAME_SIZE)
    }

    pub fn with_max_frame_size(max_frame_size: usize) -> Self {
        Self {
            buf: BytesMut::with_capacity(HEADER_SIZE + max_frame_size),
            target: 0,
            max_frame_size,
        }
    }

    /// Feed the next byte of the stream.
    pub fn push(&mut self, byte: u8) -> Step {
        match self.buf.len() {
            0 => {
                if byte == MAGIC[0] {
                    self.buf.put_u8(byte);
                    Step::Pending
                } else {
                    Step::Stray(Stray::one(byte))
                }
            }
            1 => {
                if byte == MAGIC[1] {
                    self.buf.put_u8(byte);
                    Step::Pending
                } else {
                    let stray = Stray::from_slice(&[self.buf[0], byte]);
                    self.reset();
                    Step::Stray(stray)
                }
            }
            2 => {
                self.buf.put_u8(byte);
                Step::Pending
            }
            3 => {
                self.buf.put_u8(byte);
                let declared = u16::from_be_bytes([self.buf[2], self.buf[3]]) as usize;
                if declared > self.max_frame_size {
                    trace!(declared, max = self.max_frame_size, "rejecting frame header");
                    let stray = Stray::from_slice(&self.buf);
                    self.reset();
                    return Step::Stray(stray);
                }
                self.target = HEADER_SIZE + declared;
                if declared == 0 {
                    return self.complete();
                }
                Step::Pending
            }
            _ => {
                self.buf.put_u8(byte);
                if self.buf.len() >= self.target {
                    self.complete()
                } else {
                    Step::Pending
                }
            }
        }
    }

    /// Number of bytes held in the current candidate frame.
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }

    /// Drop any partially buffered candidate, returning to idle.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.target = 0;
    }

    fn complete(&mut self) -> Step {
        let payload = self.buf.split_off(HEADER_SIZE).freeze();
        self.reset();
        trace!(len = payload.len(), "frame extracted");
        Step::Frame(Frame { payload })
    }
}

#[cfg(test)]
mod tests {
    use bytes::BytesMut;

    use super::*;
    use crate::codec::encode_frame;

    fn feed(extractor: &mut FrameExtractor, input: &[u8]) -> (Vec<Frame>, Vec<u8>) {
        let mut frames = Vec::new();
        let mut stray = Vec::new();
        for &byte in input {
            match extractor.push(byte) {
                Step::Pending => {}
                Step::Frame(frame) => frames.push(frame),
                Step::Stray(bytes) => stray.extend_from_slice(&bytes),
            }
        }
        (frames, stray)
    }

    fn wire(payload: &[u8]) -> Vec<u8> {
        let mut buf = BytesMut::new();
        encode_frame(payload, &mut buf).unwrap();
        buf.to_vec()
    }

    #[test]
    fn plain_text_is_all_stray() {
        let mut ex = FrameExtractor::new();
        let (frames, stray) = feed(&mut ex, b"INFO | booting\r\n");
        assert!(frames.is_empty());
        assert_eq!(stray, b"INFO | booting\r\n");
        assert_eq!(ex.buffered(), 0);
    }

    #[test]
    fn false_positive_magic_replays_both_bytes() {
        let mut ex = FrameExtractor::new();
        let (frames, stray) = feed(&mut ex, &[0x94, 0x41]);
        assert!(frames.is_empty());
        assert_eq!(stray, vec![0x94, 0x41]);
        assert_eq!(ex.buffered(), 0);
    }

    #[test]
    fn repeated_first_magic_byte_is_not_a_restart() {
        let mut ex = FrameExtractor::new();
        let mut input = vec![0x94];
        input.extend_from_slice(&wire(b"ok"));

        let (frames, stray) = feed(&mut ex, &input);

        // The second 0x94 is consumed by the rollback, so the following
        // 0xC3 is seen in the idle state and the real frame is lost to text.
        assert!(frames.is_empty());
        assert_eq!(stray, input);
    }

    #[test]
    fn extracts_single_frame() {
        let mut ex = FrameExtractor::new();
        let (frames, stray) = feed(&mut ex, &wire(b"hello"));
        assert_eq!(frames, vec![Frame::new(&b"hello"[..])]);
        assert!(stray.is_empty());
        assert_eq!(ex.buffered(), 0);
    }

    #[test]
    fn extracts_frames_between_debug_text() {
        let mut ex = FrameExtractor::new();
        let mut input = b"DEBUG | radio up\n".to_vec();
        input.extend_from_slice(&wire(b"one"));
        input.extend_from_slice(b"more text\n");
        input.extend_from_slice(&wire(b"two"));

        let (frames, stray) = feed(&mut ex, &input);

        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].payload.as_ref(), b"one");
        assert_eq!(frames[1].payload.as_ref(), b"two");
        assert_eq!(stray, b"DEBUG | radio up\nmore text\n");
    }

    #[test]
    fn oversized_header_is_replayed_and_body_is_text() {
        let mut ex = FrameExtractor::new();
        let mut input = vec![0x94, 0xC3, 0x02, 0x58]; // 600
        input.extend(std::iter::repeat(b'a').take(600));

        let (frames, stray) = feed(&mut ex, &input);

        assert!(frames.is_empty());
        assert_eq!(&stray[..4], &[0x94, 0xC3, 0x02, 0x58]);
        assert_eq!(stray.len(), 604);
    }

    #[test]
    fn max_size_header_is_accepted() {
        let mut ex = FrameExtractor::new();
        let payload = vec![7u8; MAX_FRAME_SIZE];
        let (frames, stray) = feed(&mut ex, &wire(&payload));
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].len(), MAX_FRAME_SIZE);
        assert!(stray.is_empty());
    }

    #[test]
    fn zero_length_frame_completes_at_header() {
        let mut ex = FrameExtractor::new();
        let (frames, stray) = feed(&mut ex, &[0x94, 0xC3, 0x00, 0x00, b'x']);
        assert_eq!(frames.len(), 1);
        assert!(frames[0].is_empty());
        assert_eq!(stray, b"x");
    }

    #[test]
    fn custom_limit_rejects_smaller_headers() {
        let mut ex = FrameExtractor::with_max_frame_size(8);
        let (frames, stray) = feed(&mut ex, &[0x94, 0xC3, 0x00, 0x09]);
        assert!(frames.is_empty());
        assert_eq!(stray.len(), 4);
    }

    #[test]
    fn partial_frame_stays_buffered() {
        let mut ex = FrameExtractor::new();
        let full = wire(b"split");
        let (frames, _) = feed(&mut ex, &full[..6]);
        assert!(frames.is_empty());
        assert_eq!(ex.buffered(), 6);

        let (frames, _) = feed(&mut ex, &full[6..]);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].payload.as_ref(), b"split");
    }

    #[test]
    fn reset_discards_candidate() {
        let mut ex = FrameExtractor::new();
        feed(&mut ex, &[0x94, 0xC3, 0x00]);
        ex.reset();
        assert_eq!(ex.buffered(), 0);
        let (_, stray) = feed(&mut ex, b"z");
        assert_eq!(stray, b"z");
    }

    #[test]
    fn every_byte_is_accounted_for() {
        // Deterministic noise biased towards the magic bytes so that false
        // starts, bad lengths and genuine frames all show up.
        let mut state = 0x2545_F491_u32;
        let mut input = Vec::new();
        for i in 0..20_000 {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let byte = match state % 7 {
                0 => 0x94,
                1 => 0xC3,
                2 => 0x00,
                _ => (state >> 8) as u8,
            };
            input.push(byte);
            if i % 997 == 0 {
                input.extend_from_slice(&wire(&[i as u8; 17]));
            }
        }

        let mut ex = FrameExtractor::new();
        let (frames, stray) = feed(&mut ex, &input);

        let framed: usize = frames.iter().map(Frame::wire_size).sum();
        assert!(!frames.is_empty());
        assert_eq!(framed + stray.len() + ex.buffered(), input.len());
    }
}
