use bytes::{BufMut, Bytes, BytesMut};

use crate::error::{FrameError, Result};

/// Frame header: magic (2) + length (2) = 4 bytes.
pub const HEADER_SIZE: usize = 4;

/// Magic bytes opening every frame.
pub const MAGIC: [u8; 2] = [0x94, 0xC3];

/// Largest payload the radio will ever send or accept.
pub const MAX_FRAME_SIZE: usize = 512;

/// Byte repeated in the wake sequence.
pub const WAKE_BYTE: u8 = 0xC3;

/// Length of the wake sequence.
pub const WAKE_LEN: usize = 32;

/// A complete binary record extracted from the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// The opaque payload, handed to the message decoder.
    pub payload: Bytes,
}

impl Frame {
    /// Create a new frame.
    pub fn new(payload: impl Into<Bytes>) -> Self {
        Self {
            payload: payload.into(),
        }
    }

    /// Payload length as carried in the header.
    pub fn len(&self) -> usize {
        self.payload.len()
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }

    /// The total wire size of this frame (header + payload).
    pub fn wire_size(&self) -> usize {
        HEADER_SIZE + self.payload.len()
    }
}

/// Encode a payload into the wire format.
///
/// Wire format:
/// ```text
/// ┌──────────────┬─────────────┬──────────────────┐
/// │ Magic (2B)   │ Length      │ Payload          │
/// │ 0x94 0xC3    │ (2B BE)     │ (Length bytes)   │
/// └──────────────┴─────────────┴──────────────────┘
/// ```
pub fn encode_frame(payload: &[u8], dst: &mut BytesMut) -> Result<()> {
    if payload.len() > MAX_FRAME_SIZE {
        return Err(FrameError::PayloadTooLarge {
            size: payload.len(),
            max: MAX_FRAME_SIZE,
        });
    }
    dst.reserve(HEADER_SIZE + payload.len());
    dst.put_slice(&MAGIC);
    dst.put_u16(payload.len() as u16);
    dst.put_slice(payload);
    Ok(())
}

/// The sequence sent once before the first request so the radio drops any
/// half-received frame and resynchronises its own parser.
pub fn wake_sequence() -> [u8; WAKE_LEN] {
    [WAKE_BYTE; WAKE_LEN]
}

/// Configuration for frame extraction.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Largest declared length accepted before a header is rejected. Default: 512.
    pub max_frame_size: usize,
    /// Size of each read from the byte source. Default: 256.
    pub read_chunk_size: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_frame_size: MAX_FRAME_SIZE,
            read_chunk_size: 256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_writes_big_endian_header() {
        let mut buf = BytesMut::new();
        let payload = vec![0x5A; 0x0123];

        encode_frame(&payload, &mut buf).unwrap();

        assert_eq!(&buf[..4], &[0x94, 0xC3, 0x01, 0x23]);
        assert_eq!(&buf[4..], payload.as_slice());
    }

    #[test]
    fn encode_accepts_max_size() {
        let mut buf = BytesMut::new();
        encode_frame(&[0u8; MAX_FRAME_SIZE], &mut buf).unwrap();
        assert_eq!(buf.len(), HEADER_SIZE + MAX_FRAME_SIZE);
    }

    #[test]
    fn encode_rejects_oversized_payload() {
        let mut buf = BytesMut::new();
        let result = encode_frame(&[0u8; MAX_FRAME_SIZE + 1], &mut buf);
        assert!(matches!(
            result,
            Err(FrameError::PayloadTooLarge { size: 513, max: 512 })
        ));
        assert!(buf.is_empty());
    }

    #[test]
    fn wake_sequence_is_32_sync_bytes() {
        let wake = wake_sequence();
        assert_eq!(wake.len(), 32);
        assert!(wake.iter().all(|&b| b == 0xC3));
    }

    #[test]
    fn frame_wire_size() {
        let frame = Frame::new(Bytes::from_static(b"test"));
        assert_eq!(frame.len(), 4);
        assert_eq!(frame.wire_size(), HEADER_SIZE + 4);
    }
}
