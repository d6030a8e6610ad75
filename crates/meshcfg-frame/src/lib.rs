//! Frame extraction for mesh radio serial links.
//!
//! The radio multiplexes two things onto one serial line: binary protocol
//! frames and free-form ASCII debug output. Every frame is laid out as:
//! - A 2-byte magic sequence (`0x94 0xC3`)
//! - A 2-byte big-endian payload length (at most 512)
//! - The payload itself
//!
//! Anything that does not turn out to be a frame, including magic sequences
//! that occur by coincidence inside debug text, is reassembled into debug
//! lines. No byte is ever lost between the two.

pub mod codec;
pub mod debug;
pub mod error;
pub mod extractor;
pub mod reader;
pub mod writer;

pub use codec::{
    encode_frame, wake_sequence, Frame, FrameConfig, HEADER_SIZE, MAGIC, MAX_FRAME_SIZE,
    WAKE_BYTE, WAKE_LEN,
};
pub use debug::{DebugLineAssembler, DebugSink, Discard, MAX_DEBUG_LINE};
pub use error::{FrameError, Result};
pub use extractor::{FrameExtractor, Step, Stray};
pub use reader::FrameReader;
pub use writer::FrameWriter;
