//! Message decoding for the radio's serial protocol.
//!
//! Frame payloads are protobuf-encoded `FromRadio` messages (device to host)
//! and `ToRadio` messages (host to device). This crate carries the subset of
//! that schema needed to assemble a device configuration, maps decoded
//! messages onto the [`RadioMessage`] tagged union, and exposes the whole
//! thing behind the [`MessageCodec`] trait so callers can swap it out.

pub mod codec;
pub mod error;
mod hex_bytes;
pub mod message;
pub mod schema;

pub use codec::{MessageCodec, ProtobufCodec, WANT_CONFIG_ID};
pub use error::{DecodeError, Result};
pub use message::{ConfigSection, ModuleSection, RadioMessage};
