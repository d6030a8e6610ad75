//! Byte-level transport abstraction for serial links to mesh radios.
//!
//! Provides the two halves the rest of meshcfg is written against:
//! - [`ByteSource`]: reads whatever bytes are available, with a short timeout
//! - [`ByteSink`]: writes a complete buffer or fails
//!
//! This is the lowest layer of meshcfg. A serial-port link is available behind
//! the `serial` feature; any `std::io` stream can be adapted with [`IoSource`]
//! and [`IoSink`].

pub mod error;
pub mod io;
pub mod traits;

#[cfg(feature = "serial")]
pub mod serial;

pub use error::{Result, TransportError};
pub use io::{IoSink, IoSource};
pub use traits::{ByteSink, ByteSource};

#[cfg(feature = "serial")]
pub use serial::{SerialConfig, SerialLink};
