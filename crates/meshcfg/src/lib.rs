//! Read the configuration of a mesh radio over its serial link.
//!
//! The radio shares one serial line between framed binary messages and its
//! own debug console. meshcfg separates the two, asks the radio for its
//! configuration and assembles the answer into a single snapshot.
//!
//! # Crate Structure
//!
//! - [`transport`]: byte source and sink traits, serial port link
//! - [`frame`]: frame extraction, debug line assembly, frame writing
//! - [`proto`]: radio message schema and decoder
//! - [`session`]: configuration merging and the session driver (behind `session` feature)

/// Re-export transport types.
pub mod transport {
    pub use meshcfg_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use meshcfg_frame::*;
}

/// Re-export message types.
pub mod proto {
    pub use meshcfg_proto::*;
}

/// Re-export session types (requires `session` feature).
#[cfg(feature = "session")]
pub mod session {
    pub use meshcfg_session::*;
}
