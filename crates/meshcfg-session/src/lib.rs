//! Configuration session for mesh radios.
//!
//! A session wakes the radio, asks it for its full configuration and merges
//! the stream of fragments it answers with into one [`DeviceConfig`]. The
//! session ends when the radio signals completion and the snapshot is ready,
//! or when the deadline passes. Either way the caller gets the snapshot.
//!
//! ```no_run
//! use meshcfg_frame::Discard;
//! use meshcfg_proto::ProtobufCodec;
//! use meshcfg_session::{Session, SessionConfig};
//! use meshcfg_transport::{SerialConfig, SerialLink};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let (source, sink) = SerialLink::open(&SerialConfig::new("/dev/ttyUSB0"))?.split();
//! let session = Session::new(SessionConfig::default(), ProtobufCodec);
//! let report = session.run(source, sink, &mut Discard).await?;
//! println!("complete: {}", report.is_complete());
//! # Ok(())
//! # }
//! ```

mod collect;
pub mod config;
pub mod error;
pub mod merger;
pub mod replay;
pub mod report;
pub mod session;

pub use config::SessionConfig;
pub use error::{Result, SessionError};
pub use merger::{ConfigMerger, DeviceConfig, MergeOutcome, MAX_CHANNELS};
pub use replay::replay;
pub use report::{SessionOutcome, SessionReport, SessionStats};
pub use session::Session;
