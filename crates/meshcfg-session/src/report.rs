use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::merger::DeviceConfig;

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    /// The radio signalled completion and the snapshot is ready.
    Completed,
    /// The deadline passed first. The snapshot is best-effort.
    TimedOut,
    /// A replayed capture ran out before completion.
    EndOfInput,
}

/// Counters collected over a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Frames extracted from the link.
    pub frames: u64,
    /// Frames whose payload could not be decoded.
    pub decode_failures: u64,
    /// Decoded messages that left the snapshot unchanged.
    pub ignored_messages: u64,
    /// Debug lines accepted by the debug sink.
    pub debug_lines: u64,
}

/// The result of a session: the snapshot, how it ended and what it saw.
#[derive(Debug, Clone, Serialize)]
pub struct SessionReport {
    pub config: DeviceConfig,
    pub outcome: SessionOutcome,
    pub stats: SessionStats,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl SessionReport {
    /// Whether the snapshot is complete rather than best-effort.
    pub fn is_complete(&self) -> bool {
        self.outcome == SessionOutcome::Completed
    }
}

fn serialize_millis<S: Serializer>(elapsed: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_u64(u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX))
}
