use std::time::Duration;

use meshcfg_frame::{DebugSink, Frame};
use meshcfg_proto::schema::LogRecord;
use meshcfg_proto::{MessageCodec, RadioMessage};
use tracing::warn;

use crate::merger::{ConfigMerger, MergeOutcome};
use crate::report::{SessionOutcome, SessionReport, SessionStats};

/// Decodes frames into the merger and keeps the counters. Shared by the live
/// session and offline replay.
pub(crate) struct Collector<'c, C: ?Sized> {
    codec: &'c C,
    merger: ConfigMerger,
    stats: SessionStats,
}

impl<'c, C: MessageCodec + ?Sized> Collector<'c, C> {
    pub(crate) fn new(codec: &'c C, request_id: u32) -> Self {
        Self {
            codec,
            merger: ConfigMerger::new(request_id),
            stats: SessionStats::default(),
        }
    }

    /// Handle one frame. Returns `true` once the snapshot is resolved.
    pub(crate) fn frame<D: DebugSink + ?Sized>(&mut self, frame: &Frame, debug: &mut D) -> bool {
        self.stats.frames += 1;
        match self.codec.decode(&frame.payload) {
            Ok(RadioMessage::LogRecord(record)) => self.line(log_line(&record), debug),
            Ok(message) => {
                if self.merger.apply(message) == MergeOutcome::Ignored {
                    self.stats.ignored_messages += 1;
                }
            }
            Err(err) => {
                self.stats.decode_failures += 1;
                warn!(error = %err, len = frame.len(), "skipping undecodable frame");
            }
        }
        self.merger.is_resolved()
    }

    /// Forward one debug line.
    pub(crate) fn line<D: DebugSink + ?Sized>(&mut self, line: String, debug: &mut D) {
        if debug.offer(line) {
            self.stats.debug_lines += 1;
        }
    }

    pub(crate) fn count_debug_lines(&mut self, accepted: u64) {
        self.stats.debug_lines += accepted;
    }

    pub(crate) fn finish(self, outcome: SessionOutcome, elapsed: Duration) -> SessionReport {
        SessionReport {
            config: self.merger.into_snapshot(),
            outcome,
            stats: self.stats,
            elapsed,
        }
    }
}

fn log_line(record: &LogRecord) -> String {
    let message = record.message.trim_end();
    if record.source.is_empty() {
        message.to_string()
    } else {
        format!("[{}] {}", record.source, message)
    }
}
