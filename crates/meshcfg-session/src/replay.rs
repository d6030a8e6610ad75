use std::time::Instant;

use meshcfg_frame::{DebugSink, FrameError, FrameReader};
use meshcfg_proto::{MessageCodec, WANT_CONFIG_ID};
use meshcfg_transport::{ByteSource, TransportError};
use tracing::info;

use crate::collect::Collector;
use crate::error::Result;
use crate::report::{SessionOutcome, SessionReport};

/// Run a captured byte stream through extraction, decoding and merging.
///
/// Nothing is sent and there is no deadline. Replay stops when the snapshot
/// is resolved or the source has nothing more to give, whether it reports
/// end of stream or a read timeout.
pub fn replay<S, C, D>(source: S, codec: &C, debug: &mut D) -> Result<SessionReport>
where
    S: ByteSource,
    C: MessageCodec + ?Sized,
    D: DebugSink + ?Sized,
{
    let started = Instant::now();
    let mut reader = FrameReader::new(source);
    let mut collector = Collector::new(codec, WANT_CONFIG_ID);
    let mut counted = Counted {
        inner: debug,
        accepted: 0,
    };

    let outcome = loop {
        match reader.read_frame(&mut counted) {
            Ok(Some(frame)) => {
                if collector.frame(&frame, &mut *counted.inner) {
                    break SessionOutcome::Completed;
                }
            }
            Ok(None) if reader.is_idle() => break SessionOutcome::EndOfInput,
            Ok(None) => {}
            Err(FrameError::Transport(TransportError::Closed)) => {
                break SessionOutcome::EndOfInput;
            }
            Err(err) => return Err(err.into()),
        }
    };

    collector.count_debug_lines(counted.accepted);
    let report = collector.finish(outcome, started.elapsed());
    info!(
        outcome = ?report.outcome,
        frames = report.stats.frames,
        stray_bytes = reader.stray_bytes(),
        "replay finished"
    );
    Ok(report)
}

struct Counted<'a, D: ?Sized> {
    inner: &'a mut D,
    accepted: u64,
}

impl<D: DebugSink + ?Sized> DebugSink for Counted<'_, D> {
    fn offer(&mut self, line: String) -> bool {
        let accepted = self.inner.offer(line);
        if accepted {
            self.accepted += 1;
        }
        accepted
    }
}
