use std::thread;

use meshcfg_frame::{DebugSink, Frame, FrameError, FrameReader, FrameWriter};
use meshcfg_proto::{MessageCodec, WANT_CONFIG_ID};
use meshcfg_transport::{ByteSink, ByteSource, TransportError};
use tokio::sync::mpsc;
use tokio::time::{self, Instant};
use tracing::{debug, info};

use crate::collect::Collector;
use crate::config::SessionConfig;
use crate::error::{Result, SessionError};
use crate::report::{SessionOutcome, SessionReport};

const READER_THREAD_NAME: &str = "meshcfg-reader";

type FrameResult = std::result::Result<Frame, FrameError>;

/// Drives one configuration exchange with a radio.
///
/// The link is read on a dedicated thread that feeds two bounded queues:
/// frames, which block the reader when full, and debug lines, which are
/// dropped when full. The session owns the snapshot and is the only writer.
#[derive(Debug)]
pub struct Session<C> {
    config: SessionConfig,
    codec: C,
}

impl<C: MessageCodec> Session<C> {
    pub fn new(config: SessionConfig, codec: C) -> Self {
        Self { config, codec }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Run the session to completion or deadline.
    ///
    /// Wakes the radio, waits for the settle period, sends the configuration
    /// request and merges what comes back. Debug lines from the radio are
    /// offered to `debug`. Only transport failures are returned as errors;
    /// a session that runs out of time still yields its partial snapshot.
    pub async fn run<S, K, D>(&self, source: S, sink: K, debug: &mut D) -> Result<SessionReport>
    where
        S: ByteSource + 'static,
        K: ByteSink,
        D: DebugSink + ?Sized,
    {
        let started = Instant::now();
        let deadline = started + self.config.deadline;
        info!(
            request_id = WANT_CONFIG_ID,
            deadline_ms = self.config.deadline.as_millis() as u64,
            "starting configuration session"
        );

        let mut writer = FrameWriter::new(sink);
        if self.config.send_wake {
            writer.wake()?;
        }

        let (frame_tx, mut frames) = mpsc::channel(self.config.frame_queue_capacity.max(1));
        let (line_tx, mut lines) = mpsc::channel(self.config.debug_queue_capacity.max(1));
        spawn_reader(FrameReader::new(source), frame_tx, line_tx)?;

        time::sleep(self.config.settle).await;
        let request = self.codec.encode_config_request(WANT_CONFIG_ID);
        writer.send(&request)?;
        debug!(len = request.len(), "configuration requested");

        let mut collector = Collector::new(&self.codec, WANT_CONFIG_ID);
        let mut lines_open = true;
        let outcome = loop {
            tokio::select! {
                frame = frames.recv() => match frame {
                    Some(Ok(frame)) => {
                        if collector.frame(&frame, &mut *debug) {
                            break SessionOutcome::Completed;
                        }
                    }
                    Some(Err(err)) => return Err(err.into()),
                    None => return Err(SessionError::Transport(TransportError::Closed)),
                },
                line = lines.recv(), if lines_open => match line {
                    Some(line) => collector.line(line, &mut *debug),
                    None => lines_open = false,
                },
                () = time::sleep_until(deadline) => break SessionOutcome::TimedOut,
            }
        };

        let report = collector.finish(outcome, started.elapsed());
        info!(
            outcome = ?report.outcome,
            frames = report.stats.frames,
            decode_failures = report.stats.decode_failures,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "configuration session finished"
        );
        Ok(report)
    }
}

/// Start the reader thread. It checks the frame queue after every read and
/// stops once the session has dropped it, so a radio that never goes quiet
/// costs at most one more read. The thread is never joined.
fn spawn_reader<S: ByteSource + 'static>(
    mut reader: FrameReader<S>,
    frames: mpsc::Sender<FrameResult>,
    mut lines: mpsc::Sender<String>,
) -> Result<()> {
    thread::Builder::new()
        .name(READER_THREAD_NAME.into())
        .spawn(move || {
            while !frames.is_closed() {
                match reader.read_frame(&mut lines) {
                    Ok(Some(frame)) => {
                        if frames.blocking_send(Ok(frame)).is_err() {
                            break;
                        }
                    }
                    Ok(None) => {}
                    Err(err) => {
                        let _ = frames.blocking_send(Err(err));
                        break;
                    }
                }
            }
            debug!(
                stray_bytes = reader.stray_bytes(),
                dropped_lines = reader.dropped_lines(),
                "reader stopped"
            );
        })
        .map_err(SessionError::ReaderSpawn)?;
    Ok(())
}
