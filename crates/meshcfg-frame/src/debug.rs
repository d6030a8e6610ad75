use tracing::trace;

/// Receives completed debug lines without blocking.
///
/// Debug output is diagnostic only, so implementations drop lines they cannot
/// take immediately instead of stalling byte ingestion.
pub trait DebugSink {
    /// Offer a line. Returns `false` if it was dropped.
    fn offer(&mut self, line: String) -> bool;
}

impl DebugSink for Vec<String> {
    fn offer(&mut self, line: String) -> bool {
        self.push(line);
        true
    }
}

impl<D: DebugSink + ?Sized> DebugSink for &mut D {
    fn offer(&mut self, line: String) -> bool {
        (**self).offer(line)
    }
}

/// A sink that throws every line away.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl DebugSink for Discard {
    fn offer(&mut self, _line: String) -> bool {
        false
    }
}

#[cfg(feature = "async")]
impl DebugSink for tokio::sync::mpsc::Sender<String> {
    fn offer(&mut self, line: String) -> bool {
        match self.try_send(line) {
            Ok(()) => true,
            Err(tokio::sync::mpsc::error::TrySendError::Full(_)) => {
                trace!("debug queue full, dropping line");
                false
            }
            Err(tokio::sync::mpsc::error::TrySendError::Closed(_)) => false,
        }
    }
}

/// Longest debug line kept before it is emitted without a terminator.
pub const MAX_DEBUG_LINE: usize = 512;

/// Accumulates stray bytes into text lines.
///
/// Printable ASCII (32..=126) is kept, CR is ignored, LF ends the line and
/// everything else is dropped. Empty lines are never emitted. A line that
/// reaches [`MAX_DEBUG_LINE`] characters is emitted as is, so a link that
/// never sends LF cannot grow the buffer without bound.
#[derive(Debug, Default)]
pub struct DebugLineAssembler {
    line: String,
}

impl DebugLineAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one byte. Returns the completed line when `byte` is a terminator
    /// or fills the line to [`MAX_DEBUG_LINE`].
    pub fn push(&mut self, byte: u8) -> Option<String> {
        match byte {
            b'\r' => None,
            b'\n' => {
                if self.line.is_empty() {
                    None
                } else {
                    Some(std::mem::take(&mut self.line))
                }
            }
            32..=126 => {
                self.line.push(byte as char);
                if self.line.len() >= MAX_DEBUG_LINE {
                    trace!("debug line hit length limit");
                    Some(std::mem::take(&mut self.line))
                } else {
                    None
                }
            }
            _ => {
                trace!(byte, "dropping non-printable debug byte");
                None
            }
        }
    }

    /// Feed a run of bytes, offering every completed line to `sink`.
    ///
    /// Returns how many completed lines the sink refused.
    pub fn push_all<D: DebugSink + ?Sized>(&mut self, bytes: &[u8], sink: &mut D) -> usize {
        let mut dropped = 0;
        for &byte in bytes {
            if let Some(line) = self.push(byte) {
                if !sink.offer(line) {
                    dropped += 1;
                }
            }
        }
        dropped
    }

    /// The text accumulated since the last terminator.
    pub fn pending(&self) -> &str {
        &self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emits_line_on_lf_and_ignores_cr() {
        let mut asm = DebugLineAssembler::new();
        let mut lines: Vec<String> = Vec::new();
        asm.push_all(b"INFO  | 12:00:01 radio ready\r\n", &mut lines);
        assert_eq!(lines, vec!["INFO  | 12:00:01 radio ready".to_string()]);
        assert_eq!(asm.pending(), "");
    }

    #[test]
    fn empty_lines_are_skipped() {
        let mut asm = DebugLineAssembler::new();
        let mut lines: Vec<String> = Vec::new();
        asm.push_all(b"\n\r\n\nx\n\n", &mut lines);
        assert_eq!(lines, vec!["x".to_string()]);
    }

    #[test]
    fn non_printable_bytes_are_dropped() {
        let mut asm = DebugLineAssembler::new();
        let mut lines: Vec<String> = Vec::new();
        asm.push_all(&[b'a', 0x00, 0x94, 0xC3, b'\t', 0x7F, b'b', b'\n'], &mut lines);
        assert_eq!(lines, vec!["ab".to_string()]);
    }

    #[test]
    fn unterminated_text_stays_pending() {
        let mut asm = DebugLineAssembler::new();
        let mut lines: Vec<String> = Vec::new();
        asm.push_all(b"partial", &mut lines);
        assert!(lines.is_empty());
        assert_eq!(asm.pending(), "partial");
    }

    #[test]
    fn endless_line_is_split_at_limit() {
        let mut asm = DebugLineAssembler::new();
        let mut lines: Vec<String> = Vec::new();
        let text = vec![b'z'; MAX_DEBUG_LINE * 2 + 10];

        asm.push_all(&text, &mut lines);

        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.len() == MAX_DEBUG_LINE));
        assert_eq!(asm.pending().len(), 10);

        asm.push_all(b"\n", &mut lines);
        assert_eq!(lines[2], "z".repeat(10));
    }

    #[test]
    fn discard_sink_counts_drops() {
        let mut asm = DebugLineAssembler::new();
        let dropped = asm.push_all(b"one\ntwo\n", &mut Discard);
        assert_eq!(dropped, 2);
    }

    #[cfg(feature = "async")]
    #[test]
    fn full_queue_drops_without_blocking() {
        let (mut tx, mut rx) = tokio::sync::mpsc::channel::<String>(1);
        let mut asm = DebugLineAssembler::new();

        let dropped = asm.push_all(b"first\nsecond\nthird\n", &mut tx);

        assert_eq!(dropped, 2);
        assert_eq!(rx.try_recv().unwrap(), "first");
        assert!(rx.try_recv().is_err());
    }

    #[cfg(feature = "async")]
    #[test]
    fn closed_queue_drops() {
        let (mut tx, rx) = tokio::sync::mpsc::channel::<String>(4);
        drop(rx);
        assert!(!tx.offer("late".to_string()));
    }
}
