use std::time::Duration;

/// Default time allowed for a whole session, measured from its start.
pub const DEFAULT_DEADLINE: Duration = Duration::from_secs(15);

/// Default pause between waking the radio and sending the request.
pub const DEFAULT_SETTLE: Duration = Duration::from_millis(100);

/// Default capacity of both the frame queue and the debug line queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 100;

/// Configuration for a [`Session`](crate::Session).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Time allowed for the whole session, measured from its start.
    pub deadline: Duration,
    /// Wait after waking the radio before requesting configuration.
    pub settle: Duration,
    /// Frames buffered between the reader and the session before the reader blocks.
    pub frame_queue_capacity: usize,
    /// Debug lines buffered before new ones are dropped.
    pub debug_queue_capacity: usize,
    /// Send the wake sequence before the request.
    pub send_wake: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            deadline: DEFAULT_DEADLINE,
            settle: DEFAULT_SETTLE,
            frame_queue_capacity: DEFAULT_QUEUE_CAPACITY,
            debug_queue_capacity: DEFAULT_QUEUE_CAPACITY,
            send_wake: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_protocol() {
        let config = SessionConfig::default();
        assert_eq!(config.deadline, Duration::from_secs(15));
        assert_eq!(config.settle, Duration::from_millis(100));
        assert_eq!(config.frame_queue_capacity, 100);
        assert_eq!(config.debug_queue_capacity, 100);
        assert!(config.send_wake);
    }
}
