/// Errors that abort a session.
///
/// Only transport failures end up here. Undecodable frames, framing noise,
/// dropped debug lines and the deadline are absorbed by the session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Frame-level error while sending or receiving.
    #[error("frame error: {0}")]
    Frame(#[from] meshcfg_frame::FrameError),

    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] meshcfg_transport::TransportError),

    /// The reader thread could not be started.
    #[error("failed to spawn reader thread: {0}")]
    ReaderSpawn(#[source] std::io::Error),
}

impl SessionError {
    /// The transport error at the root of this error, if any.
    pub fn transport(&self) -> Option<&meshcfg_transport::TransportError> {
        match self {
            SessionError::Frame(meshcfg_frame::FrameError::Transport(err))
            | SessionError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SessionError>;
