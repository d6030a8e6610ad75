/// Errors that can occur on the byte transport.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the link (serial port missing, busy or not permitted).
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    /// An I/O error occurred on the link.
    #[error("transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The byte source reached end of stream.
    #[error("transport closed")]
    Closed,
}

pub type Result<T> = std::result::Result<T, TransportError>;
