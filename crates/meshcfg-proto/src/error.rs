/// Errors that can occur while decoding a frame payload.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The payload is not a valid protobuf message.
    #[error("protobuf decode error: {0}")]
    Protobuf(#[from] prost::DecodeError),

    /// The message parsed but carries a variant this schema does not know.
    #[error("unknown {0} variant")]
    MissingVariant(&'static str),
}

pub type Result<T> = std::result::Result<T, DecodeError>;
