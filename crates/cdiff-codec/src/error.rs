use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("failed to serialize {shape}: {reason}")]
    Serialization { shape: &'static str, reason: String },

    #[error("failed to deserialize {shape}: {reason}")]
    Deserialization { shape: &'static str, reason: String },

    #[error("{shape} payload too large: {size} bytes (max {max})")]
    PayloadTooLarge {
        shape: &'static str,
        size: usize,
        max: usize,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type CodecResult<T> = Result<T, CodecError>;
