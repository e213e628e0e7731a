use std::io;

use thiserror::Error;

use crate::codec::CodecError;

/// Unified stream error covering I/O, codec, and configuration validation.
/// - `From<T>` impls enable `?` across the driver.
#[derive(Debug, Error)]
pub enum StreamError {
    /// Reading stdin or writing stdout failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed hex input.
    #[error("codec error: {0}")]
    Codec(#[from] CodecError),

    /// Rejected configuration, with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}

impl StreamError {
    /// True when the stream failed on malformed input rather than on I/O.
    pub fn is_codec(&self) -> bool {
        matches!(self, StreamError::Codec(_))
    }
}
