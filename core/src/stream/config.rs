//! stream/config.rs
//! Per-run configuration for the stream driver.

use crate::codec::Mode;
use crate::constants::{DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::types::StreamError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConfig {
    pub mode: Mode,
    /// Upper bound for a single read. Short reads are processed as they arrive.
    pub chunk_size: usize,
    /// Emit `[STREAM]` diagnostics on stderr.
    pub trace: bool,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Encode,
            chunk_size: DEFAULT_CHUNK_SIZE,
            trace: false,
        }
    }
}

impl StreamConfig {
    pub fn new(mode: Mode) -> Self {
        Self { mode, ..Default::default() }
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    pub fn validate(&self) -> Result<(), StreamError> {
        if self.chunk_size == 0 {
            return Err(StreamError::Validation("chunk_size must be non-zero".into()));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(StreamError::Validation(format!(
                "chunk_size too large: {} > {}",
                self.chunk_size, MAX_CHUNK_SIZE
            )));
        }
        Ok(())
    }
}
