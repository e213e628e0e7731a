//! telemetry/counters.rs
//! Mutable counters used while a stream runs.
//!
//! Summary: collects chunk and byte counts during encode/decode.
//! Converted into an immutable TelemetrySnapshot at stream end.
use serde::{Deserialize, Serialize};

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    pub chunks_read: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub newlines_skipped: u64,
    pub pairs_decoded: u64,
    pub dangling_nibble: bool,
}

impl TelemetryCounters {
    /// Record one chunk read from the input.
    pub fn add_read(&mut self, len: usize) {
        self.chunks_read += 1;
        self.bytes_in += len as u64;
    }

    /// Record one encoded chunk.
    /// - `out_len`: hex digits produced (trailer excluded)
    pub fn add_encoded(&mut self, out_len: usize) {
        self.bytes_out += out_len as u64;
    }

    /// Record one decoded chunk.
    /// - `out_len`: bytes produced, one per completed pair
    pub fn add_decoded(&mut self, out_len: usize) {
        self.bytes_out += out_len as u64;
        self.pairs_decoded += out_len as u64;
    }

    /// Record the encoder trailer.
    pub fn add_trailer(&mut self, len: usize) {
        self.bytes_out += len as u64;
    }
}
