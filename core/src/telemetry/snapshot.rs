//! telemetry/snapshot.rs
//! Immutable summary of one stream run.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::codec::Mode;
use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

/// Core telemetry snapshot.
/// Captures counters, ratio, throughput, stage timings, and elapsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub mode: Mode,
    pub chunks_read: u64,
    pub bytes_in: u64,
    pub bytes_out: u64,
    pub newlines_skipped: u64,
    pub pairs_decoded: u64,
    pub dangling_nibble: bool,
    /// `bytes_out / bytes_in`, 0 for empty input.
    pub expansion_ratio: f64,
    pub throughput_in_bytes_per_sec: f64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(mode: Mode, counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let elapsed = timer.elapsed();

        let expansion_ratio = if counters.bytes_in > 0 {
            counters.bytes_out as f64 / counters.bytes_in as f64
        } else {
            0.0
        };

        let throughput = if elapsed.as_secs_f64() > 0.0 {
            counters.bytes_in as f64 / elapsed.as_secs_f64()
        } else {
            0.0
        };

        Self {
            mode,
            chunks_read: counters.chunks_read,
            bytes_in: counters.bytes_in,
            bytes_out: counters.bytes_out,
            newlines_skipped: counters.newlines_skipped,
            pairs_decoded: counters.pairs_decoded,
            dangling_nibble: counters.dangling_nibble,
            expansion_ratio,
            throughput_in_bytes_per_sec: throughput,
            elapsed,
            stage_times: timer.stage_times.clone(),
        }
    }

    pub fn total_stage_time(&self) -> Duration {
        self.stage_times.total()
    }

    /// Checks the byte accounting invariants of a completed run:
    /// - encode: `bytes_out == 2 * bytes_in + 1`
    /// - decode: one output byte per completed pair, and every non-newline
    ///   input byte is either paired or the single dangling nibble
    pub fn sanity_check(&self) -> bool {
        let timing = self.total_stage_time() <= self.elapsed;
        let bytes = match self.mode {
            Mode::Encode => self.bytes_out == 2 * self.bytes_in + 1,
            Mode::Decode => {
                let digits = self.bytes_in - self.newlines_skipped;
                self.bytes_out == self.pairs_decoded
                    && digits == 2 * self.pairs_decoded + u64::from(self.dangling_nibble)
            }
        };
        timing && bytes
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
