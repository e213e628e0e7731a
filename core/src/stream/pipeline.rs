//! stream/pipeline.rs
//! Sequential read → translate → write loop.
//!
//! One chunk is in flight at a time. Output for a chunk is written and
//! flushed before the next read, so a downstream reader sees every completed
//! unit without waiting for end of stream.

use std::io::{Read, Write};

use crate::codec::{resolve, ChunkDecoder, ChunkEncoder, Codec};
use crate::stream::config::StreamConfig;
use crate::stream::io::{read_chunk, write_chunk};
use crate::telemetry::{Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamError;

/// Translate everything `reader` yields into `writer` according to `config.mode`.
///
/// Encode writes a single trailing newline after the last byte. Decode drops
/// a dangling nibble at EOF without error. On malformed input the bytes
/// completed before the bad digit are still written and flushed.
pub fn run_stream<R, W>(
    reader: &mut R,
    writer: &mut W,
    config: &StreamConfig,
) -> Result<TelemetrySnapshot, StreamError>
where
    R: Read + ?Sized,
    W: Write + ?Sized,
{
    config.validate()?;

    let mut driver = Driver::new(config);
    if config.trace {
        eprintln!(
            "[STREAM] start {} (chunk_size={})",
            resolve(config.mode).name,
            config.chunk_size
        );
    }

    let result = match Codec::for_mode(config.mode) {
        Codec::Encoder(mut encoder) => driver.encode(&mut *encoder, reader, writer),
        Codec::Decoder(mut decoder) => driver.decode(&mut *decoder, reader, writer),
    };
    if let Err(e) = &result {
        if config.trace {
            eprintln!("[STREAM] aborted after {} bytes in: {e}", driver.counters.bytes_in);
        }
    }
    result?;

    Ok(driver.finish())
}

struct Driver<'a> {
    config: &'a StreamConfig,
    timer: TelemetryTimer,
    counters: TelemetryCounters,
    buf: Vec<u8>,
    out: Vec<u8>,
}

impl<'a> Driver<'a> {
    fn new(config: &'a StreamConfig) -> Self {
        Self {
            config,
            timer: TelemetryTimer::new(),
            counters: TelemetryCounters::default(),
            buf: vec![0u8; config.chunk_size],
            out: Vec::new(),
        }
    }

    /// Next chunk length; 0 at EOF.
    fn read<R: Read + ?Sized>(&mut self, reader: &mut R) -> Result<usize, StreamError> {
        let buf = &mut self.buf;
        let n = self.timer.time(Stage::Read, || read_chunk(reader, buf))?;
        if n > 0 {
            self.counters.add_read(n);
        }
        Ok(n)
    }

    /// Write the pending output and flush it through.
    fn emit<W: Write + ?Sized>(&mut self, writer: &mut W) -> Result<(), StreamError> {
        let out = &self.out;
        self.timer.time(Stage::Write, || write_chunk(writer, out))?;
        self.timer.time(Stage::Flush, || writer.flush())?;
        self.out.clear();
        Ok(())
    }

    fn encode<R, W>(
        &mut self,
        encoder: &mut dyn ChunkEncoder,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), StreamError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            let n = self.read(reader)?;
            if n == 0 {
                break;
            }
            let (input, out) = (&self.buf[..n], &mut self.out);
            self.timer.time(Stage::Encode, || encoder.encode_chunk(input, out));
            self.counters.add_encoded(self.out.len());
            self.emit(writer)?;
        }

        encoder.finish(&mut self.out);
        self.counters.add_trailer(self.out.len());
        self.emit(writer)
    }

    fn decode<R, W>(
        &mut self,
        decoder: &mut dyn ChunkDecoder,
        reader: &mut R,
        writer: &mut W,
    ) -> Result<(), StreamError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        loop {
            let n = self.read(reader)?;
            if n == 0 {
                break;
            }
            let (input, out) = (&self.buf[..n], &mut self.out);
            let decoded = self.timer.time(Stage::Decode, || decoder.decode_chunk(input, out));
            self.counters.add_decoded(self.out.len());
            // Bytes completed ahead of a bad digit are not rolled back.
            self.emit(writer)?;
            decoded?;
        }

        self.counters.newlines_skipped = decoder.newlines_skipped();
        if let Some(digit) = decoder.finish() {
            self.counters.dangling_nibble = true;
            if self.config.trace {
                eprintln!(
                    "[STREAM] dropping dangling nibble {:?} at EOF",
                    digit as char
                );
            }
        }
        Ok(())
    }

    fn finish(mut self) -> TelemetrySnapshot {
        self.timer.finish();
        let snapshot = TelemetrySnapshot::from(self.config.mode, &self.counters, &self.timer);
        if self.config.trace {
            match snapshot.to_json() {
                Ok(json) => eprintln!("[STREAM] done {json}"),
                Err(e) => eprintln!("[STREAM] done (telemetry unavailable: {e})"),
            }
        }
        snapshot
    }
}
