//! codec/types.rs
//! Direction enum, codec error, and the chunk-level encoder/decoder traits.
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Direction of the translation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mode {
    /// Bytes to lowercase hex text.
    #[default]
    Encode,
    /// Hex text back to bytes.
    Decode,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Encode => "encode",
            Mode::Decode => "decode",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A non-newline byte outside `0-9a-fA-F` completed a pair.
    /// `offset` counts every input byte, newlines included.
    #[error("invalid hex digit 0x{byte:02x} ('{}') at offset {offset}", escaped(.byte))]
    InvalidHexDigit { byte: u8, offset: u64 },
}

fn escaped(byte: &u8) -> String {
    (*byte as char).escape_default().to_string()
}

pub trait ChunkEncoder {
    /// Append two lowercase hex digits per input byte to `out`.
    fn encode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>);
    /// Append the stream trailer (a single newline). Only the first call writes.
    fn finish(&mut self, out: &mut Vec<u8>);
}

pub trait ChunkDecoder {
    /// Decode hex text into `out`, carrying a half pair across calls.
    ///
    /// On error `out` keeps every byte completed before the bad digit.
    fn decode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CodecError>;
    /// End of stream. Returns the dropped dangling digit, if any.
    fn finish(&mut self) -> Option<u8>;
    /// Newlines skipped so far.
    fn newlines_skipped(&self) -> u64;
}
