//! codec/decode.rs
//! Hex text to bytes.
//!
//! Pairing is a two-state machine: `Empty` or `Half` (one pending nibble).
//! Newlines never touch the state. Digits pair left to right across line
//! and chunk boundaries. A digit is only validated when its pair completes,
//! so a dangling last character is dropped without being checked.

use hex::FromHexError;

use crate::codec::types::{ChunkDecoder, CodecError};
use crate::constants::NEWLINE;

/// First character of an incomplete pair, with its absolute input offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingNibble {
    pub digit: u8,
    pub offset: u64,
}

#[derive(Debug, Default)]
pub struct HexDecoder {
    pending: Option<PendingNibble>,
    /// Absolute offset of the next input byte.
    offset: u64,
    newlines: u64,
}

impl HexDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffered high nibble, if a pair is half complete.
    pub fn pending(&self) -> Option<PendingNibble> {
        self.pending
    }
}

impl ChunkDecoder for HexDecoder {
    fn decode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) -> Result<(), CodecError> {
        out.reserve(input.len() / 2);

        for &byte in input {
            let offset = self.offset;
            self.offset += 1;

            if byte == NEWLINE {
                self.newlines += 1;
                continue;
            }

            match self.pending.take() {
                None => self.pending = Some(PendingNibble { digit: byte, offset }),
                Some(high) => out.push(decode_pair(high, PendingNibble { digit: byte, offset })?),
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> Option<u8> {
        self.pending.take().map(|p| p.digit)
    }

    fn newlines_skipped(&self) -> u64 {
        self.newlines
    }
}

fn decode_pair(high: PendingNibble, low: PendingNibble) -> Result<u8, CodecError> {
    let mut byte = [0u8; 1];
    match hex::decode_to_slice([high.digit, low.digit], &mut byte) {
        Ok(()) => Ok(byte[0]),
        Err(FromHexError::InvalidHexCharacter { index: 0, .. }) => Err(invalid(high)),
        Err(_) => Err(invalid(low)),
    }
}

fn invalid(nibble: PendingNibble) -> CodecError {
    CodecError::InvalidHexDigit {
        byte: nibble.digit,
        offset: nibble.offset,
    }
}
