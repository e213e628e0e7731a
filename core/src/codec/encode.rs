//! codec/encode.rs
//! Bytes to lowercase hex (`%02x` per byte, no separators).

use crate::codec::types::ChunkEncoder;
use crate::constants::NEWLINE;

/// Stateless apart from remembering whether the trailer was written.
#[derive(Debug, Default)]
pub struct HexEncoder {
    finished: bool,
}

impl HexEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ChunkEncoder for HexEncoder {
    fn encode_chunk(&mut self, input: &[u8], out: &mut Vec<u8>) {
        out.reserve(input.len() * 2);
        out.extend_from_slice(hex::encode(input).as_bytes());
    }

    fn finish(&mut self, out: &mut Vec<u8>) {
        if !self.finished {
            out.push(NEWLINE);
            self.finished = true;
        }
    }
}
