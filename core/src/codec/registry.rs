//! codec/registry.rs
//! Mode registry and factory functions.

use crate::codec::decode::HexDecoder;
use crate::codec::encode::HexEncoder;
use crate::codec::types::{ChunkDecoder, ChunkEncoder, CodecError, Mode};

pub struct CodecInfo {
    pub name: &'static str,
}

pub fn resolve(mode: Mode) -> CodecInfo {
    match mode {
        Mode::Encode => CodecInfo { name: "hex-encode" },
        Mode::Decode => CodecInfo { name: "hex-decode" },
    }
}

/// One direction's codec, ready to be driven chunk by chunk.
pub enum Codec {
    Encoder(Box<dyn ChunkEncoder>),
    Decoder(Box<dyn ChunkDecoder>),
}

impl Codec {
    pub fn for_mode(mode: Mode) -> Self {
        match mode {
            Mode::Encode => Codec::Encoder(create_encoder()),
            Mode::Decode => Codec::Decoder(create_decoder()),
        }
    }

    pub fn mode(&self) -> Mode {
        match self {
            Codec::Encoder(_) => Mode::Encode,
            Codec::Decoder(_) => Mode::Decode,
        }
    }
}

pub fn create_encoder() -> Box<dyn ChunkEncoder> {
    Box::new(HexEncoder::new())
}

pub fn create_decoder() -> Box<dyn ChunkDecoder> {
    Box::new(HexDecoder::new())
}

/// Encode a whole buffer, trailer included.
pub fn encode_to_vec(input: &[u8]) -> Vec<u8> {
    let mut enc = HexEncoder::new();
    let mut out = Vec::with_capacity(input.len() * 2 + 1);
    enc.encode_chunk(input, &mut out);
    enc.finish(&mut out);
    out
}

/// Decode a whole buffer. A dangling last digit is dropped.
pub fn decode_to_vec(input: &[u8]) -> Result<Vec<u8>, CodecError> {
    let mut dec = HexDecoder::new();
    let mut out = Vec::with_capacity(input.len() / 2);
    dec.decode_chunk(input, &mut out)?;
    dec.finish();
    Ok(out)
}
