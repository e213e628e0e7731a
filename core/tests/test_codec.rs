// Concrete encode/decode scenarios over in-memory buffers.

#[cfg(test)]
mod tests {
    use hexpipe_core::codec::{decode_to_vec, encode_to_vec, resolve, Codec, CodecError, Mode};

    #[test]
    fn encode_empty_is_single_newline() {
        assert_eq!(encode_to_vec(b""), b"\n");
    }

    #[test]
    fn encode_min_and_max_byte() {
        assert_eq!(encode_to_vec(b"\x00\xff"), b"00ff\n");
    }

    #[test]
    fn encode_text() {
        assert_eq!(encode_to_vec(b"Hi!\n"), b"4869210a\n");
    }

    #[test]
    fn decode_with_trailing_newline() {
        assert_eq!(decode_to_vec(b"00ff\n").unwrap(), b"\x00\xff");
    }

    #[test]
    fn decode_ignores_embedded_newline() {
        assert_eq!(decode_to_vec(b"00\nff").unwrap(), b"\x00\xff");
    }

    #[test]
    fn decode_single_dangling_nibble_is_empty() {
        assert_eq!(decode_to_vec(b"0").unwrap(), b"");
    }

    #[test]
    fn decode_only_newlines_is_empty() {
        assert_eq!(decode_to_vec(b"\n\n\n").unwrap(), b"");
    }

    #[test]
    fn decode_rejects_invalid_second_nibble() {
        let err = decode_to_vec(b"0g").unwrap_err();
        assert_eq!(err, CodecError::InvalidHexDigit { byte: b'g', offset: 1 });
    }

    #[test]
    fn decode_rejects_space_and_prefix() {
        assert!(decode_to_vec(b"0x00").is_err());
        assert!(decode_to_vec(b"00 ff").is_err());
    }

    #[test]
    fn decode_accepts_uppercase() {
        assert_eq!(decode_to_vec(b"DEADbeef").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn registry_names() {
        assert_eq!(resolve(Mode::Encode).name, "hex-encode");
        assert_eq!(resolve(Mode::Decode).name, "hex-decode");
    }

    #[test]
    fn codec_for_mode_picks_direction() {
        let mut out = Vec::new();
        match Codec::for_mode(Mode::Encode) {
            Codec::Encoder(mut enc) => {
                enc.encode_chunk(b"\x01\xfe", &mut out);
                enc.finish(&mut out);
            }
            Codec::Decoder(_) => panic!("encode mode built a decoder"),
        }
        assert_eq!(out, b"01fe\n");

        let mut codec = Codec::for_mode(Mode::Decode);
        assert_eq!(codec.mode(), Mode::Decode);
        out.clear();
        match &mut codec {
            Codec::Decoder(dec) => {
                dec.decode_chunk(b"01\nfe7", &mut out).unwrap();
                assert_eq!(dec.finish(), Some(b'7'));
                assert_eq!(dec.newlines_skipped(), 1);
            }
            Codec::Encoder(_) => panic!("decode mode built an encoder"),
        }
        assert_eq!(out, vec![0x01, 0xfe]);
        assert_eq!(Codec::for_mode(Mode::Encode).mode(), Mode::Encode);
    }

    #[test]
    fn decode_works_on_bytes_not_characters() {
        // "é" is two bytes (c3 a9); they pair up like any other input bytes.
        let err = decode_to_vec("00é".as_bytes()).unwrap_err();
        assert_eq!(err, CodecError::InvalidHexDigit { byte: 0xc3, offset: 2 });
        // A lone trailing non-ASCII byte is a dangling nibble and is dropped.
        assert_eq!(decode_to_vec(b"00\xc3").unwrap(), b"\x00");
    }

    #[test]
    fn mode_defaults_to_encode() {
        assert_eq!(Mode::default(), Mode::Encode);
        assert_eq!(Mode::Decode.to_string(), "decode");
    }
}
