// MinIO Rust Library for Amazon S3 Compatible Cloud Storage
// Copyright 2025 MinIO, Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Base64 codec using the RFC 4648 basic alphabet with `=` padding.
//!
//! Two decoders are provided. [`decode`] rejects malformed input with a
//! [`Base64Error`]. [`decode_lenient`] keeps the historical contract: input
//! whose length is not a multiple of four yields an empty buffer and
//! characters outside the alphabet decode as zero.

use crate::s3::error::Base64Error;

const ENCODE_TABLE: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

const PAD: u8 = b'=';
const INVALID: u8 = 0xFF;

const DECODE_TABLE: [u8; 256] = build_decode_table();

const fn build_decode_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ENCODE_TABLE.len() {
        table[ENCODE_TABLE[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Returns the 6-bit value of an alphabet character, or `None` if `c` is not
/// part of the alphabet. The padding character is not part of the alphabet.
#[inline]
pub fn lookup(c: u8) -> Option<u8> {
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        v => Some(v),
    }
}

/// Encodes data using the base64 algorithm
pub fn encode<T: AsRef<[u8]>>(input: T) -> String {
    let data = input.as_ref();
    let mut out = String::with_capacity(data.len().div_ceil(3) * 4);

    for chunk in data.chunks(3) {
        let a = chunk[0] as u32;
        let b = chunk.get(1).copied().unwrap_or(0) as u32;
        let c = chunk.get(2).copied().unwrap_or(0) as u32;
        let triple = (a << 16) | (b << 8) | c;

        out.push(ENCODE_TABLE[((triple >> 18) & 0x3F) as usize] as char);
        out.push(ENCODE_TABLE[((triple >> 12) & 0x3F) as usize] as char);
        if chunk.len() > 1 {
            out.push(ENCODE_TABLE[((triple >> 6) & 0x3F) as usize] as char);
        } else {
            out.push(PAD as char);
        }
        if chunk.len() > 2 {
            out.push(ENCODE_TABLE[(triple & 0x3F) as usize] as char);
        } else {
            out.push(PAD as char);
        }
    }

    out
}

/// Decodes well-formed base64 text.
///
/// Fails if the length is not a multiple of four, if a character is outside
/// the alphabet, or if padding appears anywhere but the last two positions.
pub fn decode(input: &str) -> Result<Vec<u8>, Base64Error> {
    let bytes = input.as_bytes();

    let padding = bytes.iter().rev().take_while(|&&b| b == PAD).count();
    let data_len = bytes.len() - padding;

    for (offset, ch) in input.char_indices() {
        if offset >= data_len {
            break;
        }
        if ch == PAD as char {
            return Err(Base64Error::InvalidPadding(offset));
        }
        if !ch.is_ascii() || lookup(ch as u8).is_none() {
            return Err(Base64Error::InvalidCharacter { ch, offset });
        }
    }

    if bytes.len() % 4 != 0 {
        return Err(Base64Error::InvalidLength(bytes.len()));
    }
    if padding > 2 {
        return Err(Base64Error::InvalidPadding(data_len));
    }

    Ok(decode_groups(bytes))
}

/// Decodes base64 text without reporting errors.
///
/// Returns an empty buffer when the input length is not a multiple of four.
/// Characters outside the alphabet are treated as the value zero, so garbled
/// input silently decodes to garbage.
pub fn decode_lenient(input: &str) -> Vec<u8> {
    let bytes = input.as_bytes();
    if bytes.len() % 4 != 0 {
        return Vec::new();
    }
    decode_groups(bytes)
}

fn decode_groups(bytes: &[u8]) -> Vec<u8> {
    let mut out_len = bytes.len() / 4 * 3;
    if bytes.ends_with(b"==") {
        out_len -= 2;
    } else if bytes.ends_with(b"=") {
        out_len -= 1;
    }

    let mut out = Vec::with_capacity(out_len);
    for group in bytes.chunks_exact(4) {
        let triple = group.iter().fold(0u32, |acc, &c| {
            let sextet = if c == PAD { 0 } else { lookup(c).unwrap_or(0) };
            (acc << 6) | sextet as u32
        });

        for shift in [16, 8, 0] {
            if out.len() < out_len {
                out.push((triple >> shift) as u8);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::base64::Engine as _;
    use ::base64::engine::general_purpose::STANDARD;

    #[test]
    fn test_encode_rfc4648_vectors() {
        let vectors = [
            ("", ""),
            ("f", "Zg=="),
            ("fo", "Zm8="),
            ("foo", "Zm9v"),
            ("foob", "Zm9vYg=="),
            ("fooba", "Zm9vYmE="),
            ("foobar", "Zm9vYmFy"),
        ];
        for (plain, encoded) in vectors {
            assert_eq!(encode(plain), encoded, "encoding {plain:?}");
            assert_eq!(decode(encoded).unwrap(), plain.as_bytes());
            assert_eq!(decode_lenient(encoded), plain.as_bytes());
        }
    }

    #[test]
    fn test_encode_padding() {
        assert_eq!(encode(b""), "");
        assert!(encode(b"\x01").ends_with("=="));
        let two = encode(b"\x01\x02");
        assert!(two.ends_with('=') && !two.ends_with("=="));
        assert!(!encode(b"\x01\x02\x03").contains('='));
    }

    #[test]
    fn test_encode_full_byte_range_matches_reference() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(encode(&data), STANDARD.encode(&data));
    }

    #[test]
    fn test_lookup_alphabet() {
        assert_eq!(lookup(b'A'), Some(0));
        assert_eq!(lookup(b'a'), Some(26));
        assert_eq!(lookup(b'0'), Some(52));
        assert_eq!(lookup(b'+'), Some(62));
        assert_eq!(lookup(b'/'), Some(63));
        assert_eq!(lookup(b'='), None);
        assert_eq!(lookup(b'-'), None);
    }

    #[test]
    fn test_decode_lenient_bad_length_is_empty() {
        assert!(decode_lenient("abc").is_empty());
        assert!(decode_lenient("Zm9vY").is_empty());
    }

    #[test]
    fn test_decode_lenient_invalid_character_is_zero() {
        // '!' decodes as 'A' (value 0)
        assert_eq!(decode_lenient("Zm9!"), decode_lenient("Zm9A"));
    }

    #[test]
    fn test_decode_strict_errors() {
        assert_eq!(decode("abc"), Err(Base64Error::InvalidLength(3)));
        assert_eq!(
            decode("ab!d"),
            Err(Base64Error::InvalidCharacter { ch: '!', offset: 2 })
        );
        assert_eq!(
            decode("abé="),
            Err(Base64Error::InvalidCharacter { ch: 'é', offset: 2 })
        );
        assert_eq!(decode("a=bc"), Err(Base64Error::InvalidPadding(1)));
        assert_eq!(decode("a==="), Err(Base64Error::InvalidPadding(1)));
        assert_eq!(decode("===="), Err(Base64Error::InvalidPadding(0)));
    }

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode("").unwrap(), Vec::<u8>::new());
        assert!(decode_lenient("").is_empty());
    }

    quickcheck! {
        fn prop_roundtrip(data: Vec<u8>) -> bool {
            decode(&encode(&data)).map(|d| d == data).unwrap_or(false)
                && decode_lenient(&encode(&data)) == data
        }

        fn prop_matches_reference_encoder(data: Vec<u8>) -> bool {
            encode(&data) == STANDARD.encode(&data)
        }

        fn prop_encoded_length(data: Vec<u8>) -> bool {
            encode(&data).len() == data.len().div_ceil(3) * 4
        }
    }
}
