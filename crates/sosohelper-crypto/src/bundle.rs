//! Text encoding of a sealed contact field.
//!
//! Format: `base64(nonce).base64(tag).base64(ciphertext)` using the standard
//! padded alphabet. The nonce and tag segments are always present; the
//! ciphertext segment is empty only when the plaintext was empty.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::{MalformedBundle, Segment};

pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;

const DELIMITER: char = '.';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    pub nonce: [u8; NONCE_LEN],
    pub tag: [u8; TAG_LEN],
    pub ciphertext: Vec<u8>,
}

impl Bundle {
    pub fn encode(&self) -> String {
        format!(
            "{}{d}{}{d}{}",
            BASE64.encode(self.nonce),
            BASE64.encode(self.tag),
            BASE64.encode(&self.ciphertext),
            d = DELIMITER,
        )
    }

    pub fn decode(text: &str) -> Result<Self, MalformedBundle> {
        let segments: Vec<&str> = text.split(DELIMITER).collect();
        let [nonce, tag, ciphertext] = segments.as_slice() else {
            return Err(MalformedBundle::SegmentCount(segments.len()));
        };

        let nonce = decode_fixed::<NONCE_LEN>(nonce, Segment::Nonce)?;
        let tag = decode_fixed::<TAG_LEN>(tag, Segment::Tag)?;
        let ciphertext = BASE64
            .decode(ciphertext)
            .map_err(|_| MalformedBundle::Base64(Segment::Ciphertext))?;

        Ok(Self {
            nonce,
            tag,
            ciphertext,
        })
    }
}

fn decode_fixed<const N: usize>(text: &str, segment: Segment) -> Result<[u8; N], MalformedBundle> {
    if text.is_empty() {
        return Err(MalformedBundle::EmptySegment(segment));
    }

    let bytes = BASE64
        .decode(text)
        .map_err(|_| MalformedBundle::Base64(segment))?;

    <[u8; N]>::try_from(bytes.as_slice()).map_err(|_| MalformedBundle::Length {
        segment,
        expected: N,
        actual: bytes.len(),
    })
}
