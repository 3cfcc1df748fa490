use std::fmt;

use thiserror::Error;

/// The configured secret cannot be turned into a 256-bit key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
    #[error(
        "DATA_ENCRYPTION_KEY must be 32 bytes (base64 or raw); base64 gave {decoded}, raw text is {raw_len} bytes"
    )]
    InvalidLength { decoded: DecodedLen, raw_len: usize },
}

/// Length of the base64 interpretation of a rejected secret, if it decoded at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedLen(pub Option<usize>);

impl fmt::Display for DecodedLen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(len) => write!(f, "{} bytes", len),
            None => f.write_str("invalid base64"),
        }
    }
}

/// Which part of a bundle a format error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    Nonce,
    Tag,
    Ciphertext,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Segment::Nonce => "nonce",
            Segment::Tag => "tag",
            Segment::Ciphertext => "ciphertext",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedBundle {
    #[error("expected 3 dot-separated segments, found {0}")]
    SegmentCount(usize),

    #[error("{0} segment is empty")]
    EmptySegment(Segment),

    #[error("{0} segment is not valid base64")]
    Base64(Segment),

    #[error("{segment} is {actual} bytes, expected {expected}")]
    Length {
        segment: Segment,
        expected: usize,
        actual: usize,
    },
}

/// Failure to seal or open a contact bundle.
///
/// Readers should not try to tell these apart: a malformed bundle, a bundle
/// sealed under another key and a tampered bundle all mean the plaintext is
/// unrecoverable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    #[error("malformed contact bundle: {0}")]
    Malformed(#[from] MalformedBundle),

    #[error("contact bundle failed authentication")]
    Authentication,

    #[error("decrypted contact is not valid UTF-8")]
    InvalidUtf8,

    #[error("contact encryption failed")]
    Encryption,
}
