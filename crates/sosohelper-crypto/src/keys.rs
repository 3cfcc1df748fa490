use std::fmt;

use aes_gcm::aead::OsRng;
use aes_gcm::aead::rand_core::RngCore;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

use crate::error::{DecodedLen, KeyError};

pub const KEY_LEN: usize = 32;

// Secrets come from env files and secret stores, so padding and alphabet vary.
const LENIENT: GeneralPurposeConfig = GeneralPurposeConfig::new()
    .with_decode_padding_mode(DecodePaddingMode::Indifferent)
    .with_decode_allow_trailing_bits(true);
const SECRET_STANDARD: GeneralPurpose = GeneralPurpose::new(&alphabet::STANDARD, LENIENT);
const SECRET_URL_SAFE: GeneralPurpose = GeneralPurpose::new(&alphabet::URL_SAFE, LENIENT);

/// The 256-bit key that protects contact fields at rest.
///
/// Built once at startup from configuration and handed to whoever needs it.
#[derive(Clone, PartialEq, Eq)]
pub struct ContactKey([u8; KEY_LEN]);

impl ContactKey {
    /// Derive the key from the configured secret.
    ///
    /// A secret that base64-decodes to exactly 32 bytes is used as those
    /// bytes. Padding is optional, either the standard or URL-safe alphabet
    /// is accepted, and whitespace (a trailing newline, line wrapping) is
    /// ignored. Otherwise the raw UTF-8 bytes are used if there are exactly
    /// 32. Anything else is rejected, never padded or truncated.
    pub fn from_secret(secret: &str) -> Result<Self, KeyError> {
        let decoded = decode_secret(secret);

        if let Some(bytes) = &decoded {
            if let Ok(key) = <[u8; KEY_LEN]>::try_from(bytes.as_slice()) {
                return Ok(Self(key));
            }
        }

        if let Ok(key) = <[u8; KEY_LEN]>::try_from(secret.as_bytes()) {
            return Ok(Self(key));
        }

        Err(KeyError::InvalidLength {
            decoded: DecodedLen(decoded.map(|b| b.len())),
            raw_len: secret.len(),
        })
    }

    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Generate a random key, e.g. for a fresh deployment.
    pub fn generate() -> Self {
        let mut key = [0u8; KEY_LEN];
        OsRng.fill_bytes(&mut key);
        Self(key)
    }

    /// Encode the key as base64, the recommended form for `DATA_ENCRYPTION_KEY`.
    pub fn to_base64(&self) -> String {
        BASE64.encode(self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

fn decode_secret(secret: &str) -> Option<Vec<u8>> {
    let compact: String = secret
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();

    SECRET_STANDARD
        .decode(&compact)
        .or_else(|_| SECRET_URL_SAFE.decode(&compact))
        .ok()
}

impl fmt::Debug for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContactKey(..)")
    }
}
