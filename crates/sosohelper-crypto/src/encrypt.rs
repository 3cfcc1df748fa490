use std::fmt;

use aes_gcm::{
    Aes256Gcm, Key, Nonce, Tag,
    aead::{AeadInPlace, KeyInit, OsRng, rand_core::RngCore},
};

use crate::bundle::{Bundle, NONCE_LEN, TAG_LEN};
use crate::error::{CipherError, KeyError};
use crate::keys::ContactKey;

/// Seals and opens contact fields with AES-256-GCM.
///
/// Holds no mutable state, so one instance can be shared across threads.
#[derive(Clone)]
pub struct ContactCipher {
    cipher: Aes256Gcm,
}

impl ContactCipher {
    pub fn new(key: &ContactKey) -> Self {
        Self {
            cipher: Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key.as_bytes())),
        }
    }

    /// Validate the configured secret and build the cipher in one step.
    pub fn from_secret(secret: &str) -> Result<Self, KeyError> {
        Ok(Self::new(&ContactKey::from_secret(secret)?))
    }

    /// Encrypt a contact under a fresh random nonce and return the storage bundle.
    pub fn encrypt_string(&self, plaintext: &str) -> Result<String, CipherError> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce);

        let mut ciphertext = plaintext.as_bytes().to_vec();
        let tag = self
            .cipher
            .encrypt_in_place_detached(Nonce::from_slice(&nonce), b"", &mut ciphertext)
            .map_err(|_| CipherError::Encryption)?;

        let mut tag_bytes = [0u8; TAG_LEN];
        tag_bytes.copy_from_slice(tag.as_slice());

        Ok(Bundle {
            nonce,
            tag: tag_bytes,
            ciphertext,
        }
        .encode())
    }

    /// Recover the plaintext of a bundle produced by [`encrypt_string`](Self::encrypt_string).
    ///
    /// Nothing is returned unless the tag verifies under this key.
    pub fn decrypt_string(&self, bundle: &str) -> Result<String, CipherError> {
        let Bundle {
            nonce,
            tag,
            mut ciphertext,
        } = Bundle::decode(bundle)?;

        self.cipher
            .decrypt_in_place_detached(
                Nonce::from_slice(&nonce),
                b"",
                &mut ciphertext,
                Tag::from_slice(&tag),
            )
            .map_err(|_| CipherError::Authentication)?;

        String::from_utf8(ciphertext).map_err(|_| CipherError::InvalidUtf8)
    }
}

impl fmt::Debug for ContactCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactCipher").finish_non_exhaustive()
    }
}
