//! Sosohelper Crypto Library
//!
//! Contact numbers (WhatsApp) are stored encrypted with AES-256-GCM under a
//! single server-held key. Each stored value is a text bundle of the form
//! `base64(nonce).base64(tag).base64(ciphertext)`.

pub mod bundle;
pub mod encrypt;
pub mod error;
pub mod keys;
pub mod reveal;

pub use encrypt::ContactCipher;
pub use error::{CipherError, KeyError, MalformedBundle, Segment};
pub use keys::ContactKey;
