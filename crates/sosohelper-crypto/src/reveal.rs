use tracing::warn;

use crate::encrypt::ContactCipher;

impl ContactCipher {
    /// Decrypt a stored contact for display.
    ///
    /// A contact that cannot be decrypted (corrupt, legacy format, sealed
    /// under another key) is hidden rather than failing the surrounding read.
    /// Only read paths should use this; writes go through
    /// [`encrypt_string`](Self::encrypt_string) and propagate errors.
    pub fn reveal(&self, stored: Option<&str>) -> Option<String> {
        let bundle = stored?;
        match self.decrypt_string(bundle) {
            Ok(plaintext) => Some(plaintext),
            Err(e) => {
                warn!("Hiding stored contact that failed to decrypt: {}", e);
                None
            }
        }
    }
}
