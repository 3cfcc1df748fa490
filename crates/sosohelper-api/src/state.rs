use std::sync::Arc;

use tracing::info;

use sosohelper_crypto::{ContactCipher, KeyError};
use sosohelper_presence::OnlineTtl;

use crate::config::Settings;

pub type AppState = Arc<AppStateInner>;

/// Everything a request handler needs to render or store contact and
/// presence data. Built once at startup and shared read-only.
#[derive(Debug)]
pub struct AppStateInner {
    pub cipher: ContactCipher,
    pub online_ttl: OnlineTtl,
}

impl AppStateInner {
    pub fn new(cipher: ContactCipher, online_ttl: OnlineTtl) -> AppState {
        Arc::new(Self { cipher, online_ttl })
    }

    /// Derive the contact key now so a bad secret stops startup instead of
    /// the first request.
    pub fn from_settings(settings: &Settings) -> Result<AppState, KeyError> {
        let cipher = ContactCipher::from_secret(&settings.data_encryption_key)?;
        info!("Contact cipher ready, online TTL {}", settings.online_ttl);
        Ok(Self::new(cipher, settings.online_ttl))
    }
}
