use std::env;
use std::fmt;

use thiserror::Error;
use tracing::{info, warn};

use sosohelper_presence::OnlineTtl;

pub const DATA_ENCRYPTION_KEY: &str = "DATA_ENCRYPTION_KEY";
pub const ONLINE_TTL_SECONDS: &str = "ONLINE_TTL_SECONDS";

const MIN_SECRET_CHARS: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{0} must be at least 32 characters")]
    TooShort(&'static str),

    #[error("{name} must be a positive integer, got {value:?}")]
    InvalidTtl { name: &'static str, value: String },
}

/// Process-wide configuration, read once at startup.
#[derive(Clone)]
pub struct Settings {
    /// Secret the contact key is derived from (32 bytes, base64 or raw).
    pub data_encryption_key: String,
    pub online_ttl: OnlineTtl,
}

impl Settings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build settings from any variable source.
    ///
    /// Only checks presence and shape; whether the secret yields a valid key
    /// is decided when the cipher is built.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_encryption_key = lookup(DATA_ENCRYPTION_KEY)
            .filter(|v| !v.is_empty())
            .ok_or(SettingsError::Missing(DATA_ENCRYPTION_KEY))?;

        // Length in UTF-16 code units, as the rest of the stack measures it.
        // Stricter than the cipher for short multi-byte secrets.
        if data_encryption_key.encode_utf16().count() < MIN_SECRET_CHARS {
            warn!("{} is shorter than {} characters", DATA_ENCRYPTION_KEY, MIN_SECRET_CHARS);
            return Err(SettingsError::TooShort(DATA_ENCRYPTION_KEY));
        }

        let online_ttl = match lookup(ONLINE_TTL_SECONDS) {
            None => {
                info!("{} not set, using default: {}", ONLINE_TTL_SECONDS, OnlineTtl::DEFAULT);
                OnlineTtl::DEFAULT
            }
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .and_then(OnlineTtl::from_secs)
                .ok_or_else(|| {
                    warn!("Invalid {} value: {:?}", ONLINE_TTL_SECONDS, raw);
                    SettingsError::InvalidTtl {
                        name: ONLINE_TTL_SECONDS,
                        value: raw.clone(),
                    }
                })?,
        };

        Ok(Self {
            data_encryption_key,
            online_ttl,
        })
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("data_encryption_key", &"<redacted>")
            .field("online_ttl", &self.online_ttl)
            .finish()
    }
}
