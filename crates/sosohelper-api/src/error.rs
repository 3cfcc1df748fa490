use thiserror::Error;

use sosohelper_crypto::CipherError;
use sosohelper_types::contact::InvalidContact;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    InvalidContact(#[from] InvalidContact),

    #[error("Invalid input: {0}")]
    InvalidInput(&'static str),

    #[error("Helper not found")]
    HelperNotFound,

    #[error("Bookmark not found")]
    BookmarkNotFound,

    /// Sealing a contact on the write path must never be skipped.
    #[error("Failed to seal contact: {0}")]
    Seal(#[from] CipherError),
}
