pub mod bookmarks;
pub mod config;
pub mod error;
pub mod helpers;
pub mod jobs;
pub mod presence;
pub mod profile;
pub mod state;

pub use config::{Settings, SettingsError};
pub use error::ApiError;
pub use state::{AppState, AppStateInner};
