//! Settings loading, validation and persistence

mod credentials;
mod error;
mod general;
mod io;
mod store;

pub use credentials::{is_masked, mask_secret, CredentialStore, MASK_SENTINEL};
pub use error::SettingsError;
pub use general::{GeneralSettings, GeneralSettingsForm};
pub use store::{
    ApplyRequest, SettingsStore, DEFAULT_API_VERSION, KEY_API_VERSION, KEY_CLIENT_TYPE, KEY_MODEL,
    SETTINGS_DIR, SETTINGS_FILE,
};
